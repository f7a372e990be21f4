//! Drag session for a floating panel

use crate::geometry::Point;
use crate::model::ui::CaptureToken;

use super::panel::{PanelId, PanelPosition};

/// Why a panel drag ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEnd {
    /// Normal pointer release
    PointerUp,
    /// The surface lost pointer capture
    CaptureLost,
    /// The dragged panel left the visual tree
    TargetRemoved,
    /// The viewport changed size mid-gesture
    ViewportResized,
}

/// In-progress panel drag.
///
/// Created on a successful pointer-down and destroyed by the controller's
/// single teardown routine, which also hands the capture token back.
#[derive(Debug)]
pub struct DragSession {
    /// Panel being dragged (lookup key only)
    pub target: PanelId,
    /// Pointer position relative to the panel's top-left at grab time
    pub pointer_offset: Point,
    pub original_position: PanelPosition,
    pub original_z_index: i32,
    capture: CaptureToken,
}

impl DragSession {
    pub fn new(
        target: PanelId,
        pointer: Point,
        top_left: Point,
        original_position: PanelPosition,
        original_z_index: i32,
        capture: CaptureToken,
    ) -> Self {
        Self {
            target,
            pointer_offset: pointer.offset_from(top_left),
            original_position,
            original_z_index,
            capture,
        }
    }

    /// Unclamped top-left for a pointer position
    pub fn candidate(&self, pointer: Point) -> Point {
        pointer.offset_from(self.pointer_offset)
    }

    /// Consume the session, returning the capture it held
    pub fn into_capture(self) -> CaptureToken {
        self.capture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ui::{CaptureOwner, SurfaceCapture};

    #[test]
    fn test_offset_is_kept_constant() {
        let mut surface = SurfaceCapture::default();
        let token = surface.acquire(CaptureOwner::PanelDrag, true);
        let session = DragSession::new(
            PanelId::new("playlist"),
            Point::new(700.0, 500.0),
            Point::new(400.0, 250.0),
            PanelPosition::Unset,
            100,
            token,
        );
        assert_eq!(session.pointer_offset, Point::new(300.0, 250.0));
        assert_eq!(session.candidate(Point::new(710.0, 505.0)), Point::new(410.0, 255.0));

        surface.release(session.into_capture());
        assert!(surface.is_idle());
    }
}
