//! Floating panel state

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{centered_in, Point, Rect, Size};

/// Stable identifier of a floating panel (`"playlist"`, `"upload"`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a panel sits.
///
/// `Unset` means the panel has never been placed and uses the centered
/// layout; `At(0, 0)` is a real position in the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelPosition {
    #[default]
    Unset,
    At(Point),
}

impl PanelPosition {
    pub fn is_unset(&self) -> bool {
        matches!(self, PanelPosition::Unset)
    }

    /// Top-left corner in viewport coordinates
    pub fn resolve(&self, size: Size, viewport: Size) -> Point {
        match self {
            PanelPosition::Unset => centered_in(size, viewport),
            PanelPosition::At(point) => *point,
        }
    }

    pub fn point(&self) -> Option<Point> {
        match self {
            PanelPosition::Unset => None,
            PanelPosition::At(point) => Some(*point),
        }
    }
}

/// A floating, user-repositionable surface
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    pub id: PanelId,
    /// Measured size of the panel box
    pub size: Size,
    pub position: PanelPosition,
    /// Stacking order; higher draws on top
    pub z_index: i32,
    /// Whether the panel is currently shown
    pub active: bool,
    /// Visual "being dragged" marker
    pub dragging: bool,
    /// Whether the header has been wired up as a drag handle
    pub handle_attached: bool,
    /// Registration sequence, breaks z-index ties
    #[serde(skip)]
    pub(crate) seq: u64,
}

impl Panel {
    pub fn new(id: impl Into<PanelId>, size: Size, z_index: i32) -> Self {
        Self {
            id: id.into(),
            size,
            position: PanelPosition::Unset,
            z_index,
            active: false,
            dragging: false,
            handle_attached: false,
            seq: 0,
        }
    }

    /// Current bounding box
    pub fn rect(&self, viewport: Size) -> Rect {
        Rect::from_origin(self.position.resolve(self.size, viewport), self.size)
    }
}
