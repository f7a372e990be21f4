//! Serializable snapshot of the model, printed by the replay binary

use serde::Serialize;

use crate::geometry::{Point, Size};
use crate::reorder::Container;

use super::ui::{Listener, NotificationKind};
use super::AppModel;

#[derive(Debug, Clone, Serialize)]
pub struct PanelView {
    pub id: String,
    /// `None` while the panel still uses the centered default
    pub position: Option<Point>,
    pub size: Size,
    pub z_index: i32,
    pub active: bool,
    pub dragging: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationView {
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub viewport: Size,
    /// Active panels bottom-to-top, then inactive ones
    pub panels: Vec<PanelView>,
    pub overlay_visible: bool,
    pub containers: Vec<Container>,
    pub notifications: Vec<NotificationView>,
    pub panel_drag_active: bool,
    pub reorder_active: bool,
    pub listeners: Vec<Listener>,
    pub text_selection_suppressed: bool,
    pub pending_requests: usize,
}

impl Snapshot {
    pub fn capture(model: &AppModel) -> Self {
        let active = model.panels.render_order();
        let inactive = model.panels.iter().filter(|p| !p.active);
        let panels = active
            .into_iter()
            .chain(inactive)
            .map(|p| PanelView {
                id: p.id.to_string(),
                position: p.position.point(),
                size: p.size,
                z_index: p.z_index,
                active: p.active,
                dragging: p.dragging,
            })
            .collect();

        Self {
            viewport: model.viewport,
            panels,
            overlay_visible: model.panels.overlay_visible(),
            containers: model.board.containers().to_vec(),
            notifications: model
                .ui
                .notifications
                .iter()
                .map(|n| NotificationView {
                    message: n.message.clone(),
                    kind: n.kind,
                })
                .collect(),
            panel_drag_active: model.panel_drag.is_some(),
            reorder_active: model.reorder.is_some(),
            listeners: model.ui.surface.listeners().iter().map(|(_, l)| *l).collect(),
            text_selection_suppressed: model.ui.surface.text_selection_suppressed(),
            pending_requests: model.sequencer.in_flight(),
        }
    }
}
