//! Panel update handlers
//!
//! Floating panel lifecycle and the panel drag state machine
//! (`Idle -> Dragging -> Idle`). Every way a drag can end goes through
//! `finish_drag`, which is the only place a `DragSession` is dropped.

use tracing::debug;

use crate::commands::Cmd;
use crate::geometry::{clamp_to_viewport, Point, Size};
use crate::guard::{is_interactive, Element};
use crate::messages::PanelMsg;
use crate::model::{AppModel, CaptureOwner};
use crate::panel::{DragEnd, DragSession, Panel, PanelId, PanelPosition};

/// Update function for panel messages
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Register { id, size } => register_panel(model, id, size),

        PanelMsg::AttachHandle(id) => {
            if model.panels.attach_handle(&id) {
                debug!(panel = %id, "drag handle attached");
            }
            None
        }

        PanelMsg::Activated(id) => on_activated(model, &id),

        PanelMsg::Open(id) => {
            // Dock icons toggle: a second click hides the panel again
            let is_active = model.panels.get(&id).map(|p| p.active)?;
            if is_active {
                model.panels.deactivate(&id);
                Some(Cmd::Redraw)
            } else {
                on_activated(model, &id)
            }
        }

        PanelMsg::Close(id) => model.panels.deactivate(&id).then_some(Cmd::Redraw),

        PanelMsg::CloseTopmost => {
            let id = model.panels.topmost_active()?.id.clone();
            model.panels.deactivate(&id);
            Some(Cmd::Redraw)
        }

        PanelMsg::Focus(id) => {
            if !model.panels.get(&id)?.active {
                return None;
            }
            model.panels.bring_to_front(&id);
            Some(Cmd::Redraw)
        }

        PanelMsg::Remove(id) => {
            if model.panel_drag.as_ref().map(|s| &s.target) == Some(&id) {
                finish_drag(model, DragEnd::TargetRemoved);
            }
            model.panels.remove(&id)?;
            debug!(panel = %id, "panel removed");
            Some(Cmd::Redraw)
        }

        PanelMsg::PointerDown {
            panel,
            pointer,
            target,
        } => begin_drag(model, &panel, pointer, &target),

        PanelMsg::PointerMove(pointer) => on_pointer_move(model, pointer),

        PanelMsg::PointerUp(_) => {
            model.panel_drag.as_ref()?;
            finish_drag(model, DragEnd::PointerUp);
            Some(Cmd::Redraw)
        }

        PanelMsg::PointerCaptureLost => {
            model.panel_drag.as_ref()?;
            finish_drag(model, DragEnd::CaptureLost);
            Some(Cmd::Redraw)
        }
    }
}

/// A panel entered the visual tree: register it and attach its handle
fn register_panel(model: &mut AppModel, id: PanelId, size: Size) -> Option<Cmd> {
    let panel = Panel::new(id.clone(), size, model.config.default_z_index);
    if model.panels.register(panel) {
        debug!(panel = %id, "panel registered");
    }
    model.panels.attach_handle(&id);
    None
}

/// Show a panel; center it if it has never been placed
fn on_activated(model: &mut AppModel, id: &PanelId) -> Option<Cmd> {
    if model.panels.activate(id, model.viewport) {
        debug!(panel = %id, "panel activated");
        Some(Cmd::Redraw)
    } else {
        None
    }
}

/// Start dragging `id` if nothing vetoes it
fn begin_drag(
    model: &mut AppModel,
    id: &PanelId,
    pointer: Point,
    target: &[Element],
) -> Option<Cmd> {
    if model.panel_drag.is_some() {
        debug!(panel = %id, "pointer-down ignored: a panel drag is already active");
        return None;
    }
    if is_interactive(target, &model.config.interactive_selectors) {
        debug!(panel = %id, "pointer-down on interactive element, not dragging");
        return None;
    }

    let viewport = model.viewport;
    let front = model.panels.front_z_index(id, model.config.front_z_index);
    let Some(panel) = model.panels.get_mut(id) else {
        debug!(panel = %id, "pointer-down ignored: unknown panel");
        return None;
    };
    if !panel.handle_attached {
        debug!(panel = %id, "pointer-down ignored: no drag handle");
        return None;
    }

    let top_left = panel.position.resolve(panel.size, viewport);
    let original_position = panel.position;
    let original_z_index = panel.z_index;
    panel.z_index = front;
    panel.dragging = true;

    let capture = model.ui.surface.acquire(CaptureOwner::PanelDrag, true);
    model.panel_drag = Some(DragSession::new(
        id.clone(),
        pointer,
        top_left,
        original_position,
        original_z_index,
        capture,
    ));
    debug!(panel = %id, z_index = front, "panel drag started");
    Some(Cmd::Redraw)
}

fn on_pointer_move(model: &mut AppModel, pointer: Point) -> Option<Cmd> {
    let session = model.panel_drag.as_ref()?;
    let candidate = session.candidate(pointer);
    let target = session.target.clone();

    let viewport = model.viewport;
    let min_visible = model.config.min_visible;
    match model.panels.get_mut(&target) {
        Some(panel) => {
            let clamped = clamp_to_viewport(candidate, panel.size, viewport, min_visible);
            panel.position = PanelPosition::At(clamped);
        }
        None => {
            // The panel vanished without a Remove message
            finish_drag(model, DragEnd::TargetRemoved);
        }
    }
    Some(Cmd::Redraw)
}

/// Single teardown path for a panel drag
fn finish_drag(model: &mut AppModel, reason: DragEnd) {
    let Some(session) = model.panel_drag.take() else {
        return;
    };

    if let Some(panel) = model.panels.get_mut(&session.target) {
        panel.dragging = false;
        // A panel closed mid-drag should not stay artificially on top
        if !panel.active {
            panel.z_index = session.original_z_index;
        }
    }

    debug!(panel = %session.target, ?reason, "panel drag ended");
    model.ui.surface.release(session.into_capture());
}

/// Viewport changed size: end any drag, then pull active panels back on screen
pub(crate) fn on_viewport_resize(model: &mut AppModel, width: f64, height: f64) {
    model.viewport = Size::new(width, height);
    finish_drag(model, DragEnd::ViewportResized);

    let viewport = model.viewport;
    let min_visible = model.config.min_visible;
    for panel in model.panels.iter_mut().filter(|p| p.active) {
        let current = panel.position.resolve(panel.size, viewport);
        let clamped = clamp_to_viewport(current, panel.size, viewport, min_visible);
        panel.position = PanelPosition::At(clamped);
    }
}
