//! Reorder update handlers
//!
//! Item drag state machine (`Idle -> Dragging -> Idle`) plus handling of
//! persistence outcomes. Hover events mutate the board as a live preview;
//! the drop issues exactly one persistence request.

use tracing::{debug, info, warn};

use crate::commands::Cmd;
use crate::guard::is_interactive;
use crate::messages::ReorderMsg;
use crate::model::{AppModel, CaptureOwner, NotificationKind};
use crate::reorder::{ContainerId, ItemId, PersistError, ReorderKind, ReorderSession};

/// Update function for reorder messages
pub fn update_reorder(model: &mut AppModel, msg: ReorderMsg) -> Option<Cmd> {
    match msg {
        ReorderMsg::BeginDrag {
            item,
            container,
            index,
            target,
        } => {
            if model.reorder.is_some() {
                debug!(%item, "drag start ignored: a reorder is already active");
                return None;
            }
            if is_interactive(&target, &model.config.interactive_selectors) {
                debug!(%item, "drag start on interactive element, not dragging");
                return None;
            }
            begin_drag(model, item, container, index)
        }

        ReorderMsg::Hover { container, index } => {
            let session = model.reorder.as_ref()?;
            if session.dest_container == container && session.dest_index == index {
                return None;
            }
            preview_move(model, &container, index).then_some(Cmd::Redraw)
        }

        ReorderMsg::Drop { container, index } => drop_item(model, container, index),

        ReorderMsg::Cancel => {
            let session = model.reorder.take()?;
            debug!(item = %session.item, "reorder cancelled");
            let (snapshots, capture) = session.finish();
            model.board.restore(&snapshots);
            model.ui.surface.release(capture);
            Some(Cmd::Redraw)
        }

        ReorderMsg::PersistCompleted { ticket, result } => {
            persist_completed(model, ticket, result)
        }
    }
}

fn begin_drag(
    model: &mut AppModel,
    item: ItemId,
    container: ContainerId,
    index: usize,
) -> Option<Cmd> {
    let at_index = model
        .board
        .container(&container)
        .and_then(|c| c.items.get(index))
        .map(|i| &i.id);
    if at_index != Some(&item) {
        debug!(%item, %container, index, "drag start ignored: item is not at that index");
        return None;
    }

    let capture = model.ui.surface.acquire(CaptureOwner::Reorder, false);
    match ReorderSession::begin(&model.board, item, container, index, capture) {
        Ok(session) => {
            debug!(item = %session.item, container = %session.source_container, index, "reorder started");
            model.reorder = Some(session);
            Some(Cmd::Redraw)
        }
        Err(capture) => {
            model.ui.surface.release(capture);
            None
        }
    }
}

/// Move the dragged item to `container[index]` in memory.
/// Returns false if the container does not accept the item.
fn preview_move(model: &mut AppModel, container: &ContainerId, index: usize) -> bool {
    let Some(session) = model.reorder.as_mut() else {
        return false;
    };
    if !model.board.can_transfer(&session.source_container, container) {
        return false;
    }

    session.touch(&model.board, container);
    let landed = model
        .board
        .move_item(&session.item, &session.dest_container, container, index);
    match landed {
        Some(landed) => {
            session.dest_container = container.clone();
            session.dest_index = landed;
            true
        }
        None => false,
    }
}

/// End the gesture and issue the persistence request
fn drop_item(model: &mut AppModel, container: ContainerId, index: usize) -> Option<Cmd> {
    model.reorder.as_ref()?;

    let accepted = preview_move(model, &container, index);

    let session = model.reorder.take()?;
    let item = session.item.clone();
    let dest = session.dest_container.clone();
    let dest_index = session.dest_index;
    let kind = if session.is_cross_container() {
        ReorderKind::Move
    } else {
        ReorderKind::SetOrder
    };
    let (snapshots, capture) = session.finish();
    model.ui.surface.release(capture);

    if !accepted {
        warn!(%item, %container, "drop rejected: container is not in the item's move group");
        model.board.restore(&snapshots);
        return Some(notify(
            model,
            "Cannot move item there",
            NotificationKind::Warning,
        ));
    }

    let position = dest_index + 1;
    let request = model
        .sequencer
        .issue(item, dest, position, kind, snapshots);
    debug!(
        ticket = request.ticket,
        item = %request.item_id,
        container = %request.container_id,
        position,
        ?kind,
        "reorder dropped, persisting"
    );
    Some(Cmd::batch(vec![Cmd::Redraw, Cmd::PersistReorder(request)]))
}

fn persist_completed(
    model: &mut AppModel,
    ticket: u64,
    result: Result<(), PersistError>,
) -> Option<Cmd> {
    let Some(pending) = model.sequencer.complete(ticket) else {
        warn!(ticket, "completion for unknown reorder ticket");
        return None;
    };
    let is_latest = model.sequencer.is_latest(&pending);

    match result {
        Ok(()) => {
            info!(ticket, item = %pending.item, kind = ?pending.kind, "reorder persisted");
            let message = match pending.kind {
                ReorderKind::Move => "Track moved successfully",
                ReorderKind::SetOrder => "Order saved",
            };
            Some(notify(model, message, NotificationKind::Success))
        }
        Err(e) => {
            warn!(ticket, item = %pending.item, error = %e, "failed to persist reorder");
            if model.config.rollback_on_failure {
                let dragging_over = model.reorder.as_ref().is_some_and(|session| {
                    session
                        .snapshots()
                        .iter()
                        .any(|s| pending.containers().any(|c| c == &s.container_id))
                });
                if !is_latest {
                    debug!(ticket, "stale failure, newer drag supersedes it; not rolling back");
                } else if dragging_over {
                    debug!(ticket, "container is being dragged over; not rolling back");
                } else {
                    model.board.restore(&pending.snapshots);
                    debug!(ticket, "rolled back order after failure");
                }
            }
            let message = match pending.kind {
                ReorderKind::Move => "Error moving track",
                ReorderKind::SetOrder => "Error saving order",
            };
            Some(notify(model, message, NotificationKind::Error))
        }
    }
}

/// Queue a notification locally and forward it to the external sink
fn notify(model: &mut AppModel, message: &str, kind: NotificationKind) -> Cmd {
    let duration = model.config.notification_duration();
    model.ui.notify(message, kind, duration);
    Cmd::batch(vec![
        Cmd::Redraw,
        Cmd::Notify {
            message: message.to_string(),
            kind,
        },
    ])
}
