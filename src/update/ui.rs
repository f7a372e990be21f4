//! UI message handlers (notification expiry)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Tick => model.ui.prune_notifications().then_some(Cmd::Redraw),

        UiMsg::DismissNotifications => {
            if model.ui.notifications.is_empty() {
                return None;
            }
            model.ui.notifications.clear();
            Some(Cmd::Redraw)
        }
    }
}
