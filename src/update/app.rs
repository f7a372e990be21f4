//! App message handlers (window events)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

use super::panel::on_viewport_resize;

/// Handle app messages (window events)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            on_viewport_resize(model, width, height);
            Some(Cmd::Redraw)
        }
    }
}
