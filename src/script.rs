//! Session scripts replayed by the `harmoniq-drag` binary
//!
//! A script describes a viewport, the panels and containers on it, and a
//! list of input steps:
//!
//! ```yaml
//! viewport: { width: 1280, height: 720 }
//! panels:
//!   - { id: player, width: 300, height: 200 }
//! containers:
//!   - { id: summer, name: Summer, group: tracks, items: [a, b, c] }
//! steps:
//!   - open: player
//!   - pointer_down: { panel: player, x: 500, y: 270 }
//!   - pointer_move: { x: 10, y: 10 }
//!   - pointer_up: { x: 10, y: 10 }
//!   - pick: { item: c, container: summer, index: 2 }
//!   - drop: { container: summer, index: 0 }
//!   - settle
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DragConfig;
use crate::geometry::{Point, Size};
use crate::guard::{Element, TargetPath};
use crate::messages::{AppMsg, Msg, PanelMsg, ReorderMsg, UiMsg};
use crate::model::AppModel;
use crate::panel::PanelId;
use crate::reorder::{Container, ContainerId, ItemId};
use crate::runtime::App;
use crate::store::MemoryStore;

/// How long a `settle` step waits for outstanding persistence calls
const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    #[serde(default = "default_viewport")]
    pub viewport: Size,
    #[serde(default)]
    pub panels: Vec<PanelSpec>,
    #[serde(default)]
    pub containers: Vec<ContainerSpec>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

fn default_viewport() -> Size {
    Size::new(1280.0, 720.0)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSpec {
    pub id: PanelId,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub id: ContainerId,
    #[serde(default)]
    pub name: String,
    /// Containers sharing a group accept each other's items
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemId>,
}

/// One input event (or runtime instruction) in a script
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Dock icon click (toggles)
    Open(PanelId),
    Close(PanelId),
    /// Escape key
    CloseTopmost,
    Focus(PanelId),
    Remove(PanelId),
    /// Click on the surface: focuses the panel under the pointer, or
    /// closes the topmost panel when the overlay was hit
    Click { x: f64, y: f64 },
    PointerDown {
        panel: PanelId,
        x: f64,
        y: f64,
        /// Pressed element and its ancestors; defaults to the panel header
        #[serde(default)]
        target: Option<TargetPath>,
    },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    CaptureLost,
    Resize { width: f64, height: f64 },
    /// Pick up an item
    Pick {
        item: ItemId,
        container: ContainerId,
        index: usize,
        #[serde(default)]
        target: Option<TargetPath>,
    },
    Hover { container: ContainerId, index: usize },
    Drop { container: ContainerId, index: usize },
    CancelDrag,
    Tick,
    DismissNotifications,
    /// Switch the store's failure simulation on or off
    FailPersist(bool),
    /// Wait for every outstanding persistence call to report back
    Settle,
}

impl Script {
    /// Load a script; `.json` files are parsed as JSON, anything else as YAML
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script at {}: {}", path.display(), e))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(&content)
                .map_err(|e| format!("Failed to parse script at {}: {}", path.display(), e))
        } else {
            Self::from_yaml(&content)
                .map_err(|e| format!("Failed to parse script at {}: {}", path.display(), e))
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Build the initial model: panels are registered (handles attached) but
    /// not shown, containers are inserted in script order
    pub fn build_model(&self, config: DragConfig) -> AppModel {
        let mut model = AppModel::new(self.viewport.width, self.viewport.height, config);
        for spec in &self.panels {
            model = model.with_panel(spec.id.as_str(), Size::new(spec.width, spec.height));
            model.panels.attach_handle(&spec.id);
        }
        for spec in &self.containers {
            let mut container = Container::new(spec.id.clone(), spec.name.clone())
                .with_items(spec.items.iter().cloned());
            if let Some(group) = &spec.group {
                container = container.with_group(group.clone());
            }
            model = model.with_container(container);
        }
        model
    }

    /// Run every step against `app`
    pub fn replay(&self, app: &mut App<MemoryStore>) -> Result<(), String> {
        for (n, step) in self.steps.iter().enumerate() {
            debug!(step = n, ?step, "replaying");
            match step {
                Step::FailPersist(failing) => app.persistence().set_failing(*failing),
                Step::Settle => {
                    if !app.wait_idle(SETTLE_TIMEOUT) {
                        return Err(format!(
                            "step {}: persistence did not settle within {:?}",
                            n, SETTLE_TIMEOUT
                        ));
                    }
                }
                step => {
                    if let Some(msg) = step.to_msg(app.model()) {
                        app.dispatch(msg);
                    }
                    app.pump();
                }
            }
        }
        Ok(())
    }
}

impl Step {
    /// The message this step feeds into `update`.
    ///
    /// `None` for runtime instructions, and for clicks that hit nothing.
    pub fn to_msg(&self, model: &AppModel) -> Option<Msg> {
        let msg = match self {
            Step::Open(id) => Msg::Panel(PanelMsg::Open(id.clone())),
            Step::Close(id) => Msg::Panel(PanelMsg::Close(id.clone())),
            Step::CloseTopmost => Msg::Panel(PanelMsg::CloseTopmost),
            Step::Focus(id) => Msg::Panel(PanelMsg::Focus(id.clone())),
            Step::Remove(id) => Msg::Panel(PanelMsg::Remove(id.clone())),
            Step::Click { x, y } => {
                match model.panels.hit_test(Point::new(*x, *y), model.viewport) {
                    Some(panel) => Msg::Panel(PanelMsg::Focus(panel.id.clone())),
                    None if model.panels.overlay_visible() => {
                        Msg::Panel(PanelMsg::CloseTopmost)
                    }
                    None => return None,
                }
            }
            Step::PointerDown {
                panel,
                x,
                y,
                target,
            } => Msg::Panel(PanelMsg::PointerDown {
                panel: panel.clone(),
                pointer: Point::new(*x, *y),
                target: target
                    .clone()
                    .unwrap_or_else(|| vec![Element::panel_header()]),
            }),
            Step::PointerMove { x, y } => Msg::Panel(PanelMsg::PointerMove(Point::new(*x, *y))),
            Step::PointerUp { x, y } => Msg::Panel(PanelMsg::PointerUp(Point::new(*x, *y))),
            Step::CaptureLost => Msg::Panel(PanelMsg::PointerCaptureLost),
            Step::Resize { width, height } => Msg::App(AppMsg::Resize(*width, *height)),
            Step::Pick {
                item,
                container,
                index,
                target,
            } => Msg::Reorder(ReorderMsg::BeginDrag {
                item: item.clone(),
                container: container.clone(),
                index: *index,
                target: target.clone().unwrap_or_else(|| vec![item_row()]),
            }),
            Step::Hover { container, index } => Msg::Reorder(ReorderMsg::Hover {
                container: container.clone(),
                index: *index,
            }),
            Step::Drop { container, index } => Msg::Reorder(ReorderMsg::Drop {
                container: container.clone(),
                index: *index,
            }),
            Step::CancelDrag => Msg::Reorder(ReorderMsg::Cancel),
            Step::Tick => Msg::Ui(UiMsg::Tick),
            Step::DismissNotifications => Msg::Ui(UiMsg::DismissNotifications),
            Step::FailPersist(_) | Step::Settle => return None,
        };
        Some(msg)
    }
}

/// The row element a list item is dragged by
fn item_row() -> Element {
    Element::new("li").with_class("track-item").handle()
}
