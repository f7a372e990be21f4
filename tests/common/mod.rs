//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use harmoniq_drag::commands::Cmd;
use harmoniq_drag::config::DragConfig;
use harmoniq_drag::geometry::{Point, Size};
use harmoniq_drag::guard::Element;
use harmoniq_drag::messages::{Msg, PanelMsg, ReorderMsg};
use harmoniq_drag::model::AppModel;
use harmoniq_drag::reorder::{Container, PersistError, ReorderRequest};
use harmoniq_drag::update::update;

pub const VIEWPORT: Size = Size {
    width: 1200.0,
    height: 800.0,
};

/// Model with two registered (hidden) panels and the track/playlist containers
pub fn test_model() -> AppModel {
    test_model_with(DragConfig::default())
}

pub fn test_model_with(config: DragConfig) -> AppModel {
    let mut model = AppModel::new(VIEWPORT.width, VIEWPORT.height, config);
    for (id, size) in [
        ("player", Size::new(400.0, 300.0)),
        ("settings", Size::new(500.0, 400.0)),
    ] {
        update(
            &mut model,
            Msg::Panel(PanelMsg::Register {
                id: id.into(),
                size,
            }),
        );
    }

    model
        .with_container(
            Container::new("summer", "Summer")
                .with_group("tracks")
                .with_items(["a", "b", "c"]),
        )
        .with_container(
            Container::new("work", "Work")
                .with_group("tracks")
                .with_items(["x", "y"]),
        )
        .with_container(
            Container::new("gym", "Gym")
                .with_group("tracks")
                .with_items(["z"]),
        )
        .with_container(Container::new("playlists", "Playlists").with_items([
            "summer", "work", "gym",
        ]))
}

/// Model with rollback of failed reorders switched on
pub fn rollback_model() -> AppModel {
    test_model_with(DragConfig {
        rollback_on_failure: true,
        ..DragConfig::default()
    })
}

// ============================================================================
// Panel helpers
// ============================================================================

pub fn open(model: &mut AppModel, id: &str) -> Option<Cmd> {
    update(model, Msg::Panel(PanelMsg::Open(id.into())))
}

/// Press on the panel's header at `(x, y)`
pub fn press(model: &mut AppModel, id: &str, x: f64, y: f64) -> Option<Cmd> {
    press_on(model, id, x, y, vec![Element::panel_header()])
}

pub fn press_on(
    model: &mut AppModel,
    id: &str,
    x: f64,
    y: f64,
    target: Vec<Element>,
) -> Option<Cmd> {
    update(
        model,
        Msg::Panel(PanelMsg::PointerDown {
            panel: id.into(),
            pointer: Point::new(x, y),
            target,
        }),
    )
}

pub fn move_to(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    update(model, Msg::Panel(PanelMsg::PointerMove(Point::new(x, y))))
}

pub fn release(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    update(model, Msg::Panel(PanelMsg::PointerUp(Point::new(x, y))))
}

pub fn position(model: &AppModel, id: &str) -> Point {
    let panel = model.panels.get(&id.into()).expect("panel registered");
    panel.position.resolve(panel.size, model.viewport)
}

pub fn z_index(model: &AppModel, id: &str) -> i32 {
    model.panels.get(&id.into()).expect("panel registered").z_index
}

// ============================================================================
// Reorder helpers
// ============================================================================

/// A track row, which is its own drag handle
pub fn row() -> Vec<Element> {
    vec![Element::new("li").with_class("track-item").handle()]
}

pub fn pick(model: &mut AppModel, item: &str, container: &str, index: usize) -> Option<Cmd> {
    update(
        model,
        Msg::Reorder(ReorderMsg::BeginDrag {
            item: item.into(),
            container: container.into(),
            index,
            target: row(),
        }),
    )
}

pub fn hover(model: &mut AppModel, container: &str, index: usize) -> Option<Cmd> {
    update(
        model,
        Msg::Reorder(ReorderMsg::Hover {
            container: container.into(),
            index,
        }),
    )
}

pub fn drop_at(model: &mut AppModel, container: &str, index: usize) -> Option<Cmd> {
    update(
        model,
        Msg::Reorder(ReorderMsg::Drop {
            container: container.into(),
            index,
        }),
    )
}

/// Pick `item` and drop it at `container[index]`, returning the single request
pub fn drag_item(
    model: &mut AppModel,
    item: &str,
    from: &str,
    from_index: usize,
    to: &str,
    to_index: usize,
) -> ReorderRequest {
    pick(model, item, from, from_index).expect("drag should start");
    let cmd = drop_at(model, to, to_index).expect("drop should produce a command");
    let requests = cmd.persist_requests();
    assert_eq!(requests.len(), 1, "exactly one persistence request per drop");
    requests[0].clone()
}

pub fn complete(model: &mut AppModel, ticket: u64, result: Result<(), PersistError>) -> Option<Cmd> {
    update(
        model,
        Msg::Reorder(ReorderMsg::PersistCompleted { ticket, result }),
    )
}

pub fn network_error() -> PersistError {
    PersistError::Network("connection reset".into())
}

/// Item ids of a container, in order
pub fn order(model: &AppModel, container: &str) -> Vec<String> {
    model
        .board
        .order(&container.into())
        .expect("container exists")
        .into_iter()
        .map(|id| id.0)
        .collect()
}

/// `order_index` values of a container, in order
pub fn order_indices(model: &AppModel, container: &str) -> Vec<usize> {
    model
        .board
        .container(&container.into())
        .expect("container exists")
        .items
        .iter()
        .map(|i| i.order_index)
        .collect()
}

/// No listeners left behind and text selection restored
pub fn assert_surface_idle(model: &AppModel) {
    assert!(
        model.ui.surface.is_idle(),
        "surface still captured: {:?}",
        model.ui.surface.listeners()
    );
}
