//! Shared helpers for benchmarks

use harmoniq_drag::config::DragConfig;
use harmoniq_drag::geometry::Size;
use harmoniq_drag::messages::{Msg, PanelMsg};
use harmoniq_drag::model::AppModel;
use harmoniq_drag::reorder::Container;
use harmoniq_drag::update::update;

/// Create an AppModel with one open panel and a playlist of `tracks` items
#[allow(dead_code)]
pub fn make_model(tracks: usize) -> AppModel {
    let mut model = AppModel::new(1920.0, 1080.0, DragConfig::default());
    update(
        &mut model,
        Msg::Panel(PanelMsg::Register {
            id: "player".into(),
            size: Size::new(400.0, 300.0),
        }),
    );
    update(&mut model, Msg::Panel(PanelMsg::Open("player".into())));

    let items: Vec<String> = (0..tracks).map(|i| format!("track-{}", i)).collect();
    model.with_container(
        Container::new("summer", "Summer")
            .with_group("tracks")
            .with_items(items.iter().map(String::as_str)),
    )
}
