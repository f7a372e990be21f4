//! Session script tests
//!
//! Load scripts from disk and replay them through the runtime.

use std::io::Write;
use std::sync::Arc;

use harmoniq_drag::config::DragConfig;
use harmoniq_drag::geometry::Point;
use harmoniq_drag::model::NotificationKind;
use harmoniq_drag::runtime::{App, RecordingNotifier};
use harmoniq_drag::script::{Script, Step};
use harmoniq_drag::store::MemoryStore;

const SESSION: &str = r#"
viewport: { width: 1200, height: 800 }
panels:
  - { id: player, width: 400, height: 300 }
  - { id: settings, width: 500, height: 400 }
containers:
  - { id: summer, name: Summer, group: tracks, items: [a, b, c] }
  - { id: gym, name: Gym, group: tracks, items: [z] }
steps:
  - open: player
  - pointer_down: { panel: player, x: 700, y: 500 }
  - pointer_move: { x: -500, y: -500 }
  - pointer_up: { x: -500, y: -500 }
  - open: settings
  - click: { x: 1190, y: 790 }
  - pick: { item: c, container: summer, index: 2 }
  - hover: { container: summer, index: 0 }
  - drop: { container: summer, index: 0 }
  - settle
  - fail_persist: true
  - pick: { item: a, container: summer, index: 1 }
  - drop: { container: gym, index: 1 }
  - settle
"#;

fn write_script(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn replay(script: &Script, config: DragConfig) -> (App<MemoryStore>, RecordingNotifier) {
    let model = script.build_model(config);
    let store = Arc::new(MemoryStore::from_board(&model.board));
    let notifier = RecordingNotifier::new();
    let mut app = App::new(model, store, Box::new(notifier.clone()));
    script.replay(&mut app).unwrap();
    (app, notifier)
}

fn ids(order: Option<Vec<harmoniq_drag::reorder::ItemId>>) -> Vec<String> {
    order.unwrap().into_iter().map(|id| id.0).collect()
}

#[test]
fn test_replay_yaml_session() {
    let file = write_script(SESSION, ".yaml");
    let script = Script::load(file.path()).unwrap();

    let (app, notifier) = replay(&script, DragConfig::default());
    let model = app.model();

    // Clamped drag, then the overlay click closed the settings panel
    let player = model.panels.get(&"player".into()).unwrap();
    assert_eq!(player.position.point(), Some(Point::new(-350.0, -250.0)));
    assert!(player.active);
    assert!(!model.panels.get(&"settings".into()).unwrap().active);

    // First drop persisted, second failed and kept its optimistic order
    assert_eq!(ids(model.board.order(&"summer".into())), vec!["c", "b"]);
    assert_eq!(ids(model.board.order(&"gym".into())), vec!["z", "a"]);
    let store = app.persistence();
    assert_eq!(ids(store.order_of(&"summer".into())), vec!["c", "a", "b"]);
    assert_eq!(ids(store.order_of(&"gym".into())), vec!["z"]);

    assert_eq!(
        notifier.received(),
        vec![
            ("Order saved".to_string(), NotificationKind::Success),
            ("Error moving track".to_string(), NotificationKind::Error),
        ]
    );
    assert!(model.ui.surface.is_idle());
}

#[test]
fn test_replay_with_rollback_matches_store() {
    let script = Script::from_yaml(SESSION).unwrap();
    let config = DragConfig {
        rollback_on_failure: true,
        ..DragConfig::default()
    };

    let (app, _) = replay(&script, config);

    let model = app.model();
    let store = app.persistence();
    for container in ["summer", "gym"] {
        assert_eq!(
            model.board.order(&container.into()),
            store.order_of(&container.into())
        );
    }
}

#[test]
fn test_load_json_script() {
    let file = write_script(
        r#"{
            "containers": [{ "id": "playlists", "items": ["summer", "gym"] }],
            "steps": [
                { "pick": { "item": "gym", "container": "playlists", "index": 1 } },
                { "drop": { "container": "playlists", "index": 0 } },
                "settle"
            ]
        }"#,
        ".json",
    );
    let script = Script::load(file.path()).unwrap();
    assert!(matches!(script.steps[2], Step::Settle));

    let (app, notifier) = replay(&script, DragConfig::default());

    assert_eq!(
        ids(app.model().board.order(&"playlists".into())),
        vec!["gym", "summer"]
    );
    assert_eq!(notifier.received().len(), 1);
}

#[test]
fn test_load_reports_parse_errors() {
    let file = write_script("steps: [ { warp: 9 } ]", ".yaml");
    let err = Script::load(file.path()).unwrap_err();
    assert!(err.contains("Failed to parse script"), "{}", err);

    let missing = std::path::Path::new("/nonexistent/session.yaml");
    assert!(Script::load(missing).unwrap_err().contains("Failed to read"));
}

#[test]
fn test_snapshot_serializes() {
    let script = Script::from_yaml(SESSION).unwrap();
    let (app, _) = replay(&script, DragConfig::default());

    let snapshot = app.model().snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["overlay_visible"], true);
    assert_eq!(json["panel_drag_active"], false);
    assert_eq!(json["pending_requests"], 0);
    assert_eq!(json["panels"][0]["id"], "player");
    let yaml = serde_yaml::to_string(&snapshot).unwrap();
    assert!(yaml.contains("containers:"));
}
