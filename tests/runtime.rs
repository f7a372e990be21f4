//! Runtime tests
//!
//! Drive the update loop through `App`, with persistence running on
//! background threads against the in-memory store.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{order, rollback_model, test_model};

use harmoniq_drag::messages::{Msg, ReorderMsg};
use harmoniq_drag::model::{AppModel, NotificationKind};
use harmoniq_drag::runtime::{App, RecordingNotifier};
use harmoniq_drag::store::MemoryStore;

const TIMEOUT: Duration = Duration::from_secs(5);

fn app(model: AppModel) -> (App<MemoryStore>, RecordingNotifier) {
    let store = Arc::new(MemoryStore::from_board(&model.board));
    let notifier = RecordingNotifier::new();
    let app = App::new(model, store, Box::new(notifier.clone()));
    (app, notifier)
}

fn drag(app: &mut App<MemoryStore>, item: &str, from: &str, index: usize, to: &str, to_index: usize) {
    app.dispatch(Msg::Reorder(ReorderMsg::BeginDrag {
        item: item.into(),
        container: from.into(),
        index,
        target: common::row(),
    }));
    app.dispatch(Msg::Reorder(ReorderMsg::Drop {
        container: to.into(),
        index: to_index,
    }));
}

fn stored(app: &App<MemoryStore>, container: &str) -> Vec<String> {
    app.persistence()
        .order_of(&container.into())
        .unwrap()
        .into_iter()
        .map(|id| id.0)
        .collect()
}

#[test]
fn test_drop_persists_in_background() {
    let (mut app, notifier) = app(test_model());

    drag(&mut app, "c", "summer", 2, "summer", 0);
    assert_eq!(app.in_flight(), 1);
    assert!(app.wait_idle(TIMEOUT));

    assert_eq!(app.in_flight(), 0);
    assert_eq!(app.model().sequencer.in_flight(), 0);
    assert_eq!(stored(&app, "summer"), vec!["c", "a", "b"]);
    assert_eq!(order(app.model(), "summer"), vec!["c", "a", "b"]);
    assert_eq!(
        notifier.received(),
        vec![("Order saved".to_string(), NotificationKind::Success)]
    );
}

#[test]
fn test_move_is_mirrored_by_the_store() {
    let (mut app, notifier) = app(test_model());

    drag(&mut app, "x", "work", 0, "gym", 1);
    assert!(app.wait_idle(TIMEOUT));

    assert_eq!(stored(&app, "work"), vec!["y"]);
    assert_eq!(stored(&app, "gym"), vec!["z", "x"]);
    assert_eq!(
        notifier.received(),
        vec![(
            "Track moved successfully".to_string(),
            NotificationKind::Success
        )]
    );
}

#[test]
fn test_failing_store_reports_error() {
    let (mut app, notifier) = app(test_model());
    app.persistence().set_failing(true);

    drag(&mut app, "c", "summer", 2, "summer", 0);
    assert!(app.wait_idle(TIMEOUT));

    assert_eq!(stored(&app, "summer"), vec!["a", "b", "c"]);
    assert_eq!(order(app.model(), "summer"), vec!["c", "a", "b"]);
    assert_eq!(
        notifier.received(),
        vec![("Error saving order".to_string(), NotificationKind::Error)]
    );
}

#[test]
fn test_failing_store_with_rollback_resyncs_model() {
    let (mut app, _notifier) = app(rollback_model());
    app.persistence().set_failing(true);

    drag(&mut app, "x", "work", 0, "gym", 0);
    assert!(app.wait_idle(TIMEOUT));

    assert_eq!(order(app.model(), "work"), stored(&app, "work"));
    assert_eq!(order(app.model(), "gym"), stored(&app, "gym"));
}

#[test]
fn test_rejected_drop_never_reaches_the_store() {
    let (mut app, notifier) = app(test_model());

    drag(&mut app, "x", "work", 0, "playlists", 0);

    assert_eq!(app.in_flight(), 0);
    assert!(app.wait_idle(TIMEOUT));
    assert_eq!(
        notifier.received(),
        vec![(
            "Cannot move item there".to_string(),
            NotificationKind::Warning
        )]
    );
}

#[test]
fn test_several_drops_all_settle() {
    let (mut app, notifier) = app(test_model());

    drag(&mut app, "c", "summer", 2, "summer", 0);
    drag(&mut app, "x", "work", 0, "gym", 1);
    drag(&mut app, "gym", "playlists", 2, "playlists", 0);
    assert!(app.wait_idle(TIMEOUT));

    assert_eq!(notifier.received().len(), 3);
    assert_eq!(stored(&app, "playlists"), vec!["gym", "summer", "work"]);
    assert_eq!(app.pump(), 0);
}
