//! Notification sinks
//!
//! The update loop keeps its own queue of visible notifications; a
//! `Notifier` is the external toast surface each one is forwarded to.

use std::sync::{Arc, Mutex};

use crate::model::NotificationKind;

/// Displays a transient message to the user
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Error => tracing::error!(target: "notify", "{}", message),
            NotificationKind::Warning => tracing::warn!(target: "notify", "{}", message),
            NotificationKind::Info | NotificationKind::Success => {
                tracing::info!(target: "notify", kind = kind.as_str(), "{}", message)
            }
        }
    }
}

/// Keeps every notification it receives; clones share the same log
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<(String, NotificationKind)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<(String, NotificationKind)> {
        match self.received.lock() {
            Ok(received) => received.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        let mut received = match self.received.lock() {
            Ok(received) => received,
            Err(poisoned) => poisoned.into_inner(),
        };
        received.push((message.to_string(), kind));
    }
}
