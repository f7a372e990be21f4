//! Runtime module - drives the update loop outside of any UI toolkit
//!
//! - `app` - message dispatch and background command execution
//! - `notifier` - sinks for user-facing notifications

pub mod app;
pub mod notifier;

pub use app::App;
pub use notifier::{Notifier, RecordingNotifier, TracingNotifier};
