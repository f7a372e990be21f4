//! Harmoniq drag subsystem - Elm-style drag engine
//!
//! This crate provides the state and update logic behind Harmoniq's
//! floating panels (drag with viewport clamping and z-ordering) and its
//! sortable playlists (drag-to-reorder with server persistence).

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod geometry;
pub mod guard;
pub mod messages;
pub mod model;
pub mod panel;
pub mod reorder;
pub mod runtime;
pub mod script;
pub mod store;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DragConfig;
pub use messages::Msg;
pub use model::AppModel;
