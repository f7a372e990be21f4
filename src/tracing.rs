//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! drag gestures and persistence round-trips.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=drag=debug,message=debug` - scoped filtering
//! - `RUST_LOG=harmoniq_drag::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/harmoniq/logs/harmoniq-drag.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var and writes to stderr so
/// snapshots printed on stdout stay machine readable.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "harmoniq-drag.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of gesture state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct DragSnapshot {
    pub panel_drag: Option<String>,
    pub reorder: Option<String>,
    pub listeners: usize,
    pub selection_suppressed: bool,
    pub in_flight: usize,
    pub panels: Vec<PanelInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelInfo {
    pub id: String,
    pub active: bool,
    pub z_index: i32,
}

impl DragSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            panel_drag: model.panel_drag.as_ref().map(|s| s.target.to_string()),
            reorder: model.reorder.as_ref().map(|s| s.item.to_string()),
            listeners: model.ui.surface.listeners().len(),
            selection_suppressed: model.ui.surface.text_selection_suppressed(),
            in_flight: model.sequencer.in_flight(),
            panels: model
                .panels
                .iter()
                .map(|p| PanelInfo {
                    id: p.id.to_string(),
                    active: p.active,
                    z_index: p.z_index,
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    ///
    /// Panel positions are left out; they change on every pointer move.
    pub fn diff(&self, other: &DragSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.panel_drag != other.panel_drag {
            changes.push(format!(
                "panel drag: {} → {}",
                self.panel_drag.as_deref().unwrap_or("-"),
                other.panel_drag.as_deref().unwrap_or("-")
            ));
        }
        if self.reorder != other.reorder {
            changes.push(format!(
                "reorder: {} → {}",
                self.reorder.as_deref().unwrap_or("-"),
                other.reorder.as_deref().unwrap_or("-")
            ));
        }
        if self.listeners != other.listeners {
            changes.push(format!("listeners: {} → {}", self.listeners, other.listeners));
        }
        if self.selection_suppressed != other.selection_suppressed {
            let status = if other.selection_suppressed {
                "suppressed"
            } else {
                "restored"
            };
            changes.push(format!("text selection {}", status));
        }
        if self.in_flight != other.in_flight {
            changes.push(format!("in flight: {} → {}", self.in_flight, other.in_flight));
        }

        for after in &other.panels {
            match self.panels.iter().find(|p| p.id == after.id) {
                Some(before) => {
                    if before.active != after.active {
                        let status = if after.active { "shown" } else { "hidden" };
                        changes.push(format!("{}: {}", after.id, status));
                    }
                    if before.z_index != after.z_index {
                        changes.push(format!(
                            "{}: z {} → {}",
                            after.id, before.z_index, after.z_index
                        ));
                    }
                }
                None => changes.push(format!("{}: registered", after.id)),
            }
        }
        for before in &self.panels {
            if !other.panels.iter().any(|p| p.id == before.id) {
                changes.push(format!("{}: removed", before.id));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
