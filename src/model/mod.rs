//! Application model - the complete state of the drag subsystem
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod snapshot;
pub mod ui;

pub use snapshot::{NotificationView, PanelView, Snapshot};
pub use ui::{
    CaptureOwner, CaptureToken, Listener, Notification, NotificationKind, SurfaceCapture,
    UiState,
};

use crate::config::DragConfig;
use crate::geometry::Size;
use crate::panel::{DragSession, Panel, PanelStack};
use crate::reorder::{Board, Container, ReorderSession, Sequencer};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Viewport dimensions in pixels
    pub viewport: Size,
    /// Loaded configuration
    pub config: DragConfig,
    /// Floating panels and their stacking order
    pub panels: PanelStack,
    /// Sortable containers (playlists, playlist grid)
    pub board: Board,
    /// Notifications and surface capture
    pub ui: UiState,
    /// In-progress panel drag (at most one)
    pub panel_drag: Option<DragSession>,
    /// In-progress item drag (at most one)
    pub reorder: Option<ReorderSession>,
    /// Issued-but-unanswered persistence requests
    pub sequencer: Sequencer,
}

impl AppModel {
    /// Create an empty model for a viewport of the given size
    pub fn new(width: f64, height: f64, config: DragConfig) -> Self {
        Self {
            viewport: Size::new(width, height),
            config,
            panels: PanelStack::new(),
            board: Board::new(),
            ui: UiState::new(),
            panel_drag: None,
            reorder: None,
            sequencer: Sequencer::new(),
        }
    }

    /// Register a panel directly (no handle attached yet)
    pub fn with_panel(mut self, id: &str, size: Size) -> Self {
        let z_index = self.config.default_z_index;
        self.panels.register(Panel::new(id, size, z_index));
        self
    }

    /// Add a sortable container
    pub fn with_container(mut self, container: Container) -> Self {
        self.board.insert(container);
        self
    }

    pub fn is_panel_dragging(&self) -> bool {
        self.panel_drag.is_some()
    }

    pub fn is_reordering(&self) -> bool {
        self.reorder.is_some()
    }

    /// Serializable view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
