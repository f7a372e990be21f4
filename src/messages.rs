//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::geometry::{Point, Size};
use crate::guard::TargetPath;
use crate::panel::PanelId;
use crate::reorder::{ContainerId, ItemId, PersistError};

/// Floating panel messages (lifecycle, pointer events)
#[derive(Debug, Clone)]
pub enum PanelMsg {
    // === Lifecycle ===
    /// A panel entered the visual tree; registers it and attaches its handle
    Register { id: PanelId, size: Size },
    /// Attach the drag handle to an already registered panel (idempotent)
    AttachHandle(PanelId),
    /// The owning UI layer made a panel active
    Activated(PanelId),
    /// Dock icon click: show the panel, or hide it if already showing
    Open(PanelId),
    /// Hide a panel
    Close(PanelId),
    /// Hide the active panel on top (Escape, overlay click)
    CloseTopmost,
    /// Pointer-down on a panel body: bring it to the front
    Focus(PanelId),
    /// The panel left the visual tree
    Remove(PanelId),

    // === Pointer ===
    /// Pointer-down on a panel's header region
    PointerDown {
        panel: PanelId,
        pointer: Point,
        target: TargetPath,
    },
    /// Surface-wide pointer move
    PointerMove(Point),
    /// Surface-wide pointer release
    PointerUp(Point),
    /// The surface lost pointer capture mid-gesture
    PointerCaptureLost,
}

/// Sortable list messages (item drag, persistence outcome)
#[derive(Debug, Clone)]
pub enum ReorderMsg {
    /// Pick up the item at `index` of `container`
    BeginDrag {
        item: ItemId,
        container: ContainerId,
        index: usize,
        target: TargetPath,
    },
    /// Pointer over an insertion point (live preview)
    Hover { container: ContainerId, index: usize },
    /// Release over an insertion point
    Drop { container: ContainerId, index: usize },
    /// Gesture aborted (lost capture); restores the pre-drag order
    Cancel,
    /// The persistence collaborator answered
    PersistCompleted {
        ticket: u64,
        result: Result<(), PersistError>,
    },
}

/// UI housekeeping
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Periodic tick: expire notifications
    Tick,
    /// Dismiss every visible notification
    DismissNotifications,
}

/// Application-level messages
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Viewport resized (width, height)
    Resize(f64, f64),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Panel(PanelMsg),
    Reorder(ReorderMsg),
    Ui(UiMsg),
    App(AppMsg),
}
