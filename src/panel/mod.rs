//! Panel system - floating, draggable modal windows
//!
//! Panels are desktop-style windows the user can drag around the canvas.
//!
//! ## Architecture
//!
//! - `Panel`: id, size, position (`Unset` or explicit), z-index, active flag
//! - `PanelStack`: registry plus z-order arbitration and hit-testing
//! - `DragSession`: transient state for the single in-progress drag
//!
//! ## Integration
//!
//! State changes flow through `Msg::Panel` into `update/panel.rs`, which owns
//! the drag state machine and viewport clamping.

mod drag;
#[allow(clippy::module_inception)]
mod panel;
mod stack;

pub use drag::{DragEnd, DragSession};
pub use panel::{Panel, PanelId, PanelPosition};
pub use stack::PanelStack;
