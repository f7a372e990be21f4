//! Reorder engine state - drag items within and across ordered containers
//!
//! Tracks are dragged inside a playlist (only their order changes) or into
//! another playlist of the same move group (container and order change).
//! The playlist overview grid is a container too, with no move group.
//!
//! The live preview mutates the `Board` on every hover; a drop issues exactly
//! one persistence request, tracked by the `Sequencer` until it completes.

mod board;
mod request;
mod sequencer;
mod session;

pub use board::{Board, Container, ContainerId, ContainerSnapshot, Item, ItemId};
pub use request::{PersistError, Persistence, ReorderKind, ReorderRequest};
pub use sequencer::{PendingReorder, Sequencer};
pub use session::ReorderSession;
