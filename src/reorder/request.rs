//! Persistence requests issued when a reorder gesture completes

use serde::Serialize;

use super::board::{ContainerId, ItemId};

/// What the persistence layer is asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderKind {
    /// Set the item's order index within its current container
    SetOrder,
    /// Move the item into another container at the given index
    Move,
}

/// One persistence call, produced by a drop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorderRequest {
    /// Monotonic sequence number, newer drags get larger tickets
    pub ticket: u64,
    pub item_id: ItemId,
    pub container_id: ContainerId,
    /// 1-based target position
    pub position: usize,
    pub kind: ReorderKind,
}

/// Errors reported by the persistence collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// The request never reached the server
    Network(String),
    /// The server answered with a non-success response
    Rejected(String),
    /// The item or container does not exist on the server
    NotFound(String),
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {}", msg),
            Self::Rejected(msg) => write!(f, "request rejected: {}", msg),
            Self::NotFound(what) => write!(f, "not found: {}", what),
        }
    }
}

impl std::error::Error for PersistError {}

/// The collaborator that stores a new container/order for an item
///
/// Implementations are called off the UI loop; the outcome comes back as a
/// `ReorderMsg::PersistCompleted` message.
pub trait Persistence: Send + Sync + 'static {
    fn persist_reorder(&self, request: &ReorderRequest) -> Result<(), PersistError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PersistError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = PersistError::Rejected("position out of range".into());
        assert_eq!(err.to_string(), "request rejected: position out of range");

        let err = PersistError::NotFound("track 42".into());
        assert_eq!(err.to_string(), "not found: track 42");
    }
}
