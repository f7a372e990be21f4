//! Reorder session - one item drag from pick-up to drop

use crate::model::ui::CaptureToken;

use super::board::{Board, ContainerId, ContainerSnapshot, ItemId};

/// In-progress item drag
#[derive(Debug)]
pub struct ReorderSession {
    pub item: ItemId,
    pub source_container: ContainerId,
    pub source_index: usize,
    /// Where the live preview currently shows the item
    pub dest_container: ContainerId,
    pub dest_index: usize,
    /// Pre-drag order of every container this gesture touched
    snapshots: Vec<ContainerSnapshot>,
    capture: CaptureToken,
}

impl ReorderSession {
    /// Start a session, snapshotting the source container.
    /// Hands the token back if the source container is unknown.
    pub fn begin(
        board: &Board,
        item: ItemId,
        source_container: ContainerId,
        source_index: usize,
        capture: CaptureToken,
    ) -> Result<Self, CaptureToken> {
        let Some(snapshot) = board.snapshot(&source_container) else {
            return Err(capture);
        };
        Ok(Self {
            item,
            dest_container: source_container.clone(),
            source_container,
            source_index,
            dest_index: source_index,
            snapshots: vec![snapshot],
            capture,
        })
    }

    /// Snapshot `container` the first time the gesture reaches it
    pub fn touch(&mut self, board: &Board, container: &ContainerId) {
        if self.snapshots.iter().any(|s| &s.container_id == container) {
            return;
        }
        if let Some(snapshot) = board.snapshot(container) {
            self.snapshots.push(snapshot);
        }
    }

    pub fn snapshots(&self) -> &[ContainerSnapshot] {
        &self.snapshots
    }

    pub fn is_cross_container(&self) -> bool {
        self.dest_container != self.source_container
    }

    /// Consume the session, returning its snapshots and capture token
    pub fn finish(self) -> (Vec<ContainerSnapshot>, CaptureToken) {
        (self.snapshots, self.capture)
    }
}
