//! Ticket bookkeeping for in-flight persistence requests
//!
//! Requests are never cancelled or serialized; instead each carries a
//! monotonic ticket and the sequencer remembers the newest ticket issued for
//! every container. A completion whose ticket is no longer the newest for all
//! of its containers is stale: its state has been superseded by a later drag.

use std::collections::HashMap;

use super::board::{ContainerId, ContainerSnapshot, ItemId};
use super::request::{ReorderKind, ReorderRequest};

/// A request that has been issued but not yet completed
#[derive(Debug, Clone)]
pub struct PendingReorder {
    pub ticket: u64,
    pub item: ItemId,
    pub kind: ReorderKind,
    /// Pre-drag state of every container the gesture touched
    pub snapshots: Vec<ContainerSnapshot>,
}

impl PendingReorder {
    pub fn containers(&self) -> impl Iterator<Item = &ContainerId> {
        self.snapshots.iter().map(|s| &s.container_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    next_ticket: u64,
    latest: HashMap<ContainerId, u64>,
    pending: HashMap<u64, PendingReorder>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new request and build it
    pub fn issue(
        &mut self,
        item: ItemId,
        container_id: ContainerId,
        position: usize,
        kind: ReorderKind,
        snapshots: Vec<ContainerSnapshot>,
    ) -> ReorderRequest {
        self.next_ticket += 1;
        let ticket = self.next_ticket;

        let pending = PendingReorder {
            ticket,
            item: item.clone(),
            kind,
            snapshots,
        };
        for container in pending.containers() {
            self.latest.insert(container.clone(), ticket);
        }
        self.pending.insert(ticket, pending);

        ReorderRequest {
            ticket,
            item_id: item,
            container_id,
            position,
            kind,
        }
    }

    /// Remove and return a pending request
    pub fn complete(&mut self, ticket: u64) -> Option<PendingReorder> {
        self.pending.remove(&ticket)
    }

    /// Whether no newer request has touched any of this request's containers
    pub fn is_latest(&self, pending: &PendingReorder) -> bool {
        pending
            .containers()
            .all(|c| self.latest.get(c) == Some(&pending.ticket))
    }

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, ticket: u64) -> bool {
        self.pending.contains_key(&ticket)
    }
}
