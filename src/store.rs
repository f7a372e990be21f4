//! In-memory persistence backend
//!
//! Mirrors the playlist server: a move closes the gap in the source
//! container, opens one at the target position in the destination and
//! places the item there.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::reorder::{
    Board, ContainerId, ItemId, PersistError, Persistence, ReorderKind, ReorderRequest,
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    orders: Mutex<HashMap<ContainerId, Vec<ItemId>>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with the board's current orders
    pub fn from_board(board: &Board) -> Self {
        let orders = board
            .containers()
            .iter()
            .map(|c| (c.id.clone(), c.item_ids()))
            .collect();
        Self {
            orders: Mutex::new(orders),
            failing: AtomicBool::new(false),
        }
    }

    /// Make every following call fail with a network error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Stored order of a container
    pub fn order_of(&self, container: &ContainerId) -> Option<Vec<ItemId>> {
        self.lock().get(container).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ContainerId, Vec<ItemId>>> {
        match self.orders.lock() {
            Ok(orders) => orders,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Persistence for MemoryStore {
    fn persist_reorder(&self, request: &ReorderRequest) -> Result<(), PersistError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PersistError::Network("connection refused".into()));
        }

        let mut orders = self.lock();
        if !orders.contains_key(&request.container_id) {
            return Err(PersistError::NotFound(format!(
                "container {}",
                request.container_id
            )));
        }
        let Some((source, old_index)) = orders.iter().find_map(|(id, items)| {
            items
                .iter()
                .position(|i| i == &request.item_id)
                .map(|index| (id.clone(), index))
        }) else {
            return Err(PersistError::NotFound(format!("item {}", request.item_id)));
        };

        if request.kind == ReorderKind::SetOrder && source != request.container_id {
            return Err(PersistError::Rejected(format!(
                "item {} is not in container {}",
                request.item_id, request.container_id
            )));
        }

        let dest_len = orders.get(&request.container_id).map_or(0, Vec::len);
        let max_position = if source == request.container_id {
            dest_len
        } else {
            dest_len + 1
        };
        if request.position == 0 || request.position > max_position {
            return Err(PersistError::Rejected(format!(
                "position {} out of range 1..={}",
                request.position, max_position
            )));
        }

        if let Some(items) = orders.get_mut(&source) {
            items.remove(old_index);
        }
        if let Some(items) = orders.get_mut(&request.container_id) {
            items.insert(request.position - 1, request.item_id.clone());
        }
        Ok(())
    }
}
