//! Containers (playlists) and the items (tracks) ordered inside them

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of an orderable item (a track, or a playlist in the overview grid)
    ItemId
);
string_id!(
    /// Identifier of an ordered container (a playlist, or the playlist grid)
    ContainerId
);

/// An orderable entity and its place in its container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub container_id: ContainerId,
    /// 1-based position within the container
    pub order_index: usize,
}

/// An ordered sequence of items
#[derive(Debug, Clone, Serialize)]
pub struct Container {
    pub id: ContainerId,
    pub name: String,
    /// Containers sharing a move group accept each other's items
    pub move_group: Option<String>,
    pub items: Vec<Item>,
}

impl Container {
    pub fn new(id: impl Into<ContainerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            move_group: None,
            items: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.move_group = Some(group.into());
        self
    }

    pub fn with_items<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemId>,
    {
        let container_id = self.id.clone();
        self.items = ids
            .into_iter()
            .map(|id| Item {
                id: id.into(),
                container_id: container_id.clone(),
                order_index: 0,
            })
            .collect();
        self.reindex();
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position_of(&self, item: &ItemId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == item)
    }

    pub fn item_ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|i| i.id.clone()).collect()
    }

    /// Rewrite `order_index`/`container_id` from vector order
    pub fn reindex(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.order_index = index + 1;
            item.container_id = self.id.clone();
        }
    }

    /// `order_index` runs 1..=N in vector order and every item points back here
    pub fn is_contiguous(&self) -> bool {
        self.items
            .iter()
            .enumerate()
            .all(|(i, item)| item.order_index == i + 1 && item.container_id == self.id)
    }
}

/// Pre-drag order of one container, used to cancel or roll back a gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSnapshot {
    pub container_id: ContainerId,
    pub items: Vec<ItemId>,
}

/// Every sortable container on screen
#[derive(Debug, Clone, Default)]
pub struct Board {
    containers: Vec<Container>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container, replacing any existing one with the same id
    pub fn insert(&mut self, mut container: Container) {
        container.reindex();
        match self.containers.iter_mut().find(|c| c.id == container.id) {
            Some(existing) => *existing = container,
            None => self.containers.push(container),
        }
    }

    pub fn container(&self, id: &ContainerId) -> Option<&Container> {
        self.containers.iter().find(|c| &c.id == id)
    }

    fn container_mut(&mut self, id: &ContainerId) -> Option<&mut Container> {
        self.containers.iter_mut().find(|c| &c.id == id)
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Item ids of a container, in order
    pub fn order(&self, id: &ContainerId) -> Option<Vec<ItemId>> {
        self.container(id).map(Container::item_ids)
    }

    /// Locate an item: (container, 0-based index)
    pub fn find_item(&self, item: &ItemId) -> Option<(ContainerId, usize)> {
        self.containers
            .iter()
            .find_map(|c| c.position_of(item).map(|index| (c.id.clone(), index)))
    }

    /// Whether an item may travel from `from` to `to`
    pub fn can_transfer(&self, from: &ContainerId, to: &ContainerId) -> bool {
        if from == to {
            return self.container(from).is_some();
        }
        match (self.container(from), self.container(to)) {
            (Some(a), Some(b)) => a.move_group.is_some() && a.move_group == b.move_group,
            _ => false,
        }
    }

    /// Move `item` from `from` into `to` at `index` (clamped to the end).
    ///
    /// Both containers are re-indexed. Returns the index the item landed at,
    /// or `None` if the item is not in `from` or `to` does not exist.
    pub fn move_item(
        &mut self,
        item: &ItemId,
        from: &ContainerId,
        to: &ContainerId,
        index: usize,
    ) -> Option<usize> {
        self.container(to)?;
        let source = self.container_mut(from)?;
        let position = source.position_of(item)?;
        let moved = source.items.remove(position);
        source.reindex();

        let dest = self.container_mut(to)?;
        let index = index.min(dest.items.len());
        dest.items.insert(index, moved);
        dest.reindex();
        Some(index)
    }

    pub fn snapshot(&self, id: &ContainerId) -> Option<ContainerSnapshot> {
        self.container(id).map(|c| ContainerSnapshot {
            container_id: c.id.clone(),
            items: c.item_ids(),
        })
    }

    /// Put every snapshotted container back the way it was.
    ///
    /// All containers an item travelled through must be restored together.
    pub fn restore(&mut self, snapshots: &[ContainerSnapshot]) {
        for snapshot in snapshots {
            if let Some(container) = self.container_mut(&snapshot.container_id) {
                container.items = snapshot
                    .items
                    .iter()
                    .map(|id| Item {
                        id: id.clone(),
                        container_id: snapshot.container_id.clone(),
                        order_index: 0,
                    })
                    .collect();
                container.reindex();
            }
        }
    }

    /// Check that every container's order is contiguous
    pub fn check_invariants(&self) -> Result<(), String> {
        match self.containers.iter().find(|c| !c.is_contiguous()) {
            Some(c) => Err(format!(
                "container {} has non-contiguous order: {:?}",
                c.id,
                c.items.iter().map(|i| i.order_index).collect::<Vec<_>>()
            )),
            None => Ok(()),
        }
    }
}
