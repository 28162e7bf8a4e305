//! Compact arena storing tree nodes in a single `Vec<T>`.
//!
//! Nodes are addressed by `NodeId` indices instead of pointers, so parent
//! back-references are plain indices and rotations are index rewiring with
//! no allocation. The index never frees individual nodes (there is no
//! delete), so slots are never recycled and every id below `len()` is live
//! until `clear()`.

use std::convert::TryFrom;

pub type NodeId = u32;
pub const NULL_NODE: NodeId = u32::MAX;

/// Statistics for a compact arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompactArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub utilization: f64,
}

/// Append-only arena allocator.
#[derive(Debug, Clone)]
pub struct CompactArena<T> {
    storage: Vec<T>,
}

impl<T> CompactArena<T> {
    /// Create a new empty compact arena
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Create a new compact arena with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
        }
    }

    /// Allocate a new item in the arena and return its ID
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = self.storage.len();
        let id = NodeId::try_from(index)
            .ok()
            .filter(|&id| id != NULL_NODE)
            .expect("Index should fit in NodeId");
        self.storage.push(item);
        id
    }

    /// Get a reference to an item in the arena
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        if id == NULL_NODE {
            return None;
        }
        self.storage.get(usize::try_from(id).ok()?)
    }

    /// Get a mutable reference to an item in the arena
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        if id == NULL_NODE {
            return None;
        }
        self.storage.get_mut(usize::try_from(id).ok()?)
    }

    /// Check if an ID is allocated
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Get arena statistics
    pub fn stats(&self) -> CompactArenaStats {
        let total_capacity = self.storage.capacity();
        let allocated_count = self.storage.len();
        let utilization = if total_capacity > 0 {
            allocated_count as f64 / total_capacity as f64
        } else {
            0.0
        };

        CompactArenaStats {
            total_capacity,
            allocated_count,
            utilization,
        }
    }

    /// Get the number of allocated items
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Check if the arena is empty
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Drop every item. Previously issued ids become dangling.
    pub fn clear(&mut self) {
        self.storage.clear();
    }
}

impl<T> Default for CompactArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
