//! Index-addressed arena used for node storage.
//!
//! Nodes are stored in a plain `Vec<T>` with a separate allocated mask and a
//! free list, so slot handles stay stable across subtree rebuilds and there is
//! no `Option<T>` wrapper overhead in the storage itself. The tree only ever
//! allocates (insertion) and clears (teardown); the release path exists to
//! complete the allocator boundary and is exercised by the free-list tests.

use std::convert::TryFrom;
use std::ops::{Index, IndexMut};

/// Slot handle type for arena-based allocation.
pub type NodeId = u32;

/// Sentinel handle meaning "no node".
pub const NULL_NODE: NodeId = u32::MAX;

/// Snapshot of arena occupancy.
#[derive(Debug, Clone, Copy)]
pub struct ArenaStats {
    pub total_capacity: usize,
    pub allocated_count: usize,
    pub free_count: usize,
    pub utilization: f64,
}

/// Arena allocator with a free list over `Vec<T>` storage.
#[derive(Debug, Clone)]
pub struct Arena<T> {
    /// Direct storage without Option wrapper.
    storage: Vec<T>,
    /// Free slot indices available for reuse.
    free_list: Vec<usize>,
    /// Which slots are currently allocated.
    allocated_mask: Vec<bool>,
    /// Number of live slots, maintained incrementally.
    allocated: usize,
}

impl<T> Arena<T> {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            allocated_mask: Vec::new(),
            allocated: 0,
        }
    }

    /// Create a new arena with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            allocated_mask: Vec::with_capacity(capacity),
            allocated: 0,
        }
    }

    /// Allocate a new item in the arena and return its ID.
    #[inline]
    pub fn allocate(&mut self, item: T) -> NodeId {
        let index = if let Some(free_index) = self.free_list.pop() {
            // Reuse a free slot; the stale value is dropped here.
            self.storage[free_index] = item;
            self.allocated_mask[free_index] = true;
            free_index
        } else {
            let index = self.storage.len();
            self.storage.push(item);
            self.allocated_mask.push(true);
            index
        };

        self.allocated += 1;
        NodeId::try_from(index).expect("Index should fit in NodeId")
    }

    /// Release a slot back to the free list.
    ///
    /// Returns false if the ID was null, out of range, or already free. The
    /// stored value is dropped lazily when the slot is reused or the arena is
    /// cleared.
    pub fn release(&mut self, id: NodeId) -> bool {
        if id == NULL_NODE {
            return false;
        }

        let index = usize::try_from(id).ok().unwrap_or(usize::MAX);
        if index >= self.allocated_mask.len() || !self.allocated_mask[index] {
            return false;
        }

        self.allocated_mask[index] = false;
        self.free_list.push(index);
        self.allocated -= 1;
        true
    }

    /// Get a reference to an item in the arena.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        if id == NULL_NODE {
            return None;
        }

        let index = usize::try_from(id).ok()?;
        if index < self.storage.len() && self.allocated_mask[index] {
            Some(&self.storage[index])
        } else {
            None
        }
    }

    /// Get a mutable reference to an item in the arena.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        if id == NULL_NODE {
            return None;
        }

        let index = usize::try_from(id).ok()?;
        if index < self.storage.len() && self.allocated_mask[index] {
            Some(&mut self.storage[index])
        } else {
            None
        }
    }

    /// Check if an ID is valid and allocated.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Get the number of allocated items.
    pub fn allocated_count(&self) -> usize {
        self.allocated
    }

    /// Get the number of free slots.
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Check if the arena has no live items.
    pub fn is_empty(&self) -> bool {
        self.allocated == 0
    }

    /// Get the total storage capacity.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Drop all items and reset the arena to empty.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.allocated_mask.clear();
        self.free_list.clear();
        self.allocated = 0;
    }

    /// Get arena statistics.
    pub fn stats(&self) -> ArenaStats {
        let total_capacity = self.storage.capacity();
        let utilization = if total_capacity > 0 {
            self.allocated as f64 / total_capacity as f64
        } else {
            0.0
        };

        ArenaStats {
            total_capacity,
            allocated_count: self.allocated,
            free_count: self.free_list.len(),
            utilization,
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Live-slot access for internal structure walks. IDs held in tree links are
// never released outside clear(), so a miss here is a structural bug.
impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        self.get(id).expect("arena id is not allocated")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        self.get_mut(id).expect("arena id is not allocated")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_basic_operations() {
        let mut arena = Arena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);
        let id3 = arena.allocate(126);

        assert_eq!(arena.get(id1), Some(&42));
        assert_eq!(arena.get(id2), Some(&84));
        assert_eq!(arena.get(id3), Some(&126));

        assert!(arena.contains(id1));
        assert!(!arena.contains(NULL_NODE));

        let stats = arena.stats();
        assert_eq!(stats.allocated_count, 3);
        assert_eq!(stats.free_count, 0);
    }

    #[test]
    fn test_arena_release_and_reuse() {
        let mut arena: Arena<i32> = Arena::new();

        let id1 = arena.allocate(42);
        let id2 = arena.allocate(84);

        assert!(arena.release(id1));
        assert!(!arena.contains(id1));
        assert!(arena.contains(id2));
        assert_eq!(arena.free_count(), 1);

        // Double release is rejected.
        assert!(!arena.release(id1));

        // The freed slot is reused.
        let id3 = arena.allocate(168);
        assert_eq!(id3, id1);
        assert_eq!(arena.get(id3), Some(&168));
        assert_eq!(arena.free_count(), 0);
        assert_eq!(arena.allocated_count(), 2);
    }

    #[test]
    fn test_arena_indexing() {
        let mut arena = Arena::new();
        let id = arena.allocate(42);

        assert_eq!(arena[id], 42);
        arena[id] = 84;
        assert_eq!(arena[id], 84);
    }

    #[test]
    fn test_arena_clear() {
        let mut arena = Arena::new();
        arena.allocate("a");
        arena.allocate("b");
        assert_eq!(arena.allocated_count(), 2);

        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.allocated_count(), 0);
        assert_eq!(arena.free_count(), 0);
    }
}
