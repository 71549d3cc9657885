//! Scapegoat tree implementation in Rust with a set-like API.
//!
//! A scapegoat tree is a binary search tree that stays approximately
//! balanced through occasional full subtree rebuilds rather than per-update
//! rotations. After an insertion pushes a node deeper than the alpha height
//! bound allows, the deepest weight-unbalanced ancestor (the scapegoat) is
//! rebuilt in place into a minimum-height subtree via the Day-Stout-Warren
//! transform. Nodes store only a key and two links; no balance metadata is
//! persisted anywhere.

mod arena;
mod construction;
mod error;
mod find_operations;
mod insert_operations;
mod iteration;
mod node;
mod rebuild;
mod types;
mod validation;

pub use arena::{Arena, ArenaStats};
pub use construction::DEFAULT_ALPHA;
pub use error::{
    InitResult, KeyResult, ModifyResult, ScapegoatTreeError, SgResult, SgResultExt,
};
pub use iteration::{Iter, RevIter};
pub use types::{Node, NodeId, ScapegoatTree, NULL_NODE};

impl<K> ScapegoatTree<K> {
    // ============================================================================
    // SIZE AND LIFECYCLE
    // ============================================================================

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The balance factor this tree was constructed with.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Remove all keys from the tree.
    ///
    /// Every node is released in one flat pass over the arena storage.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = NULL_NODE;
        self.size = 0;
        self.rebuild_count = 0;
        self.rebuilt_nodes = 0;
    }

    // ============================================================================
    // STATISTICS
    // ============================================================================

    /// Number of subtree rebuilds performed since construction (or the last
    /// clear).
    pub fn rebuild_count(&self) -> usize {
        self.rebuild_count
    }

    /// Total nodes relinked across all rebuilds. Over any insertion
    /// sequence of length n this grows as O(n log n).
    pub fn rebuilt_node_count(&self) -> usize {
        self.rebuilt_nodes
    }

    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }

    // ============================================================================
    // INTERNAL HELPERS
    // ============================================================================

    /// Size of the subtree under `id`, counted on demand. Nothing is cached
    /// on nodes; rebuild decisions pay O(subtree) recomputation instead of
    /// per-node bookkeeping.
    pub(crate) fn subtree_size(&self, id: NodeId) -> usize {
        if id == NULL_NODE {
            return 0;
        }
        let node = &self.arena[id];
        1 + self.subtree_size(node.left) + self.subtree_size(node.right)
    }

    /// The alpha height bound for a tree of `n` keys:
    /// `ln(n) / ln(1/alpha)`. Depths strictly greater than this violate
    /// balance. Infinite when alpha is 1.0; zero for n <= 1.
    pub(crate) fn allowed_height(&self, n: usize) -> f64 {
        if n <= 1 {
            return 0.0;
        }
        (n as f64).ln() / self.inv_alpha_ln
    }
}

#[cfg(test)]
mod basic_usage_tests {
    use super::*;

    #[test]
    fn test_set_semantics_end_to_end() {
        let mut tree = ScapegoatTree::new(0.6).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.alpha(), 0.6);

        for key in [20, 10, 30, 5, 15, 25, 35] {
            assert!(tree.insert(key));
        }
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.first(), Some(&5));
        assert_eq!(tree.last(), Some(&35));

        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.arena_stats().allocated_count, 0);
        assert!(tree.first().is_none());
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut tree = ScapegoatTree::new(0.6).unwrap();
        for key in 0..50 {
            tree.insert(key);
        }
        tree.clear();
        assert_eq!(tree.rebuild_count(), 0);

        for key in 0..10 {
            tree.insert(key);
        }
        assert_eq!(tree.len(), 10);
        assert!(tree.check_invariants());
    }
}
