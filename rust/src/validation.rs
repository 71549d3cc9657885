//! Validation and debugging utilities for ScapegoatTree.
//!
//! Invariant checking (ordering, size consistency, alpha height bound,
//! arena/tree consistency), height measurement, and the human-readable
//! structure dump. None of this is part of the algorithmic contract; the
//! insertion path only consults it through `try_insert`.

use std::fmt::Debug;
use std::fmt::Write as _;

use crate::error::{ScapegoatTreeError, SgResultExt, TreeResult};
use crate::types::{NodeId, ScapegoatTree, NULL_NODE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord> ScapegoatTree<K> {
    /// Check if the tree maintains all scapegoat tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        self.check_ordering()?;
        self.check_size_consistency()?;
        self.check_height_bound()?;
        self.check_arena_consistency()
            .with_context("invariant check")
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Check that in-order iteration yields strictly ascending keys.
    fn check_ordering(&self) -> Result<(), String> {
        let mut previous: Option<&K> = None;
        for (index, key) in self.iter().enumerate() {
            if let Some(prev) = previous {
                if prev >= key {
                    return Err(format!("Iteration order violated at index {}", index));
                }
            }
            previous = Some(key);
        }
        Ok(())
    }

    /// Check that the size counter, reachable-node count, and iteration
    /// count all agree.
    fn check_size_consistency(&self) -> Result<(), String> {
        let reachable = self.subtree_size(self.root);
        if reachable != self.size {
            return Err(format!(
                "Size counter is {} but {} nodes are reachable",
                self.size, reachable
            ));
        }

        let iterated = self.iter().count();
        if iterated != self.size {
            return Err(format!(
                "Iterator produced {} keys but tree has {} items",
                iterated, self.size
            ));
        }

        Ok(())
    }

    /// Check the alpha height bound for every node.
    fn check_height_bound(&self) -> Result<(), String> {
        let limit = self.allowed_height(self.size);
        self.check_depths(self.root, 0, limit)
    }

    fn check_depths(&self, id: NodeId, depth: usize, limit: f64) -> Result<(), String> {
        if id == NULL_NODE {
            return Ok(());
        }
        if depth as f64 > limit {
            return Err(format!(
                "Node at depth {} exceeds alpha height bound {:.3} for size {}",
                depth, limit, self.size
            ));
        }
        let node = &self.arena[id];
        self.check_depths(node.left, depth + 1, limit)?;
        self.check_depths(node.right, depth + 1, limit)
    }

    /// Check that arena occupancy matches the tree: every allocated slot is
    /// a live node (the core never releases outside clear()).
    fn check_arena_consistency(&self) -> TreeResult<()> {
        let allocated = self.arena.allocated_count();
        if allocated != self.size {
            return Err(ScapegoatTreeError::arena_error(
                "Node consistency check",
                &format!("{} in tree vs {} in arena", self.size, allocated),
            ));
        }

        let reachable = self.subtree_size(self.root);
        if reachable != self.size {
            return Err(ScapegoatTreeError::corrupted_tree(
                "Size counter",
                &format!("counter {} vs {} reachable nodes", self.size, reachable),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// DEBUGGING METHODS
// ============================================================================

impl<K> ScapegoatTree<K> {
    /// Observed height of the tree in edges: the depth of its deepest node.
    /// Both the empty tree and a single-node tree have height 0.
    pub fn height(&self) -> usize {
        self.node_height(self.root).saturating_sub(1)
    }

    fn node_height(&self, id: NodeId) -> usize {
        if id == NULL_NODE {
            return 0;
        }
        let node = &self.arena[id];
        1 + self.node_height(node.left).max(self.node_height(node.right))
    }

    /// Render the tree as a nested, indented structure for debugging.
    ///
    /// Each node prints as `{key, left, right}` with absent children shown
    /// as `{}` and present children indented on their own lines.
    pub fn dump_structure(&self) -> String
    where
        K: Debug,
    {
        let mut out = String::new();
        if self.root != NULL_NODE {
            self.dump_node(self.root, 0, &mut out);
        }
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, out: &mut String)
    where
        K: Debug,
    {
        for _ in 0..depth {
            out.push('\t');
        }

        let node = &self.arena[id];
        let _ = write!(out, "{{{:?}, ", node.key);

        if node.left != NULL_NODE {
            out.push('\n');
            self.dump_node(node.left, depth + 1, out);
        } else {
            out.push_str("{}");
        }
        out.push_str(", ");

        if node.right != NULL_NODE {
            out.push('\n');
            self.dump_node(node.right, depth + 1, out);
        } else {
            out.push_str("{}");
        }
        out.push('}');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariants_hold_after_mixed_inserts() {
        let mut tree = ScapegoatTree::new(0.57).unwrap();
        for key in [13, 7, 42, 1, 99, 56, 28, 3, 77, 18] {
            tree.insert(key);
            assert!(tree.check_invariants());
        }
        tree.check_invariants_detailed().unwrap();
    }

    #[test]
    fn test_height_of_small_trees() {
        let mut tree = ScapegoatTree::new(0.6).unwrap();
        assert_eq!(tree.height(), 0);
        tree.insert(1);
        assert_eq!(tree.height(), 0);
        tree.insert(2);
        assert_eq!(tree.height(), 1);
    }

    #[test]
    fn test_dump_single_node() {
        let mut tree = ScapegoatTree::new(0.6).unwrap();
        tree.insert(1);
        assert_eq!(tree.dump_structure(), "{1, {}, {}}");
    }

    #[test]
    fn test_dump_nested_structure() {
        let mut tree = ScapegoatTree::new(0.6).unwrap();
        for key in [2, 1, 3] {
            tree.insert(key);
        }
        let dump = tree.dump_structure();
        assert!(dump.starts_with("{2, "));
        assert!(dump.contains("\t{1, {}, {}}"));
        assert!(dump.contains("\t{3, {}, {}}"));
    }

    #[test]
    fn test_dump_empty_tree_is_empty() {
        let tree = ScapegoatTree::<i32>::new(0.6).unwrap();
        assert_eq!(tree.dump_structure(), "");
    }
}
