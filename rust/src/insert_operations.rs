//! INSERT operations for ScapegoatTree.
//!
//! This module contains the insertion path: BST descent that records the
//! ancestor chain, the post-insert depth check against the alpha height
//! bound, and the scapegoat search that picks the subtree to rebuild.
//!
//! Insertion is the only operation that can trigger a rebuild. Lookups and
//! duplicate-insert attempts leave the structure untouched.

use std::cmp::Ordering;

use crate::error::{ModifyResult, ScapegoatTreeError};
use crate::types::{Node, NodeId, ScapegoatTree, NULL_NODE};

impl<K: Ord> ScapegoatTree<K> {
    /// Insert `key` into the tree.
    ///
    /// Returns `true` if the key was inserted, `false` if it was already
    /// present (the tree is left unchanged). If the new node ends up deeper
    /// than the alpha height bound allows, the deepest weight-unbalanced
    /// ancestor is rebuilt into minimum-height form before this returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::ScapegoatTree;
    ///
    /// let mut tree = ScapegoatTree::new(0.6).unwrap();
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool {
        // An empty tree takes the new node as root with no balance check.
        if self.root == NULL_NODE {
            self.root = self.arena.allocate(Node::new(key));
            self.size = 1;
            return true;
        }

        // Ordinary BST descent, recording the ancestor chain from the root
        // down to the parent of the insertion point.
        let mut parents: Vec<NodeId> = Vec::new();
        let mut current = self.root;
        loop {
            parents.push(current);
            let node = &self.arena[current];
            match key.cmp(&node.key) {
                Ordering::Equal => return false,
                Ordering::Less => {
                    if node.left == NULL_NODE {
                        break;
                    }
                    current = node.left;
                }
                Ordering::Greater => {
                    if node.right == NULL_NODE {
                        break;
                    }
                    current = node.right;
                }
            }
        }

        let parent = current;
        let goes_left = key < self.arena[parent].key;
        let leaf = self.arena.allocate(Node::new(key));
        if goes_left {
            self.arena[parent].left = leaf;
        } else {
            self.arena[parent].right = leaf;
        }
        self.size += 1;

        // The chain length is exactly the new leaf's depth.
        let depth = parents.len();
        if depth as f64 > self.allowed_height(self.size) {
            let (scapegoat, scapegoat_parent, subtree_size) = self.find_scapegoat(leaf, &parents);
            let rebuilt = self.rebuild(subtree_size, scapegoat);
            self.relink_subtree(rebuilt, scapegoat_parent);
            self.rebuild_count += 1;
            self.rebuilt_nodes += subtree_size;
        }

        true
    }

    /// Insert a key produced by a fallible constructor.
    ///
    /// The builder runs before any tree state is touched; on failure the
    /// error propagates as `KeyConstruction` and the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::ScapegoatTree;
    ///
    /// let mut tree = ScapegoatTree::new(0.6).unwrap();
    /// let inserted = tree.insert_with(|| "17".parse::<i32>()).unwrap();
    /// assert!(inserted);
    /// assert!(tree.insert_with(|| "oops".parse::<i32>()).is_err());
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert_with<F, E>(&mut self, build: F) -> ModifyResult<bool>
    where
        F: FnOnce() -> Result<K, E>,
        E: std::fmt::Display,
    {
        let key = build().map_err(|e| ScapegoatTreeError::key_construction(&e.to_string()))?;
        Ok(self.insert(key))
    }

    /// Insert with comprehensive integrity checking.
    ///
    /// Validates the full set of tree invariants before and after the
    /// insertion and reports a `DataIntegrityError` on violation.
    pub fn try_insert(&mut self, key: K) -> ModifyResult<bool> {
        self.check_invariants_detailed()
            .map_err(ScapegoatTreeError::DataIntegrityError)?;

        let inserted = self.insert(key);

        self.check_invariants_detailed()
            .map_err(ScapegoatTreeError::DataIntegrityError)?;

        Ok(inserted)
    }

    // ============================================================================
    // SCAPEGOAT SEARCH
    // ============================================================================

    /// Locate the scapegoat for an over-deep `leaf`.
    ///
    /// Walks the recorded ancestor chain deepest-first, growing a running
    /// subtree size. Only the sibling subtree off the walked path has to be
    /// counted at each step. The first ancestor whose local height exceeds
    /// the alpha bound for its subtree size is the deepest weight-unbalanced
    /// node; rebuilding it restores the bound for the entire chain above.
    ///
    /// Returns the scapegoat, its parent (`NULL_NODE` when the scapegoat is
    /// the root), and the exact size of the scapegoat's subtree.
    fn find_scapegoat(&self, leaf: NodeId, parents: &[NodeId]) -> (NodeId, NodeId, usize) {
        let mut node = leaf;
        let mut size_below = 1usize;
        let mut height = 0usize;

        let mut index = parents.len();
        while index > 0 {
            index -= 1;
            let parent = parents[index];
            height += 1;

            let sibling = {
                let p = &self.arena[parent];
                if p.left == node {
                    p.right
                } else {
                    p.left
                }
            };
            let total = 1 + size_below + self.subtree_size(sibling);

            if height as f64 > self.allowed_height(total) {
                let above = if index > 0 { parents[index - 1] } else { NULL_NODE };
                return (parent, above, total);
            }

            node = parent;
            size_below = total;
        }

        // No ancestor on the chain violated the bound: rebuild from the root.
        (self.root, NULL_NODE, self.size)
    }

    /// Hang a rebuilt subtree back off the scapegoat's former parent slot,
    /// or make it the new root.
    fn relink_subtree(&mut self, new_root: NodeId, parent: NodeId) {
        if parent == NULL_NODE {
            self.root = new_root;
            return;
        }

        // All subtree keys sit on one side of the parent, so comparing the
        // new root's key picks the correct slot.
        let goes_left = self.arena[new_root].key < self.arena[parent].key;
        if goes_left {
            self.arena[parent].left = new_root;
        } else {
            self.arena[parent].right = new_root;
        }
    }
}
