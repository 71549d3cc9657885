//! FIND operations for ScapegoatTree.
//!
//! This module contains the read operations for the tree: key lookup,
//! first/last access, and the arena access helpers. Lookups never trigger a
//! rebuild.

use std::cmp::Ordering;

use crate::error::{KeyResult, ScapegoatTreeError};
use crate::types::{Node, NodeId, ScapegoatTree, NULL_NODE};

impl<K: Ord> ScapegoatTree<K> {
    // ============================================================================
    // PUBLIC FIND OPERATIONS
    // ============================================================================

    /// Find the node holding `key`.
    ///
    /// # Returns
    ///
    /// A reference to the node if the key exists, `None` otherwise.
    pub fn find(&self, key: &K) -> Option<&Node<K>> {
        let mut current = self.root;

        while current != NULL_NODE {
            let node = &self.arena[current];
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(node),
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
            }
        }

        None
    }

    /// Get a reference to the stored key equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::ScapegoatTree;
    ///
    /// let mut tree = ScapegoatTree::new(0.6).unwrap();
    /// tree.insert(1);
    /// assert_eq!(tree.get(&1), Some(&1));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&K> {
        self.find(key).map(|node| node.key())
    }

    /// Check if `key` exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::ScapegoatTree;
    ///
    /// let mut tree = ScapegoatTree::new(0.6).unwrap();
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Get the stored key equal to `key`, returning an error if absent.
    pub fn get_item(&self, key: &K) -> KeyResult<&K> {
        self.get(key).ok_or(ScapegoatTreeError::KeyNotFound)
    }

    /// Get the smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        self.edge_key(|node| node.left)
    }

    /// Get the largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        self.edge_key(|node| node.right)
    }

    /// Descend along one side of the tree to its extreme key.
    fn edge_key(&self, side: impl Fn(&Node<K>) -> NodeId) -> Option<&K> {
        if self.root == NULL_NODE {
            return None;
        }

        let mut current = self.root;
        loop {
            let node = &self.arena[current];
            let next = side(node);
            if next == NULL_NODE {
                return Some(&node.key);
            }
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_and_get() {
        let mut tree = ScapegoatTree::new(0.6).unwrap();
        for key in [5, 3, 8, 1, 4] {
            tree.insert(key);
        }

        let node = tree.find(&3).unwrap();
        assert_eq!(*node.key(), 3);
        assert_eq!(tree.get(&8), Some(&8));
        assert_eq!(tree.get(&7), None);
        assert!(tree.contains(&1));
        assert!(!tree.contains(&2));
    }

    #[test]
    fn test_get_item_error() {
        let tree = ScapegoatTree::<i32>::new(0.6).unwrap();
        assert_eq!(tree.get_item(&10), Err(ScapegoatTreeError::KeyNotFound));
    }

    #[test]
    fn test_empty_tree_lookups() {
        let tree = ScapegoatTree::<i32>::new(0.6).unwrap();
        assert!(tree.find(&10).is_none());
        assert!(tree.first().is_none());
        assert!(tree.last().is_none());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_first_and_last() {
        let mut tree = ScapegoatTree::new(0.6).unwrap();
        for key in [5, 3, 8, 1, 4, 9] {
            tree.insert(key);
        }
        assert_eq!(tree.first(), Some(&1));
        assert_eq!(tree.last(), Some(&9));
    }
}
