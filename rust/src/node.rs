//! Node-level operations for ScapegoatTree.

use crate::types::{Node, NULL_NODE};

impl<K> Node<K> {
    /// Create a detached leaf node holding `key`.
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: NULL_NODE,
            right: NULL_NODE,
        }
    }

    /// Get a reference to the stored key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left == NULL_NODE && self.right == NULL_NODE
    }
}
