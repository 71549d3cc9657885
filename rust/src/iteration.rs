//! Iterator implementations for ScapegoatTree.
//!
//! In-order traversal without parent pointers: each iterator carries an
//! explicit stack of ancestors still owing a visit. Forward iteration stacks
//! pending right subtrees, reverse iteration pending left subtrees; the same
//! mechanism mirrored.
//!
//! There is deliberately no `iter_mut`: handing out `&mut K` would let a
//! caller reorder keys under the tree and break the search invariant, so the
//! mutable variant is unrepresentable.

use crate::types::{NodeId, ScapegoatTree, NULL_NODE};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Forward in-order iterator over the keys of a scapegoat tree.
pub struct Iter<'a, K> {
    tree: &'a ScapegoatTree<K>,
    /// Ancestors still owing a visit, deepest on top.
    stack: Vec<NodeId>,
    remaining: usize,
}

/// Reverse in-order iterator over the keys of a scapegoat tree.
pub struct RevIter<'a, K> {
    tree: &'a ScapegoatTree<K>,
    stack: Vec<NodeId>,
    remaining: usize,
}

// ============================================================================
// SCAPEGOATTREE ITERATOR METHODS
// ============================================================================

impl<K: Ord> ScapegoatTree<K> {
    /// Returns an iterator over all keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::ScapegoatTree;
    ///
    /// let mut tree = ScapegoatTree::new(0.6).unwrap();
    /// for key in [3, 1, 2] {
    ///     tree.insert(key);
    /// }
    /// let keys: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    /// Returns an iterator over all keys in descending order.
    pub fn iter_rev(&self) -> RevIter<'_, K> {
        RevIter::new(self)
    }
}

impl<'a, K: Ord> IntoIterator for &'a ScapegoatTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

// ============================================================================
// ITER IMPLEMENTATION
// ============================================================================

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(tree: &'a ScapegoatTree<K>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.size,
        };
        iter.push_left_spine(tree.root);
        iter
    }

    /// Descend fully left from `id`, stacking every node on the way.
    fn push_left_spine(&mut self, mut id: NodeId) {
        while id != NULL_NODE {
            self.stack.push(id);
            id = self.tree.arena[id].left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let right = tree.arena[id].right;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(&tree.arena[id].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}

// ============================================================================
// REVITER IMPLEMENTATION
// ============================================================================

impl<'a, K> RevIter<'a, K> {
    pub(crate) fn new(tree: &'a ScapegoatTree<K>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.size,
        };
        iter.push_right_spine(tree.root);
        iter
    }

    fn push_right_spine(&mut self, mut id: NodeId) {
        while id != NULL_NODE {
            self.stack.push(id);
            id = self.tree.arena[id].right;
        }
    }
}

impl<'a, K> Iterator for RevIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let left = tree.arena[id].left;
        self.push_right_spine(left);
        self.remaining -= 1;
        Some(&tree.arena[id].key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for RevIter<'a, K> {}
