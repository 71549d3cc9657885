//! Subtree rebuilding for ScapegoatTree.
//!
//! Turns an arbitrary subtree into a minimum-height BST over the same nodes
//! using the Day-Stout-Warren transform: right-rotate everything into a
//! right-leaning vine, then halve the vine with batches of left-rotations
//! until one node remains. The transform is iterative, needs no extra space
//! beyond a few locals, and never allocates or releases a node: it only
//! reassigns left/right links among the existing ones.
//!
//! In the pointer formulation a pseudo-root node anchors the vine; with
//! arena ids a local head variable plays that role instead.

use crate::types::{NodeId, ScapegoatTree, NULL_NODE};

impl<K> ScapegoatTree<K> {
    /// Rebuild the subtree under `root` into minimum-height form.
    ///
    /// `size` must be the exact node count of the subtree. Returns the new
    /// subtree root; the caller is responsible for relinking it. A subtree
    /// of one node (or none) is returned as-is.
    pub(crate) fn rebuild(&mut self, size: usize, root: NodeId) -> NodeId {
        if size <= 1 {
            return root;
        }

        let (vine, vine_len) = self.tree_to_vine(root);
        debug_assert_eq!(vine_len, size, "subtree size does not match vine length");
        self.vine_to_tree(vine, size)
    }

    /// Phase 1: flatten the subtree into a right-leaning vine by repeatedly
    /// right-rotating away left children. Returns the vine head and the
    /// node count encountered on the way.
    fn tree_to_vine(&mut self, root: NodeId) -> (NodeId, usize) {
        let mut head = root;
        // Tail of the vine built so far; NULL_NODE stands for the
        // pseudo-root position, whose "right child" is `head`.
        let mut tail = NULL_NODE;
        let mut rest = root;
        let mut count = 0usize;

        while rest != NULL_NODE {
            let left = self.arena[rest].left;
            if left == NULL_NODE {
                // No leftward subtree: this node joins the vine.
                tail = rest;
                rest = self.arena[rest].right;
                count += 1;
            } else {
                // Right rotation lifting the left child above `rest`.
                let left_right = self.arena[left].right;
                self.arena[rest].left = left_right;
                self.arena[left].right = rest;
                rest = left;
                if tail == NULL_NODE {
                    head = left;
                } else {
                    self.arena[tail].right = left;
                }
            }
        }

        (head, count)
    }

    /// Phase 2: compress the vine into a complete tree. One partial pass
    /// trims the vine down to the nearest perfect size, then each full pass
    /// halves the remaining count until a single root is left.
    fn vine_to_tree(&mut self, head: NodeId, size: usize) -> NodeId {
        let full = full_size(size);
        let mut head = self.compress(head, size - full);
        let mut remaining = full;
        while remaining > 1 {
            remaining >>= 1;
            head = self.compress(head, remaining);
        }
        head
    }

    /// One compression pass: `count` left-rotations along the vine's spine,
    /// lifting every second node.
    fn compress(&mut self, head: NodeId, count: usize) -> NodeId {
        let mut head = head;
        // NULL_NODE marks the pseudo-root position again.
        let mut scanner = NULL_NODE;

        for _ in 0..count {
            let child = if scanner == NULL_NODE {
                head
            } else {
                self.arena[scanner].right
            };
            let lifted = self.arena[child].right;

            if scanner == NULL_NODE {
                head = lifted;
            } else {
                self.arena[scanner].right = lifted;
            }
            self.arena[child].right = self.arena[lifted].left;
            self.arena[lifted].left = child;

            scanner = lifted;
        }

        head
    }
}

/// Largest `2^k - 1` not exceeding `size`: the node count of the full
/// portion of a complete binary tree with `size` nodes.
fn full_size(size: usize) -> usize {
    let mut full = 1usize;
    while full <= size {
        full = 2 * full + 1;
    }
    full >> 1
}
