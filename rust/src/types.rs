//! Core types and data structures for ScapegoatTree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the scapegoat tree implementation.

use crate::arena::Arena;

pub use crate::arena::{NodeId, NULL_NODE};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest accepted balance factor (tightest balance, most rebuilds).
pub(crate) const MIN_ALPHA: f64 = 0.5;

/// Largest accepted balance factor (no rebuilds ever fire).
pub(crate) const MAX_ALPHA: f64 = 1.0;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Scapegoat tree implementation with a set-like API.
///
/// A scapegoat tree is a binary search tree that stays approximately balanced
/// by occasionally rebuilding whole subtrees into minimum-height form, rather
/// than rotating on every update like red-black or AVL trees. Nodes carry no
/// balance metadata at all; subtree sizes are recomputed on demand when a
/// rebuild decision has to be made.
///
/// The balance factor `alpha` in `[0.5, 1.0]` is fixed at construction and
/// bounds the allowed node depth to `log(n) / log(1/alpha)`. Smaller alpha
/// means a tighter height bound and more frequent (larger) rebuilds.
///
/// # Type Parameters
///
/// * `K` - Key type that must implement `Ord`
///
/// # Examples
///
/// ```
/// use sgtree::ScapegoatTree;
///
/// let mut tree = ScapegoatTree::new(0.6).unwrap();
/// tree.insert(2);
/// tree.insert(1);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 3);
/// assert!(tree.contains(&2));
///
/// let keys: Vec<_> = tree.iter().copied().collect();
/// assert_eq!(keys, [1, 2, 3]);
/// ```
///
/// # Performance Characteristics
///
/// - **Lookup**: O(log n) amortized
/// - **Insertion**: O(log n) amortized, O(n) worst case when a large
///   subtree is rebuilt (bounded and rare by construction, not an error)
/// - **Iteration**: O(n)
#[derive(Debug, Clone)]
pub struct ScapegoatTree<K> {
    /// Balance factor in [0.5, 1.0], fixed at construction.
    pub(crate) alpha: f64,
    /// Precomputed ln(1/alpha) for the height-bound check.
    pub(crate) inv_alpha_ln: f64,
    /// Root node of the tree, NULL_NODE when empty.
    pub(crate) root: NodeId,
    /// Total element count, maintained incrementally.
    pub(crate) size: usize,
    /// Arena storage for all nodes.
    pub(crate) arena: Arena<Node<K>>,
    /// Number of subtree rebuilds performed so far.
    pub(crate) rebuild_count: usize,
    /// Total nodes relinked by rebuilds so far.
    pub(crate) rebuilt_nodes: usize,
}

/// A single tree node: one key plus two child links.
///
/// Links are arena IDs, never parent pointers; the ancestor chain needed
/// during insertion is recorded transiently on the side.
#[derive(Debug, Clone)]
pub struct Node<K> {
    /// The stored key.
    pub(crate) key: K,
    /// Left child subtree, NULL_NODE if absent.
    pub(crate) left: NodeId,
    /// Right child subtree, NULL_NODE if absent.
    pub(crate) right: NodeId,
}
