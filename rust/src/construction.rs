//! Construction and initialization logic for ScapegoatTree.
//!
//! Balance factor validation happens here: the tree refuses to exist with an
//! alpha outside [0.5, 1.0] rather than proceed with undefined balance
//! behavior.

use crate::arena::Arena;
use crate::error::{InitResult, ScapegoatTreeError};
use crate::types::{ScapegoatTree, MAX_ALPHA, MIN_ALPHA, NULL_NODE};

/// Default balance factor, a middle-of-the-road tradeoff between height
/// bound and rebuild frequency.
pub const DEFAULT_ALPHA: f64 = 0.7;

impl<K> ScapegoatTree<K> {
    /// Create a scapegoat tree with the given balance factor.
    ///
    /// # Arguments
    ///
    /// * `alpha` - Balance factor in `[0.5, 1.0]`. Smaller values keep the
    ///   tree shorter at the cost of more frequent rebuilds; `1.0` disables
    ///   rebuilding entirely (the height bound becomes infinite).
    ///
    /// # Returns
    ///
    /// Returns `Ok(ScapegoatTree)` if alpha is valid, `Err(ScapegoatTreeError)`
    /// otherwise. NaN is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::ScapegoatTree;
    ///
    /// let tree = ScapegoatTree::<i32>::new(0.6).unwrap();
    /// assert!(tree.is_empty());
    ///
    /// assert!(ScapegoatTree::<i32>::new(0.4).is_err());
    /// ```
    pub fn new(alpha: f64) -> InitResult<Self> {
        if !(MIN_ALPHA..=MAX_ALPHA).contains(&alpha) {
            return Err(ScapegoatTreeError::invalid_alpha(alpha));
        }

        Ok(Self {
            alpha,
            // ln(1/alpha): +0.0 at alpha = 1.0, so the bound divides to
            // +infinity there instead of flipping sign.
            inv_alpha_ln: alpha.recip().ln(),
            root: NULL_NODE,
            size: 0,
            arena: Arena::new(),
            rebuild_count: 0,
            rebuilt_nodes: 0,
        })
    }

    /// Create a scapegoat tree with the default balance factor.
    ///
    /// This is equivalent to calling `new(DEFAULT_ALPHA)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sgtree::ScapegoatTree;
    ///
    /// let tree = ScapegoatTree::<String>::with_default_alpha().unwrap();
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_default_alpha() -> InitResult<Self> {
        Self::new(DEFAULT_ALPHA)
    }
}

impl<K> Default for ScapegoatTree<K> {
    /// Create a scapegoat tree with the default balance factor.
    fn default() -> Self {
        Self::with_default_alpha().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction() {
        let tree = ScapegoatTree::<i32>::new(0.6).unwrap();
        assert_eq!(tree.alpha, 0.6);
        assert_eq!(tree.root, NULL_NODE);
        assert_eq!(tree.size, 0);
    }

    #[test]
    fn test_alpha_bounds() {
        assert!(ScapegoatTree::<i32>::new(0.5).is_ok());
        assert!(ScapegoatTree::<i32>::new(1.0).is_ok());
        assert!(ScapegoatTree::<i32>::new(0.4).unwrap_err().is_alpha_error());
        assert!(ScapegoatTree::<i32>::new(1.2).is_err());
        assert!(ScapegoatTree::<i32>::new(f64::NAN).is_err());
    }

    #[test]
    fn test_default() {
        let tree = ScapegoatTree::<i32>::default();
        assert_eq!(tree.alpha, DEFAULT_ALPHA);
    }

    #[test]
    fn test_alpha_one_has_infinite_bound() {
        let tree = ScapegoatTree::<i32>::new(1.0).unwrap();
        assert!(tree.allowed_height(1000).is_infinite());
    }
}
