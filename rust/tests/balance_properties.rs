//! End-to-end balance and ordering properties of the scapegoat tree.

use rand::prelude::*;
use sgtree::ScapegoatTree;

/// The alpha height bound as the tree itself computes it.
fn height_bound(size: usize, alpha: f64) -> f64 {
    if size <= 1 {
        return 0.0;
    }
    (size as f64).ln() / (1.0 / alpha).ln()
}

#[test]
fn test_ascending_inserts_stay_within_height_bound() {
    // Ascending order is the worst case for a naive BST; the scapegoat
    // mechanism must keep the depth bounded the whole way.
    let mut tree = ScapegoatTree::new(0.6).unwrap();
    for key in 1..=7 {
        assert!(tree.insert(key));
        let bound = height_bound(tree.len(), tree.alpha());
        assert!(
            (tree.height() as f64) <= bound,
            "height {} exceeds bound {:.3} after inserting {}",
            tree.height(),
            bound,
            key
        );
        assert!(tree.check_invariants());
    }

    // The chain must have been straightened at least once before key 7.
    assert!(tree.rebuild_count() >= 1);
}

#[test]
fn test_duplicate_insert_is_rejected() {
    let mut tree = ScapegoatTree::new(0.6).unwrap();
    assert!(tree.insert(5));
    assert!(!tree.insert(5));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5]);
}

#[test]
fn test_empty_tree_behavior() {
    let tree = ScapegoatTree::<i32>::new(0.6).unwrap();
    assert!(tree.get(&10).is_none());
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
}

#[test]
fn test_thousand_random_keys_iterate_sorted() {
    let mut keys: Vec<i32> = (0..1000).collect();
    let mut rng = StdRng::seed_from_u64(0x5EED);
    keys.shuffle(&mut rng);

    let mut tree = ScapegoatTree::new(0.57).unwrap();
    for &key in &keys {
        assert!(tree.insert(key));
    }

    assert_eq!(tree.len(), 1000);
    let forward: Vec<i32> = tree.iter().copied().collect();
    assert_eq!(forward, (0..1000).collect::<Vec<_>>());

    let reverse: Vec<i32> = tree.iter_rev().copied().collect();
    assert_eq!(reverse, (0..1000).rev().collect::<Vec<_>>());

    let bound = height_bound(tree.len(), tree.alpha());
    assert!((tree.height() as f64) <= bound);
    assert!(tree.check_invariants());
}

#[test]
fn test_invalid_alpha_is_rejected() {
    assert!(ScapegoatTree::<i32>::new(0.4).is_err());
    assert!(ScapegoatTree::<i32>::new(1.01).is_err());
}

#[test]
fn test_amortized_rebuild_cost_is_n_log_n() {
    // Total nodes touched by rebuilds over n insertions should be
    // O(n log n). Ascending insertion maximizes rebuild pressure; the
    // constant here is deliberately generous.
    let n = 2000usize;
    let mut tree = ScapegoatTree::new(0.55).unwrap();
    for key in 0..n as i32 {
        tree.insert(key);
    }

    let log_n = (n as f64).log2();
    let budget = (20.0 * n as f64 * log_n) as usize;
    assert!(
        tree.rebuilt_node_count() <= budget,
        "rebuilds touched {} nodes, budget was {}",
        tree.rebuilt_node_count(),
        budget
    );
    assert!(tree.check_invariants());
}

#[test]
fn test_random_workload_keeps_invariants() {
    let mut rng = StdRng::seed_from_u64(42);
    for &alpha in &[0.5, 0.57, 0.7, 0.9] {
        let mut keys: Vec<u32> = (0..500).collect();
        keys.shuffle(&mut rng);

        let mut tree = ScapegoatTree::new(alpha).unwrap();
        for &key in &keys {
            tree.insert(key);
        }

        assert_eq!(tree.len(), 500);
        tree.check_invariants_detailed()
            .unwrap_or_else(|e| panic!("alpha {}: {}", alpha, e));
    }
}
