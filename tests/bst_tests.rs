// Integration tests for the binary search tree and its traversal timelines

use algotty::generators::{generate_traversal_timeline, Algorithm};
use algotty::snapshot::{Metrics, StepKind};
use algotty::structures::bst::{self, Bst, TraversalOrder};
use proptest::prelude::*;

#[test]
fn test_traversal_orders() {
    let tree = Bst::from_values(&[5, 3, 8, 1, 4]);

    assert_eq!(tree.traverse(TraversalOrder::InOrder), vec![1, 3, 4, 5, 8]);
    assert_eq!(tree.traverse(TraversalOrder::PreOrder), vec![5, 3, 1, 4, 8]);
    assert_eq!(tree.traverse(TraversalOrder::PostOrder), vec![1, 4, 3, 8, 5]);
    assert_eq!(tree.traverse(TraversalOrder::LevelOrder), vec![5, 3, 8, 1, 4]);
}

#[test]
fn test_remove_root_with_two_children() {
    let mut tree = Bst::from_values(&[5, 3, 8, 1, 4]);
    assert!(tree.remove(5));

    let root = tree.root().unwrap();
    assert_eq!(root.value, 8);
    assert_eq!(root.left.as_ref().unwrap().value, 3);
    assert!(root.right.is_none());
    assert_eq!(tree.traverse(TraversalOrder::InOrder), vec![1, 3, 4, 8]);
}

#[test]
fn test_remove_leaf_and_single_child() {
    let mut tree = Bst::from_values(&[50, 30, 70, 20, 40, 60, 80, 65]);

    assert!(tree.remove(20));
    assert!(tree.remove(60));
    assert_eq!(
        tree.traverse(TraversalOrder::InOrder),
        vec![30, 40, 50, 65, 70, 80]
    );
    assert!(!tree.remove(20));
    assert_eq!(tree.len(), 6);
}

#[test]
fn test_duplicates_and_missing_values() {
    let mut tree = Bst::from_values(&[2, 1, 3]);
    assert!(!tree.insert(2));
    assert!(!tree.remove(99));
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.height(), 2);
}

#[test]
fn test_free_insert_returns_root() {
    let root = bst::insert(None, 10);
    let root = bst::insert(root, 5);
    let root = bst::remove(root, 10);
    assert_eq!(root.unwrap().value, 5);
    assert!(bst::remove(None, 1).is_none());
}

#[test]
fn test_traversal_timeline() {
    let tree = Bst::from_values(&[5, 3, 8]);
    let timeline = generate_traversal_timeline(&tree, TraversalOrder::PreOrder);

    assert_eq!(
        timeline.algorithm(),
        Algorithm::Traversal(TraversalOrder::PreOrder)
    );
    assert_eq!(timeline.len(), 5);
    assert_eq!(timeline.first().kind, StepKind::Start);
    assert_eq!(timeline.last().kind, StepKind::Complete);
    assert_eq!(timeline.last().description, "preorder Traversal: [5, 3, 8]");

    let visit = &timeline.snapshots()[2];
    assert_eq!(visit.kind, StepKind::Visit);
    assert_eq!(visit.highlight, vec![1]);
    assert_eq!(visit.state.as_traversal().unwrap().visited, vec![5, 3]);
    assert_eq!(
        visit.metrics,
        Metrics::Traversal {
            visited: 2,
            remaining: 1
        }
    );
}

#[test]
fn test_empty_tree_traversal() {
    let timeline = generate_traversal_timeline(&Bst::new(), TraversalOrder::LevelOrder);
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.last().description, "levelorder Traversal: []");
}

proptest! {
    #[test]
    fn inorder_is_sorted_and_unique(values in proptest::collection::vec(-100_i32..100, 0..40)) {
        let tree = Bst::from_values(&values);
        let mut expected = values.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(tree.traverse(TraversalOrder::InOrder), expected);
    }

    #[test]
    fn every_order_visits_every_node(values in proptest::collection::vec(0_i32..50, 0..30)) {
        let tree = Bst::from_values(&values);
        for order in TraversalOrder::ALL {
            let mut visited = tree.traverse(order);
            visited.sort();
            prop_assert_eq!(visited, tree.traverse(TraversalOrder::InOrder));
        }
    }

    #[test]
    fn remove_keeps_search_order(
        values in proptest::collection::vec(0_i32..50, 1..30),
        victim in 0_i32..50,
    ) {
        let mut tree = Bst::from_values(&values);
        let present = tree.contains(victim);
        prop_assert_eq!(tree.remove(victim), present);
        prop_assert!(!tree.contains(victim));

        let inorder = tree.traverse(TraversalOrder::InOrder);
        for pair in inorder.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}
