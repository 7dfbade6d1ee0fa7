//! Property-based tests for AvlTreeMap.
//!
//! These tests check the map against `BTreeMap` as a model and verify the
//! sentinel-leaf and AVL shape invariants after arbitrary operation mixes.

use std::collections::BTreeMap;

use avlmap::map::{AvlTreeMap, Entry};
use avlmap::tree::{LinkedBinaryTree, Position};
use proptest::prelude::*;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

#[derive(Clone, Debug)]
enum Operation {
    Put(i16, i32),
    Remove(i16),
}

fn arbitrary_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => (any::<i16>(), any::<i32>()).prop_map(|(key, value)| Operation::Put(key, value)),
        2 => any::<i16>().prop_map(Operation::Remove),
    ]
}

/// Keys drawn from a narrow range so puts and removes collide often.
fn clustered_operations(max_size: usize) -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(
        prop_oneof![
            3 => (-64_i16..64, any::<i32>()).prop_map(|(key, value)| Operation::Put(key, value)),
            2 => (-64_i16..64).prop_map(Operation::Remove),
        ],
        0..max_size,
    )
}

fn apply(operations: &[Operation]) -> (AvlTreeMap<i16, i32>, BTreeMap<i16, i32>) {
    let mut map = AvlTreeMap::new();
    let mut model = BTreeMap::new();
    for operation in operations {
        match *operation {
            Operation::Put(key, value) => {
                assert_eq!(map.put(key, value).unwrap(), model.insert(key, value));
            }
            Operation::Remove(key) => {
                assert_eq!(map.remove(&key).unwrap(), model.remove(&key));
            }
        }
    }
    (map, model)
}

// =============================================================================
// Shape Checks
// =============================================================================

/// Returns the height of the subtree at `position`, checking along the way
/// that every node holding an entry has exactly two children, every empty
/// node has none, children agree on their parent, stored heights are exact
/// and sibling heights differ by at most one.
fn checked_height(tree: &LinkedBinaryTree<Entry<i16, i32>>, position: Position) -> i32 {
    let internal = tree.element(position).unwrap().is_some();
    if !internal {
        assert_eq!(tree.num_children(position).unwrap(), 0);
        assert_eq!(tree.aux(position).unwrap(), 0);
        return 0;
    }
    assert_eq!(tree.num_children(position).unwrap(), 2);
    let left = tree.left(position).unwrap().unwrap();
    let right = tree.right(position).unwrap().unwrap();
    assert_eq!(tree.parent(left).unwrap(), Some(position));
    assert_eq!(tree.parent(right).unwrap(), Some(position));

    let left_height = checked_height(tree, left);
    let right_height = checked_height(tree, right);
    assert!((left_height - right_height).abs() <= 1);

    let height = 1 + left_height.max(right_height);
    assert_eq!(tree.aux(position).unwrap(), height);
    height
}

// =============================================================================
// Model Laws
// =============================================================================

proptest! {
    /// Law: after any operation sequence the map holds exactly the model's
    /// entries, in ascending order.
    #[test]
    fn prop_matches_model_law(operations in prop::collection::vec(arbitrary_operation(), 0..200)) {
        let (map, model) = apply(&operations);
        let entries: Vec<(i16, i32)> = map.entries().map(|(key, value)| (*key, *value)).collect();
        let expected: Vec<(i16, i32)> = model.into_iter().collect();
        prop_assert_eq!(entries, expected);
    }

    /// Law: len is the number of distinct keys and the tree has 2n + 1 nodes.
    #[test]
    fn prop_size_law(operations in clustered_operations(200)) {
        let (map, model) = apply(&operations);
        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(map.tree().len(), 2 * model.len() + 1);
    }

    /// Law: put then get returns the value; remove then get returns None.
    #[test]
    fn prop_round_trip_law(operations in clustered_operations(100), key in -64_i16..64, value: i32) {
        let (mut map, _) = apply(&operations);
        map.put(key, value).unwrap();
        prop_assert_eq!(map.get(&key).unwrap(), Some(&value));
        prop_assert_eq!(map.remove(&key).unwrap(), Some(value));
        prop_assert_eq!(map.get(&key).unwrap(), None);
        prop_assert_eq!(map.remove(&key).unwrap(), None);
    }
}

// =============================================================================
// Balance Laws
// =============================================================================

proptest! {
    /// Law: every node satisfies the AVL invariant with exact stored heights.
    #[test]
    fn prop_avl_shape_law(operations in clustered_operations(300)) {
        let (map, _) = apply(&operations);
        let root = map.tree().root().unwrap();
        let height = checked_height(map.tree(), root);
        prop_assert_eq!(usize::try_from(height).unwrap(), map.height().unwrap());
    }

    /// Law: height stays within the AVL bound 1.45 * log2(n + 2).
    #[test]
    fn prop_height_bound_law(keys in prop::collection::vec(any::<i16>(), 1..500)) {
        let mut map = AvlTreeMap::new();
        for key in &keys {
            map.put(*key, 0).unwrap();
        }
        let bound = 1.45 * ((map.len() + 2) as f64).log2();
        prop_assert!((map.height().unwrap() as f64) <= bound);
    }

    /// Law: sorted inserts reach the minimal height ceil(log2(n + 1)) + 1 at most.
    #[test]
    fn prop_ascending_inserts_law(count in 1_usize..600) {
        let mut map = AvlTreeMap::new();
        for key in 0..count {
            map.put(key, ()).unwrap();
        }
        let minimal = (count + 1).next_power_of_two().trailing_zeros() as usize;
        prop_assert!(map.height().unwrap() <= minimal + 1);
    }
}

// =============================================================================
// Navigation Laws
// =============================================================================

proptest! {
    /// Law: the four neighbour queries agree with BTreeMap ranges.
    #[test]
    fn prop_navigation_law(operations in clustered_operations(150), probe in -70_i16..70) {
        let (map, model) = apply(&operations);
        let key = |found: Option<(&i16, &i32)>| found.map(|(key, _)| *key);

        prop_assert_eq!(key(map.ceiling_entry(&probe).unwrap()), model.range(probe..).next().map(|(k, _)| *k));
        prop_assert_eq!(key(map.floor_entry(&probe).unwrap()), model.range(..=probe).next_back().map(|(k, _)| *k));
        prop_assert_eq!(key(map.lower_entry(&probe).unwrap()), model.range(..probe).next_back().map(|(k, _)| *k));
        prop_assert_eq!(key(map.higher_entry(&probe).unwrap()), model.range(probe + 1..).next().map(|(k, _)| *k));
        prop_assert_eq!(key(map.first_entry().unwrap()), model.keys().next().copied());
        prop_assert_eq!(key(map.last_entry().unwrap()), model.keys().next_back().copied());
    }

    /// Law: sub_map(from, to) equals the model's half-open range.
    #[test]
    fn prop_sub_map_law(operations in clustered_operations(150), from in -70_i16..70, to in -70_i16..70) {
        let (map, model) = apply(&operations);
        let range: Vec<(i16, i32)> = map
            .sub_map(&from, &to)
            .unwrap()
            .into_iter()
            .map(|(key, value)| (*key, *value))
            .collect();
        let expected: Vec<(i16, i32)> = if from < to {
            model.range(from..to).map(|(key, value)| (*key, *value)).collect()
        } else {
            Vec::new()
        };
        prop_assert_eq!(range, expected);
    }
}
