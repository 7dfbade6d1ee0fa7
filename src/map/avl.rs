//! AVL height-balancing policy.
//!
//! Each node's height is kept in the tree's auxiliary field: a sentinel
//! (childless node) has height 0, any other node `1 + max(left, right)`.
//! Whenever the two child heights of a node differ by two, the taller
//! grandchild is restructured, which restores the invariant locally with at
//! most two rotations.
//!
//! # Examples
//!
//! ```rust
//! use avlmap::map::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! for key in 1..=7 {
//!     map.put(key, key * 10).unwrap();
//! }
//!
//! // Ascending inserts still produce a perfect tree of height 3.
//! assert_eq!(map.height().unwrap(), 3);
//! ```

use tracing::debug;

use super::policy::BalancePolicy;
use crate::error::{Side, StructureError};
use crate::tree::{LinkedBinaryTree, Position};

/// Keeps every node's subtree heights within one of each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AvlBalance;

impl AvlBalance {
    fn height<E>(
        tree: &LinkedBinaryTree<E>,
        position: Option<Position>,
    ) -> Result<i32, StructureError> {
        position.map_or(Ok(0), |position| tree.aux(position))
    }

    fn child_heights<E>(
        tree: &LinkedBinaryTree<E>,
        position: Position,
    ) -> Result<(i32, i32), StructureError> {
        Ok((
            Self::height(tree, tree.left(position)?)?,
            Self::height(tree, tree.right(position)?)?,
        ))
    }

    fn recompute_height<E>(
        tree: &mut LinkedBinaryTree<E>,
        position: Position,
    ) -> Result<i32, StructureError> {
        let height = if tree.is_external(position)? {
            0
        } else {
            let (left, right) = Self::child_heights(tree, position)?;
            1 + left.max(right)
        };
        tree.set_aux(position, height)?;
        Ok(height)
    }

    /// Picks the child with the greater height; ties favor the child aligned
    /// with `position` itself, so a restructure needs a single rotation.
    fn taller_child<E>(
        tree: &LinkedBinaryTree<E>,
        position: Position,
    ) -> Result<Position, StructureError> {
        let (left, right) = Self::child_heights(tree, position)?;
        let side = if left > right {
            Side::Left
        } else if left < right {
            Side::Right
        } else {
            match tree.parent(position)? {
                Some(parent) if tree.right(parent)? == Some(position) => Side::Right,
                _ => Side::Left,
            }
        };
        tree.child(position, side)?
            .ok_or(StructureError::MissingChild { side })
    }

    /// Walks from `start` toward the root, recomputing heights and repairing
    /// violations. The walk ends at the root, once a recomputed height is
    /// unchanged, or after the first repair when `stop_after_repair` is set.
    fn rebalance<E>(
        tree: &mut LinkedBinaryTree<E>,
        start: Position,
        stop_after_repair: bool,
    ) -> Result<(), StructureError> {
        let mut walk = Some(start);
        while let Some(current) = walk {
            let old_height = tree.aux(current)?;
            let (left, right) = Self::child_heights(tree, current)?;

            let mut top = current;
            let repaired = (left - right).abs() > 1;
            if repaired {
                let child = Self::taller_child(tree, current)?;
                let grandchild = Self::taller_child(tree, child)?;
                top = tree.restructure(grandchild)?;
                for side in [Side::Left, Side::Right] {
                    if let Some(below) = tree.child(top, side)? {
                        Self::recompute_height(tree, below)?;
                    }
                }
                debug!(
                    left_height = left,
                    right_height = right,
                    "repaired height violation"
                );
            }

            let new_height = Self::recompute_height(tree, top)?;
            if new_height == old_height || (repaired && stop_after_repair) {
                break;
            }
            walk = tree.parent(top)?;
        }
        Ok(())
    }
}

impl BalancePolicy for AvlBalance {
    fn rebalance_insert<E>(
        &mut self,
        tree: &mut LinkedBinaryTree<E>,
        position: Position,
    ) -> Result<(), StructureError> {
        Self::rebalance(tree, position, true)
    }

    fn rebalance_delete<E>(
        &mut self,
        tree: &mut LinkedBinaryTree<E>,
        position: Position,
    ) -> Result<(), StructureError> {
        // The promoted subtree itself is unchanged; heights can only differ
        // from its parent upward.
        match tree.parent(position)? {
            Some(parent) => Self::rebalance(tree, parent, false),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Builds a sentinel-encoded chain `1 -> 2 -> 3` leaning right, with
    /// heights as an unbalanced insert would leave them.
    fn right_chain() -> (LinkedBinaryTree<i32>, Position) {
        let mut tree = LinkedBinaryTree::new();
        let one = tree.add_root(Some(1)).unwrap();
        tree.add_left(one, None).unwrap();
        let two = tree.add_right(one, Some(2)).unwrap();
        tree.add_left(two, None).unwrap();
        let three = tree.add_right(two, Some(3)).unwrap();
        tree.add_left(three, None).unwrap();
        tree.add_right(three, None).unwrap();
        tree.set_aux(two, 1).unwrap();
        tree.set_aux(one, 2).unwrap();
        (tree, three)
    }

    #[rstest]
    fn test_insert_rebalance_fixes_right_chain() {
        let (mut tree, three) = right_chain();

        AvlBalance.rebalance_insert(&mut tree, three).unwrap();

        let root = tree.root().unwrap();
        assert_eq!(tree.element(root).unwrap(), Some(&2));
        assert_eq!(tree.aux(root).unwrap(), 2);
        let left = tree.left(root).unwrap().unwrap();
        let right = tree.right(root).unwrap().unwrap();
        assert_eq!(tree.aux(left).unwrap(), 1);
        assert_eq!(tree.aux(right).unwrap(), 1);
        let elements: Vec<&i32> = tree.inorder_elements().collect();
        assert_eq!(elements, vec![&1, &2, &3]);
    }

    #[rstest]
    fn test_sentinel_height_is_zero() {
        let mut tree: LinkedBinaryTree<i32> = LinkedBinaryTree::new();
        let root = tree.add_root(None).unwrap();
        assert_eq!(AvlBalance::recompute_height(&mut tree, root).unwrap(), 0);
    }

    #[rstest]
    fn test_delete_rebalance_on_root_is_noop() {
        let mut tree = LinkedBinaryTree::new();
        let root = tree.add_root(Some(1)).unwrap();
        AvlBalance.rebalance_delete(&mut tree, root).unwrap();
        assert_eq!(tree.root(), Some(root));
    }

    #[rstest]
    fn test_access_rebalance_is_noop() {
        let (mut tree, three) = right_chain();
        let root = tree.root();
        AvlBalance.rebalance_access(&mut tree, three).unwrap();
        assert_eq!(tree.root(), root);
    }
}
