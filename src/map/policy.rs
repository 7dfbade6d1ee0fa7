//! Rebalancing hooks driven by [`TreeMap`](super::TreeMap).
//!
//! After every structural change or lookup the map hands the affected
//! position to its [`BalancePolicy`]:
//!
//! - `rebalance_insert`: the freshly expanded node after a new key
//! - `rebalance_delete`: the sibling promoted into the excised node's slot
//! - `rebalance_access`: the node reached by a lookup, replacement, or
//!   unsuccessful removal (possibly a sentinel)
//!
//! [`Unbalanced`] ignores all three, leaving a plain binary search tree.
//! [`AvlBalance`](super::AvlBalance) keeps the tree height-balanced.

use crate::error::StructureError;
use crate::tree::{LinkedBinaryTree, Position};

/// A strategy that restores a balance invariant after map operations.
///
/// Implementations may only re-shape the tree through rotations, so the
/// in-order sequence of elements is preserved.
pub trait BalancePolicy {
    /// Called after `position` was expanded from a sentinel into a new entry.
    ///
    /// # Errors
    ///
    /// Propagates any [`StructureError`] raised while re-shaping the tree.
    fn rebalance_insert<E>(
        &mut self,
        tree: &mut LinkedBinaryTree<E>,
        position: Position,
    ) -> Result<(), StructureError>;

    /// Called after a node was excised and `position` was promoted in its place.
    ///
    /// # Errors
    ///
    /// Propagates any [`StructureError`] raised while re-shaping the tree.
    fn rebalance_delete<E>(
        &mut self,
        tree: &mut LinkedBinaryTree<E>,
        position: Position,
    ) -> Result<(), StructureError>;

    /// Called after `position` was reached by a search. Does nothing by default.
    ///
    /// # Errors
    ///
    /// Propagates any [`StructureError`] raised while re-shaping the tree.
    fn rebalance_access<E>(
        &mut self,
        _tree: &mut LinkedBinaryTree<E>,
        _position: Position,
    ) -> Result<(), StructureError> {
        Ok(())
    }
}

/// A policy that never rebalances.
///
/// Inserting keys in sorted order produces a degenerate, list-shaped tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unbalanced;

impl BalancePolicy for Unbalanced {
    #[inline]
    fn rebalance_insert<E>(
        &mut self,
        _tree: &mut LinkedBinaryTree<E>,
        _position: Position,
    ) -> Result<(), StructureError> {
        Ok(())
    }

    #[inline]
    fn rebalance_delete<E>(
        &mut self,
        _tree: &mut LinkedBinaryTree<E>,
        _position: Position,
    ) -> Result<(), StructureError> {
        Ok(())
    }
}
