//! Error types for tree and map operations.
//!
//! Two families of failure exist:
//!
//! - [`StructureError`]: a position-level operation was misused (foreign or
//!   stale position, attaching a child twice, excising a node with two
//!   children, rotating the root, restructuring without a grandparent). These
//!   indicate a programming error on the caller's side.
//! - [`MapError`]: a map operation failed, either because the key cannot be
//!   ordered by the map's comparator or because a structural error surfaced
//!   from the underlying tree.
//!
//! Absence of a key is never an error; lookups return `None` instead.

use std::fmt;

use thiserror::Error;

/// Which child slot of a node an operation refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => formatter.write_str("left"),
            Self::Right => formatter.write_str("right"),
        }
    }
}

/// Misuse of a position-level tree operation.
///
/// # Examples
///
/// ```rust
/// use avlmap::tree::LinkedBinaryTree;
/// use avlmap::StructureError;
///
/// let mut tree = LinkedBinaryTree::new();
/// tree.add_root(Some(1)).unwrap();
/// assert_eq!(tree.add_root(Some(2)), Err(StructureError::RootExists));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StructureError {
    /// The position was handed out by a different tree.
    #[error("position belongs to a different tree")]
    ForeignPosition,

    /// The position refers to a node that has since been removed.
    #[error("position {index} no longer refers to a live node")]
    StalePosition {
        /// Arena index carried by the stale position.
        index: usize,
    },

    /// `add_root` was called on a tree that already has a root.
    #[error("tree already has a root")]
    RootExists,

    /// A child was attached to a slot that is already occupied.
    #[error("position already has a {side} child")]
    ChildExists {
        /// The occupied slot.
        side: Side,
    },

    /// `remove` was called on a node with two children.
    #[error("position has two children and cannot be removed")]
    TwoChildren,

    /// `rotate` was called on the root.
    #[error("the root cannot be rotated above its parent")]
    RotateRoot,

    /// `restructure` was called on a node without a grandparent.
    #[error("position has no grandparent to restructure around")]
    MissingGrandparent,

    /// An internal map node is missing one of its two children.
    #[error("internal position is missing its {side} child")]
    MissingChild {
        /// The empty slot.
        side: Side,
    },

    /// A map's tree lost its sentinel root.
    #[error("tree has no root")]
    MissingRoot,
}

/// Failure of an ordered map operation.
///
/// # Examples
///
/// ```rust
/// use avlmap::map::{AvlTreeMap, PartialOrder, TreeMap};
/// use avlmap::MapError;
///
/// let mut map: AvlTreeMap<f64, &str, PartialOrder> = TreeMap::with_comparator(PartialOrder);
/// map.put(1.5, "one and a half").unwrap();
/// assert_eq!(map.put(f64::NAN, "nan"), Err(MapError::InvalidKey));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    /// The key cannot be ordered under the map's comparator.
    #[error("key is not comparable under the map's ordering")]
    InvalidKey,

    /// The underlying tree reported structural misuse.
    #[error(transparent)]
    Structure(#[from] StructureError),
}
