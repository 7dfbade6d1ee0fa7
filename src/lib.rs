//! # avlmap
//!
//! An ordered map built on an arena-backed, sentinel-leaf binary search tree,
//! with pluggable rebalancing and an AVL height-balancing policy.
//!
//! ## Overview
//!
//! The crate is layered bottom-up:
//!
//! - **Linked binary tree** ([`tree::LinkedBinaryTree`]): positional nodes in
//!   an arena, navigation, structural edits and lazy in-order traversal
//! - **Restructuring**: single rotations and tri-node restructures that
//!   preserve in-order sequence, plus a per-node auxiliary integer
//! - **Ordered map** ([`map::TreeMap`]): search, insert, delete, ordered
//!   navigation and range scans over sentinel-leaf encoded trees, with an
//!   optional comparison-step counter
//! - **Balancing** ([`map::AvlBalance`]): keeps subtree heights within one of
//!   each other, so every keyed operation is O(log N)
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for maps
//!
//! ## Example
//!
//! ```rust
//! use avlmap::prelude::*;
//!
//! let mut codes = AvlTreeMap::new();
//! codes.put(6037, "Los Angeles").unwrap();
//! codes.put(17031, "Cook").unwrap();
//! codes.put(48201, "Harris").unwrap();
//!
//! assert_eq!(codes.floor_entry(&20000).unwrap(), Some((&17031, &"Cook")));
//! assert_eq!(codes.get_traced(&48201).unwrap().steps, 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use avlmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MapError, StructureError};
    pub use crate::map::{
        AvlBalance, AvlTreeMap, BalancePolicy, Comparator, NaturalOrder, PartialOrder, Traced,
        TreeMap, Unbalanced,
    };
}

pub mod error;
pub mod map;
pub mod tree;

pub use error::{MapError, Side, StructureError};
