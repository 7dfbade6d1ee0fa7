//! Ordered maps over a sentinel-leaf binary search tree.
//!
//! [`TreeMap`] implements the search-tree algorithms once and delegates
//! rebalancing to a [`BalancePolicy`]:
//!
//! - [`Unbalanced`]: a plain binary search tree
//! - [`AvlBalance`]: an AVL tree with heights stored per node
//!
//! Keys are ordered by a [`Comparator`], [`NaturalOrder`] by default.
//!
//! # Examples
//!
//! ```rust
//! use avlmap::map::{AvlTreeMap, TreeMap};
//!
//! let mut balanced = AvlTreeMap::new();
//! let mut plain: TreeMap<i32, i32> = TreeMap::new();
//! for key in 1..=15 {
//!     balanced.put(key, key).unwrap();
//!     plain.put(key, key).unwrap();
//! }
//!
//! assert_eq!(balanced.height().unwrap(), 4);
//! assert_eq!(plain.height().unwrap(), 15);
//!
//! let rebuilt: AvlTreeMap<i32, i32> = plain.iter().map(|(k, v)| (*k, *v)).collect();
//! assert_eq!(balanced, rebuilt);
//! ```

mod avl;
mod compare;
mod entry;
mod iter;
mod policy;
mod render;
mod traits;
mod tree_map;

pub use avl::AvlBalance;
pub use compare::{Comparator, FnComparator, NaturalOrder, PartialOrder};
pub use entry::{Entry, Traced};
pub use iter::{Entries, Keys, Values};
pub use policy::{BalancePolicy, Unbalanced};
pub use tree_map::TreeMap;

/// A [`TreeMap`] kept height-balanced by [`AvlBalance`].
pub type AvlTreeMap<K, V, C = NaturalOrder> = TreeMap<K, V, AvlBalance, C>;

static_assertions::assert_impl_all!(AvlTreeMap<String, u64>: Send, Sync, Clone, Default);
