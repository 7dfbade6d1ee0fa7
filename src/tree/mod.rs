//! Positional binary trees.
//!
//! This module provides the structural layers beneath the ordered map:
//!
//! - [`LinkedBinaryTree`]: an arena-backed binary tree of [`Position`]s with
//!   navigation, structural edits and lazy in-order traversal
//! - Rotation and tri-node restructuring (`rotate`, `restructure`) together
//!   with a per-node auxiliary integer for balancing metadata
//!
//! # Examples
//!
//! ```rust
//! use avlmap::tree::LinkedBinaryTree;
//!
//! let mut tree = LinkedBinaryTree::new();
//! let c = tree.add_root(Some(3)).unwrap();
//! let b = tree.add_left(c, Some(2)).unwrap();
//! let a = tree.add_left(b, Some(1)).unwrap();
//!
//! // A left-leaning chain is fixed by one rotation of the middle node.
//! let top = tree.restructure(a).unwrap();
//! assert_eq!(top, b);
//! assert_eq!(tree.root(), Some(b));
//!
//! let elements: Vec<&i32> = tree.inorder_elements().collect();
//! assert_eq!(elements, vec![&1, &2, &3]);
//! ```

mod linked;
mod restructure;

pub use linked::InOrder;
pub use linked::InOrderElements;
pub use linked::LinkedBinaryTree;
pub use linked::Position;

static_assertions::assert_impl_all!(Position: Copy, Send, Sync, std::hash::Hash);
static_assertions::assert_impl_all!(LinkedBinaryTree<String>: Send, Sync, Clone);
