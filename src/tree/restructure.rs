//! Rotation and tri-node restructuring over a [`LinkedBinaryTree`].
//!
//! These primitives re-shape a tree without changing the in-order sequence
//! of its positions. Balancing policies use them to repair local height
//! violations.
//!
//! ```text
//!           b                  a
//!          / \                / \
//!         a  t2     <=>     t0   b
//!        / \                    / \
//!       t0  t1                 t1  t2
//! ```

use tracing::trace;

use super::linked::{LinkedBinaryTree, Position};
use crate::error::{Side, StructureError};

impl<E> LinkedBinaryTree<E> {
    /// Returns the auxiliary balancing value stored at `position`.
    ///
    /// Freshly created nodes start at `0`.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    pub fn aux(&self, position: Position) -> Result<i32, StructureError> {
        let index = self.validate(position)?;
        Ok(self.slot(index)?.aux)
    }

    /// Stores an auxiliary balancing value at `position`.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    pub fn set_aux(&mut self, position: Position, value: i32) -> Result<(), StructureError> {
        let index = self.validate(position)?;
        self.slot_mut(index)?.aux = value;
        Ok(())
    }

    /// Makes `child` the `side` child of `parent` and points it back.
    fn relink(
        &mut self,
        parent: usize,
        child: Option<usize>,
        side: Side,
    ) -> Result<(), StructureError> {
        if let Some(child_index) = child {
            self.slot_mut(child_index)?.parent = Some(parent);
        }
        let parent_node = self.slot_mut(parent)?;
        match side {
            Side::Left => parent_node.left = child,
            Side::Right => parent_node.right = child,
        }
        Ok(())
    }

    /// Rotates `position` above its parent in O(1).
    ///
    /// The grandparent (if any) adopts `position`, the former parent becomes
    /// its child, and the middle subtree moves across.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::RotateRoot`] if `position` is the root, or
    /// another [`StructureError`] if it is foreign or stale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::tree::LinkedBinaryTree;
    ///
    /// let mut tree = LinkedBinaryTree::new();
    /// let b = tree.add_root(Some('b')).unwrap();
    /// let a = tree.add_left(b, Some('a')).unwrap();
    ///
    /// tree.rotate(a).unwrap();
    /// assert_eq!(tree.root(), Some(a));
    /// assert_eq!(tree.right(a).unwrap(), Some(b));
    /// ```
    pub fn rotate(&mut self, position: Position) -> Result<(), StructureError> {
        let x = self.validate(position)?;
        let y = self.slot(x)?.parent.ok_or(StructureError::RotateRoot)?;
        let z = self.slot(y)?.parent;

        match z {
            None => {
                self.set_root_index(Some(x));
                self.slot_mut(x)?.parent = None;
            }
            Some(grandparent) => {
                let side = if self.slot(grandparent)?.left == Some(y) {
                    Side::Left
                } else {
                    Side::Right
                };
                self.relink(grandparent, Some(x), side)?;
            }
        }

        if self.slot(y)?.left == Some(x) {
            let middle = self.slot(x)?.right;
            self.relink(y, middle, Side::Left)?;
            self.relink(x, Some(y), Side::Right)?;
        } else {
            let middle = self.slot(x)?.left;
            self.relink(y, middle, Side::Right)?;
            self.relink(x, Some(y), Side::Left)?;
        }

        trace!(node = x, former_parent = y, "rotated node above its parent");
        Ok(())
    }

    /// Restructures `position`, its parent and its grandparent so that the
    /// node holding the middle key of the three ends up on top.
    ///
    /// A single rotation handles matching alignments (zig-zig); a double
    /// rotation handles opposite alignments (zig-zag). Returns the position
    /// now at the top of the restructured span.
    ///
    /// ```text
    ///     z=a               z=c           z=a               z=c
    ///    /  \              /  \          /  \              /  \
    ///   t0  y=b           y=b  t3       t0   y=c          y=a  t3
    ///      /  \          /  \               /  \         /  \
    ///     t1  x=c       x=a  t2            x=b  t3      t0   x=b
    ///        /  \      /  \               /  \              /  \
    ///       t2  t3    t0  t1             t1  t2            t1  t2
    ///
    ///                           b
    ///                         /   \
    ///                       a       c
    ///                      / \     / \
    ///                     t0  t1  t2  t3
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::MissingGrandparent`] if `position` has no
    /// grandparent, or another [`StructureError`] if it is foreign or stale.
    pub fn restructure(&mut self, position: Position) -> Result<Position, StructureError> {
        let x = self.validate(position)?;
        let y = self.slot(x)?.parent.ok_or(StructureError::MissingGrandparent)?;
        let z = self.slot(y)?.parent.ok_or(StructureError::MissingGrandparent)?;

        let x_is_right = self.slot(y)?.right == Some(x);
        let y_is_right = self.slot(z)?.right == Some(y);

        if x_is_right == y_is_right {
            let top = self.position(y);
            self.rotate(top)?;
            trace!(top = y, "restructured with a single rotation");
            Ok(top)
        } else {
            self.rotate(position)?;
            self.rotate(position)?;
            trace!(top = x, "restructured with a double rotation");
            Ok(position)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
