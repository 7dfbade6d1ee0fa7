//! Arena-backed linked binary tree.
//!
//! This module provides [`LinkedBinaryTree`], a general-purpose binary tree
//! whose nodes live in a single arena and refer to each other by index.
//!
//! # Overview
//!
//! - O(1) navigation (parent, left, right, sibling)
//! - O(1) structural edits (add root, attach child, replace element, excise)
//! - O(N) lazy in-order traversal
//!
//! Every node may or may not hold an element. Parent and child links are
//! arena indices, so no node is shared and no reference cycles exist.
//! Removed slots are recycled through a free list. Each slot carries a
//! generation that is bumped on removal, so a position taken before the
//! removal never resolves to the node that later reuses the slot.
//!
//! # Examples
//!
//! ```rust
//! use avlmap::tree::LinkedBinaryTree;
//!
//! let mut tree = LinkedBinaryTree::new();
//! let root = tree.add_root(Some(2)).unwrap();
//! tree.add_left(root, Some(1)).unwrap();
//! tree.add_right(root, Some(3)).unwrap();
//!
//! let elements: Vec<&i32> = tree.inorder_elements().collect();
//! assert_eq!(elements, vec![&1, &2, &3]);
//! ```

use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;

use crate::error::{Side, StructureError};

// =============================================================================
// Position Definition
// =============================================================================

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a tree instance, used to reject positions from other trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct TreeId(u64);

impl TreeId {
    fn fresh() -> Self {
        Self(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A handle to a node of a [`LinkedBinaryTree`].
///
/// Positions are cheap to copy and remain meaningful only until the next
/// structural mutation of the tree that produced them. Passing a position to
/// another tree fails with [`StructureError::ForeignPosition`]; passing one
/// whose node has been removed fails with [`StructureError::StalePosition`],
/// even after the slot has been handed to a new node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    tree: TreeId,
    index: usize,
    generation: u32,
}

impl Position {
    /// Returns the arena index of the node.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// Arena slot contents.
#[derive(Clone, Debug)]
pub(super) struct Node<E> {
    pub(super) element: Option<E>,
    pub(super) parent: Option<usize>,
    pub(super) left: Option<usize>,
    pub(super) right: Option<usize>,
    pub(super) aux: i32,
}

impl<E> Node<E> {
    const fn new(element: Option<E>, parent: Option<usize>) -> Self {
        Self {
            element,
            parent,
            left: None,
            right: None,
            aux: 0,
        }
    }

    const fn child(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    const fn child_count(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }
}

// =============================================================================
// LinkedBinaryTree Definition
// =============================================================================

/// A binary tree of positions stored in a node arena.
///
/// Each node optionally holds an element of type `E` and carries an integer
/// auxiliary field reserved for balancing metadata (see
/// [`aux`](Self::aux)).
///
/// # Time Complexity
///
/// | Operation                     | Complexity |
/// |-------------------------------|------------|
/// | `parent`/`left`/`right`       | O(1)       |
/// | `sibling`                     | O(1)       |
/// | `add_root`/`add_left`/`add_right` | O(1) amortized |
/// | `set`/`remove`                | O(1)       |
/// | `rotate`/`restructure`        | O(1)       |
/// | `inorder`                     | O(N) total |
///
/// # Examples
///
/// ```rust
/// use avlmap::tree::LinkedBinaryTree;
///
/// let mut tree = LinkedBinaryTree::new();
/// let root = tree.add_root(Some("root")).unwrap();
/// let left = tree.add_left(root, Some("left")).unwrap();
///
/// assert_eq!(tree.parent(left).unwrap(), Some(root));
/// assert_eq!(tree.element(left).unwrap(), Some(&"left"));
/// assert!(tree.is_root(root).unwrap());
/// ```
#[derive(Debug)]
pub struct LinkedBinaryTree<E> {
    id: TreeId,
    slots: Vec<Option<Node<E>>>,
    generations: Vec<u32>,
    free: Vec<usize>,
    root: Option<usize>,
    size: usize,
}

impl<E> LinkedBinaryTree<E> {
    /// Creates a new, structurally empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: TreeId::fresh(),
            slots: Vec::new(),
            generations: Vec::new(),
            free: Vec::new(),
            root: None,
            size: 0,
        }
    }

    /// Creates a tree holding a single root node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::tree::LinkedBinaryTree;
    ///
    /// let tree: LinkedBinaryTree<i32> = LinkedBinaryTree::with_root(None);
    /// let root = tree.root().unwrap();
    /// assert!(tree.is_external(root).unwrap());
    /// assert_eq!(tree.element(root).unwrap(), None);
    /// ```
    #[must_use]
    pub fn with_root(element: Option<E>) -> Self {
        let mut tree = Self::new();
        let index = tree.allocate(Node::new(element, None));
        tree.root = Some(index);
        tree
    }

    /// Returns the number of nodes in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree has no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the root position, or `None` for an empty tree.
    #[must_use]
    pub fn root(&self) -> Option<Position> {
        self.root.map(|index| self.position(index))
    }

    pub(super) fn position(&self, index: usize) -> Position {
        Position {
            tree: self.id,
            index,
            generation: self.generations.get(index).copied().unwrap_or_default(),
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    pub(super) fn validate(&self, position: Position) -> Result<usize, StructureError> {
        if position.tree != self.id {
            return Err(StructureError::ForeignPosition);
        }
        let index = position.index;
        if self.generations.get(index) != Some(&position.generation) {
            return Err(StructureError::StalePosition { index });
        }
        self.slot(index)?;
        Ok(index)
    }

    pub(super) fn slot(&self, index: usize) -> Result<&Node<E>, StructureError> {
        self.slots
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(StructureError::StalePosition { index })
    }

    pub(super) fn slot_mut(&mut self, index: usize) -> Result<&mut Node<E>, StructureError> {
        self.slots
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(StructureError::StalePosition { index })
    }

    fn node(&self, position: Position) -> Result<&Node<E>, StructureError> {
        let index = self.validate(position)?;
        self.slot(index)
    }

    pub(super) fn set_root_index(&mut self, index: Option<usize>) {
        self.root = index;
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Returns the parent of `position`, or `None` for the root.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    pub fn parent(&self, position: Position) -> Result<Option<Position>, StructureError> {
        Ok(self.node(position)?.parent.map(|index| self.position(index)))
    }

    /// Returns the left child of `position`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    pub fn left(&self, position: Position) -> Result<Option<Position>, StructureError> {
        Ok(self.node(position)?.left.map(|index| self.position(index)))
    }

    /// Returns the right child of `position`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    pub fn right(&self, position: Position) -> Result<Option<Position>, StructureError> {
        Ok(self.node(position)?.right.map(|index| self.position(index)))
    }

    /// Returns the other child of `position`'s parent, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::tree::LinkedBinaryTree;
    ///
    /// let mut tree = LinkedBinaryTree::new();
    /// let root = tree.add_root(Some(0)).unwrap();
    /// let left = tree.add_left(root, Some(1)).unwrap();
    /// let right = tree.add_right(root, Some(2)).unwrap();
    ///
    /// assert_eq!(tree.sibling(left).unwrap(), Some(right));
    /// assert_eq!(tree.sibling(root).unwrap(), None);
    /// ```
    pub fn sibling(&self, position: Position) -> Result<Option<Position>, StructureError> {
        let index = self.validate(position)?;
        let Some(parent) = self.slot(index)?.parent else {
            return Ok(None);
        };
        let parent_node = self.slot(parent)?;
        let sibling = if parent_node.left == Some(index) {
            parent_node.right
        } else {
            parent_node.left
        };
        Ok(sibling.map(|sibling_index| self.position(sibling_index)))
    }

    /// Returns the child of `position` on the given side.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    pub fn child(&self, position: Position, side: Side) -> Result<Option<Position>, StructureError> {
        Ok(self
            .node(position)?
            .child(side)
            .map(|index| self.position(index)))
    }

    // =========================================================================
    // Accessors and Predicates
    // =========================================================================

    /// Returns the element stored at `position`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    pub fn element(&self, position: Position) -> Result<Option<&E>, StructureError> {
        Ok(self.node(position)?.element.as_ref())
    }

    /// Returns the number of children of `position` (0, 1, or 2).
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    pub fn num_children(&self, position: Position) -> Result<usize, StructureError> {
        Ok(self.node(position)?.child_count())
    }

    /// Returns `true` if `position` has at least one child.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    pub fn is_internal(&self, position: Position) -> Result<bool, StructureError> {
        Ok(self.num_children(position)? > 0)
    }

    /// Returns `true` if `position` has no children.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    pub fn is_external(&self, position: Position) -> Result<bool, StructureError> {
        Ok(self.num_children(position)? == 0)
    }

    /// Returns `true` if `position` is the root.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    pub fn is_root(&self, position: Position) -> Result<bool, StructureError> {
        Ok(self.node(position)?.parent.is_none())
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    fn allocate(&mut self, node: Node<E>) -> usize {
        self.size += 1;
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(node);
            index
        } else {
            self.slots.push(Some(node));
            self.generations.push(0);
            self.slots.len() - 1
        }
    }

    /// Places an element at the root of an empty tree.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::RootExists`] if the tree already has a root.
    pub fn add_root(&mut self, element: Option<E>) -> Result<Position, StructureError> {
        if self.root.is_some() {
            return Err(StructureError::RootExists);
        }
        let index = self.allocate(Node::new(element, None));
        self.root = Some(index);
        Ok(self.position(index))
    }

    /// Attaches a new left child holding `element` to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::ChildExists`] if `position` already has a left
    /// child, or another [`StructureError`] if `position` is foreign or stale.
    pub fn add_left(
        &mut self,
        position: Position,
        element: Option<E>,
    ) -> Result<Position, StructureError> {
        self.add_child(position, element, Side::Left)
    }

    /// Attaches a new right child holding `element` to `position`.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::ChildExists`] if `position` already has a right
    /// child, or another [`StructureError`] if `position` is foreign or stale.
    pub fn add_right(
        &mut self,
        position: Position,
        element: Option<E>,
    ) -> Result<Position, StructureError> {
        self.add_child(position, element, Side::Right)
    }

    fn add_child(
        &mut self,
        position: Position,
        element: Option<E>,
        side: Side,
    ) -> Result<Position, StructureError> {
        let parent = self.validate(position)?;
        if self.slot(parent)?.child(side).is_some() {
            return Err(StructureError::ChildExists { side });
        }
        let child = self.allocate(Node::new(element, Some(parent)));
        let parent_node = self.slot_mut(parent)?;
        match side {
            Side::Left => parent_node.left = Some(child),
            Side::Right => parent_node.right = Some(child),
        }
        Ok(self.position(child))
    }

    /// Replaces the element at `position`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`StructureError`] if `position` is foreign or stale.
    pub fn set(
        &mut self,
        position: Position,
        element: Option<E>,
    ) -> Result<Option<E>, StructureError> {
        let index = self.validate(position)?;
        Ok(mem::replace(&mut self.slot_mut(index)?.element, element))
    }

    /// Excises `position`, promoting its only child (if any) into its place.
    ///
    /// Removing a childless root leaves the tree empty. Returns the element
    /// that was stored at the removed position.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::TwoChildren`] if `position` has two children,
    /// or another [`StructureError`] if `position` is foreign or stale.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::tree::LinkedBinaryTree;
    ///
    /// let mut tree = LinkedBinaryTree::new();
    /// let root = tree.add_root(Some(1)).unwrap();
    /// let child = tree.add_left(root, Some(2)).unwrap();
    ///
    /// assert_eq!(tree.remove(root).unwrap(), Some(1));
    /// assert_eq!(tree.root(), Some(child));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn remove(&mut self, position: Position) -> Result<Option<E>, StructureError> {
        let index = self.validate(position)?;
        let (parent, left, right) = {
            let node = self.slot(index)?;
            (node.parent, node.left, node.right)
        };
        if left.is_some() && right.is_some() {
            return Err(StructureError::TwoChildren);
        }
        let child = left.or(right);
        if let Some(child_index) = child {
            self.slot_mut(child_index)?.parent = parent;
        }
        match parent {
            Some(parent_index) => {
                let parent_node = self.slot_mut(parent_index)?;
                if parent_node.left == Some(index) {
                    parent_node.left = child;
                } else {
                    parent_node.right = child;
                }
            }
            None => self.root = child,
        }
        let removed = self.slots[index].take();
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.free.push(index);
        self.size -= 1;
        Ok(removed.and_then(|node| node.element))
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Returns a lazy in-order iterator over all positions.
    ///
    /// The iterator is finite and can be restarted by calling `inorder` again
    /// (or by cloning it before advancing).
    #[must_use]
    pub fn inorder(&self) -> InOrder<'_, E> {
        InOrder::new(self)
    }

    /// Returns a lazy in-order iterator over the elements of nodes that hold
    /// one, skipping empty nodes.
    #[must_use]
    pub fn inorder_elements(&self) -> InOrderElements<'_, E> {
        InOrderElements {
            positions: self.inorder(),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// Lazy in-order iterator over the positions of a [`LinkedBinaryTree`].
#[derive(Debug)]
pub struct InOrder<'a, E> {
    tree: &'a LinkedBinaryTree<E>,
    stack: SmallVec<[usize; 32]>,
}

impl<E> Clone for InOrder<'_, E> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}

impl<'a, E> InOrder<'a, E> {
    fn new(tree: &'a LinkedBinaryTree<E>) -> Self {
        let mut iterator = Self {
            tree,
            stack: SmallVec::new(),
        };
        iterator.push_left_spine(tree.root);
        iterator
    }

    fn push_left_spine(&mut self, mut current: Option<usize>) {
        while let Some(index) = current {
            self.stack.push(index);
            current = self.tree.slot(index).ok().and_then(|node| node.left);
        }
    }

    fn next_index(&mut self) -> Option<usize> {
        let index = self.stack.pop()?;
        let right = self.tree.slot(index).ok().and_then(|node| node.right);
        self.push_left_spine(right);
        Some(index)
    }
}

impl<E> Iterator for InOrder<'_, E> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_index().map(|index| self.tree.position(index))
    }
}

/// Lazy in-order iterator over the stored elements of a [`LinkedBinaryTree`].
#[derive(Debug)]
pub struct InOrderElements<'a, E> {
    positions: InOrder<'a, E>,
}

impl<E> Clone for InOrderElements<'_, E> {
    fn clone(&self) -> Self {
        Self {
            positions: self.positions.clone(),
        }
    }
}

impl<'a, E> Iterator for InOrderElements<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.positions.tree;
        loop {
            let index = self.positions.next_index()?;
            if let Some(element) = tree.slot(index).ok().and_then(|node| node.element.as_ref()) {
                return Some(element);
            }
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E> Default for LinkedBinaryTree<E> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// A clone is a distinct tree: positions of the original are foreign to it.
impl<E: Clone> Clone for LinkedBinaryTree<E> {
    fn clone(&self) -> Self {
        Self {
            id: TreeId::fresh(),
            slots: self.slots.clone(),
            generations: self.generations.clone(),
            free: self.free.clone(),
            root: self.root,
            size: self.size,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
