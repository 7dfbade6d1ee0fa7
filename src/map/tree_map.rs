//! Ordered map over a sentinel-leaf binary search tree.
//!
//! Every entry lives in an *internal* node that always has exactly two
//! children; childless *sentinel* nodes mark the places where a new key
//! could be inserted. An empty map is a single sentinel root. This encoding
//! makes insertion and deletion uniform:
//!
//! - a new key promotes the sentinel reached by the search into an internal
//!   node with two fresh sentinel children
//! - a deletion excises a node together with one of its sentinel children and
//!   promotes the other child into its place
//!
//! Rebalancing is delegated to a [`BalancePolicy`].

use std::cmp::Ordering;

use smallvec::SmallVec;
use tracing::debug;

use super::compare::{Comparator, NaturalOrder};
use super::iter::{Entries, Keys, Values};
use super::policy::{BalancePolicy, Unbalanced};
use super::{Entry, Traced};
use crate::error::{MapError, Side, StructureError};
use crate::tree::{LinkedBinaryTree, Position};

// =============================================================================
// TreeMap Definition
// =============================================================================

/// An ordered map backed by a sentinel-leaf binary search tree.
///
/// `B` is the rebalancing policy and `C` the key ordering. With the default
/// [`Unbalanced`] policy the map is a plain binary search tree; use
/// [`AvlTreeMap`](super::AvlTreeMap) for guaranteed logarithmic height.
///
/// Every operation taking a key first checks that the comparator can order
/// the key (against itself) and fails with [`MapError::InvalidKey`]
/// otherwise, before the tree is touched.
///
/// # Time Complexity
///
/// With [`AvlBalance`](super::AvlBalance):
///
/// | Operation                         | Complexity   |
/// |-----------------------------------|--------------|
/// | `get`/`put`/`remove`              | O(log N)     |
/// | `first_entry`/`last_entry`        | O(log N)     |
/// | `ceiling_entry`/`floor_entry`     | O(log N)     |
/// | `lower_entry`/`higher_entry`      | O(log N)     |
/// | `sub_map`                         | O(log N + k) |
/// | `len`/`is_empty`                  | O(1)         |
///
/// # Examples
///
/// ```rust
/// use avlmap::map::AvlTreeMap;
///
/// let mut map = AvlTreeMap::new();
/// assert_eq!(map.put(20, "twenty").unwrap(), None);
/// assert_eq!(map.put(10, "ten").unwrap(), None);
/// assert_eq!(map.put(20, "TWENTY").unwrap(), Some("twenty"));
///
/// assert_eq!(map.get(&20).unwrap(), Some(&"TWENTY"));
/// assert_eq!(map.ceiling_entry(&15).unwrap(), Some((&20, &"TWENTY")));
/// assert_eq!(map.remove(&10).unwrap(), Some("ten"));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone)]
pub struct TreeMap<K, V, B = Unbalanced, C = NaturalOrder> {
    tree: LinkedBinaryTree<Entry<K, V>>,
    policy: B,
    comparator: C,
}

impl<K: Ord, V, B: BalancePolicy + Default> TreeMap<K, V, B, NaturalOrder> {
    /// Creates an empty map ordered by `K`'s natural ordering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::map::TreeMap;
    ///
    /// let map: TreeMap<i32, String> = TreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, B: BalancePolicy + Default, C: Comparator<K>> TreeMap<K, V, B, C> {
    /// Creates an empty map ordered by `comparator`.
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_policy(B::default(), comparator)
    }
}

impl<K, V, B: BalancePolicy, C: Comparator<K>> TreeMap<K, V, B, C> {
    /// Creates an empty map with an explicit policy instance and comparator.
    #[must_use]
    pub fn with_policy(policy: B, comparator: C) -> Self {
        Self {
            tree: LinkedBinaryTree::with_root(None),
            policy,
            comparator,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// Derived from the node count: a sentinel-leaf tree with `n` entries
    /// always has `2n + 1` nodes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len().saturating_sub(1) / 2
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the underlying tree, for inspection.
    #[inline]
    #[must_use]
    pub const fn tree(&self) -> &LinkedBinaryTree<Entry<K, V>> {
        &self.tree
    }

    /// Returns the comparator ordering the keys.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn root(&self) -> Result<Position, MapError> {
        Ok(self.tree.root().ok_or(StructureError::MissingRoot)?)
    }

    fn child(&self, position: Position, side: Side) -> Result<Position, MapError> {
        Ok(self
            .tree
            .child(position, side)?
            .ok_or(StructureError::MissingChild { side })?)
    }

    fn entry(&self, position: Position) -> Result<Option<&Entry<K, V>>, MapError> {
        Ok(self.tree.element(position)?)
    }

    fn is_sentinel(&self, position: Position) -> Result<bool, MapError> {
        Ok(self.entry(position)?.is_none())
    }

    fn pair(&self, position: Position) -> Result<Option<(&K, &V)>, MapError> {
        Ok(self.entry(position)?.map(Entry::as_pair))
    }

    fn check_key(&self, key: &K) -> Result<(), MapError> {
        if self.comparator.compare(key, key) == Some(Ordering::Equal) {
            Ok(())
        } else {
            debug!("rejected key that is not comparable under the map ordering");
            Err(MapError::InvalidKey)
        }
    }

    fn compare(&self, left: &K, right: &K) -> Result<Ordering, MapError> {
        self.comparator
            .compare(left, right)
            .ok_or(MapError::InvalidKey)
    }

    /// Guided search from the root.
    ///
    /// Returns the internal node holding `key`, or the sentinel where the
    /// search ended, together with the number of key comparisons made.
    fn tree_search(&self, key: &K) -> Result<(Position, usize), MapError> {
        let mut walk = self.root()?;
        let mut steps = 0;
        while let Some(entry) = self.entry(walk)? {
            steps += 1;
            walk = match self.compare(key, &entry.key)? {
                Ordering::Equal => break,
                Ordering::Less => self.child(walk, Side::Left)?,
                Ordering::Greater => self.child(walk, Side::Right)?,
            };
        }
        Ok((walk, steps))
    }

    /// Returns the internal node with the smallest key below `position`.
    /// `position` must be internal.
    fn tree_min(&self, position: Position) -> Result<Position, MapError> {
        self.tree_extreme(position, Side::Left)
    }

    /// Returns the internal node with the largest key below `position`.
    /// `position` must be internal.
    fn tree_max(&self, position: Position) -> Result<Position, MapError> {
        self.tree_extreme(position, Side::Right)
    }

    fn tree_extreme(&self, position: Position, side: Side) -> Result<Position, MapError> {
        let mut walk = position;
        loop {
            let next = self.child(walk, side)?;
            if self.is_sentinel(next)? {
                return Ok(walk);
            }
            walk = next;
        }
    }

    /// Walks upward from `position` and returns the first ancestor reached
    /// through its `side` child.
    fn ancestor_via(&self, position: Position, side: Side) -> Result<Option<(&K, &V)>, MapError> {
        let mut walk = position;
        while let Some(parent) = self.tree.parent(walk)? {
            if self.tree.child(parent, side)? == Some(walk) {
                return self.pair(parent);
            }
            walk = parent;
        }
        Ok(None)
    }

    fn expand_external(&mut self, position: Position, entry: Entry<K, V>) -> Result<(), MapError> {
        self.tree.set(position, Some(entry))?;
        self.tree.add_left(position, None)?;
        self.tree.add_right(position, None)?;
        Ok(())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Returns the value stored under `key`.
    ///
    /// Fires the policy's access hook on the node reached by the search,
    /// which is why this takes `&mut self`; use [`peek`](Self::peek) for a
    /// hook-free lookup.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key` cannot be ordered.
    pub fn get(&mut self, key: &K) -> Result<Option<&V>, MapError> {
        Ok(self.get_traced(key)?.value)
    }

    /// Like [`get`](Self::get), also reporting the number of key comparisons
    /// made by the search.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key` cannot be ordered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::map::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// for key in [2, 1, 3] {
    ///     map.put(key, ()).unwrap();
    /// }
    ///
    /// let traced = map.get_traced(&3).unwrap();
    /// assert_eq!(traced.value, Some(&()));
    /// assert_eq!(traced.steps, 2);
    /// ```
    pub fn get_traced(&mut self, key: &K) -> Result<Traced<Option<&V>>, MapError> {
        self.check_key(key)?;
        let (position, steps) = self.tree_search(key)?;
        self.policy.rebalance_access(&mut self.tree, position)?;
        let value = self.entry(position)?.map(|entry| &entry.value);
        Ok(Traced { value, steps })
    }

    /// Returns the value stored under `key` without firing any hook.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key` cannot be ordered.
    pub fn peek(&self, key: &K) -> Result<Option<&V>, MapError> {
        self.check_key(key)?;
        let (position, _) = self.tree_search(key)?;
        Ok(self.entry(position)?.map(|entry| &entry.value))
    }

    /// Returns `true` if the map contains `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key` cannot be ordered.
    pub fn contains_key(&self, key: &K) -> Result<bool, MapError> {
        Ok(self.peek(key)?.is_some())
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Associates `value` with `key`, returning the previous value if any.
    ///
    /// A new key expands the sentinel reached by the search and fires the
    /// insert hook. An existing key has its entry replaced wholesale and fires
    /// the access hook.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key` cannot be ordered; the map is
    /// left unchanged.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        Ok(self.put_traced(key, value)?.value)
    }

    /// Like [`put`](Self::put), also reporting the number of key comparisons
    /// made by the search.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key` cannot be ordered.
    pub fn put_traced(&mut self, key: K, value: V) -> Result<Traced<Option<V>>, MapError> {
        self.check_key(&key)?;
        let (position, steps) = self.tree_search(&key)?;
        let entry = Entry::new(key, value);

        let previous = if self.is_sentinel(position)? {
            self.expand_external(position, entry)?;
            self.policy.rebalance_insert(&mut self.tree, position)?;
            None
        } else {
            let replaced = self.tree.set(position, Some(entry))?;
            self.policy.rebalance_access(&mut self.tree, position)?;
            replaced.map(Entry::into_value)
        };
        Ok(Traced {
            value: previous,
            steps,
        })
    }

    /// Removes `key`, returning its value if it was present.
    ///
    /// An entry whose node has two internal children is replaced by its
    /// in-order predecessor, whose node is excised instead. Removing an
    /// absent key leaves the map unchanged and fires only the access hook.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key` cannot be ordered.
    pub fn remove(&mut self, key: &K) -> Result<Option<V>, MapError> {
        Ok(self.remove_traced(key)?.value)
    }

    /// Like [`remove`](Self::remove), also reporting the number of key
    /// comparisons made by the search.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key` cannot be ordered.
    pub fn remove_traced(&mut self, key: &K) -> Result<Traced<Option<V>>, MapError> {
        self.check_key(key)?;
        let (position, steps) = self.tree_search(key)?;

        if self.is_sentinel(position)? {
            self.policy.rebalance_access(&mut self.tree, position)?;
            return Ok(Traced { value: None, steps });
        }

        let mut target = position;
        let mut moved_out = None;
        let left = self.child(position, Side::Left)?;
        let right = self.child(position, Side::Right)?;
        if !self.is_sentinel(left)? && !self.is_sentinel(right)? {
            let predecessor = self.tree_max(left)?;
            let predecessor_entry = self.tree.set(predecessor, None)?;
            moved_out = self.tree.set(position, predecessor_entry)?;
            target = predecessor;
        }

        // `target` now has at least one sentinel child.
        let target_left = self.child(target, Side::Left)?;
        let leaf = if self.is_sentinel(target_left)? {
            target_left
        } else {
            self.child(target, Side::Right)?
        };
        let sibling = self
            .tree
            .sibling(leaf)?
            .ok_or(StructureError::MissingChild { side: Side::Right })?;
        self.tree.remove(leaf)?;
        let excised = self.tree.remove(target)?;
        self.policy.rebalance_delete(&mut self.tree, sibling)?;

        Ok(Traced {
            value: moved_out.or(excised).map(Entry::into_value),
            steps,
        })
    }

    // =========================================================================
    // Ordered Navigation
    // =========================================================================

    /// Returns the entry with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns a [`MapError::Structure`] only if the tree is corrupted.
    pub fn first_entry(&self) -> Result<Option<(&K, &V)>, MapError> {
        if self.is_empty() {
            return Ok(None);
        }
        let first = self.tree_min(self.root()?)?;
        self.pair(first)
    }

    /// Returns the entry with the largest key.
    ///
    /// # Errors
    ///
    /// Returns a [`MapError::Structure`] only if the tree is corrupted.
    pub fn last_entry(&self) -> Result<Option<(&K, &V)>, MapError> {
        if self.is_empty() {
            return Ok(None);
        }
        let last = self.tree_max(self.root()?)?;
        self.pair(last)
    }

    /// Returns the entry with the least key greater than or equal to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key` cannot be ordered.
    pub fn ceiling_entry(&self, key: &K) -> Result<Option<(&K, &V)>, MapError> {
        self.check_key(key)?;
        let (position, _) = self.tree_search(key)?;
        if let Some(pair) = self.pair(position)? {
            return Ok(Some(pair));
        }
        self.ancestor_via(position, Side::Left)
    }

    /// Returns the entry with the greatest key less than or equal to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key` cannot be ordered.
    pub fn floor_entry(&self, key: &K) -> Result<Option<(&K, &V)>, MapError> {
        self.check_key(key)?;
        let (position, _) = self.tree_search(key)?;
        if let Some(pair) = self.pair(position)? {
            return Ok(Some(pair));
        }
        self.ancestor_via(position, Side::Right)
    }

    /// Returns the entry with the greatest key strictly less than `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key` cannot be ordered.
    pub fn lower_entry(&self, key: &K) -> Result<Option<(&K, &V)>, MapError> {
        self.check_key(key)?;
        let (position, _) = self.tree_search(key)?;
        if !self.is_sentinel(position)? {
            let left = self.child(position, Side::Left)?;
            if !self.is_sentinel(left)? {
                let predecessor = self.tree_max(left)?;
                return self.pair(predecessor);
            }
        }
        self.ancestor_via(position, Side::Right)
    }

    /// Returns the entry with the least key strictly greater than `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if `key` cannot be ordered.
    pub fn higher_entry(&self, key: &K) -> Result<Option<(&K, &V)>, MapError> {
        self.check_key(key)?;
        let (position, _) = self.tree_search(key)?;
        if !self.is_sentinel(position)? {
            let right = self.child(position, Side::Right)?;
            if !self.is_sentinel(right)? {
                let successor = self.tree_min(right)?;
                return self.pair(successor);
            }
        }
        self.ancestor_via(position, Side::Left)
    }

    /// Returns all entries with keys in `[from, to)` in ascending order.
    ///
    /// Subtrees lying entirely outside the range are never visited. Returns an
    /// empty vector when `from` is not less than `to`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidKey`] if either bound cannot be ordered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::map::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// for key in [5, 15, 25, 35] {
    ///     map.put(key, key * 2).unwrap();
    /// }
    ///
    /// let range = map.sub_map(&10, &30).unwrap();
    /// assert_eq!(range, vec![(&15, &30), (&25, &50)]);
    /// assert!(map.sub_map(&30, &10).unwrap().is_empty());
    /// ```
    pub fn sub_map(&self, from: &K, to: &K) -> Result<Vec<(&K, &V)>, MapError> {
        self.check_key(from)?;
        self.check_key(to)?;
        let mut buffer = Vec::new();
        if self.compare(from, to)? != Ordering::Less {
            return Ok(buffer);
        }

        let mut pending: SmallVec<[Position; 32]> = SmallVec::new();
        let mut walk = Some(self.root()?);
        loop {
            while let Some(position) = walk {
                let Some(entry) = self.entry(position)? else {
                    break;
                };
                walk = if self.compare(&entry.key, from)? == Ordering::Less {
                    // Everything on the left is below the range too.
                    Some(self.child(position, Side::Right)?)
                } else {
                    pending.push(position);
                    Some(self.child(position, Side::Left)?)
                };
            }

            let Some(position) = pending.pop() else {
                break;
            };
            let Some(entry) = self.entry(position)? else {
                break;
            };
            if self.compare(&entry.key, to)? != Ordering::Less {
                break;
            }
            buffer.push(entry.as_pair());
            walk = Some(self.child(position, Side::Right)?);
        }
        Ok(buffer)
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns a lazy iterator over entries in ascending key order.
    #[must_use]
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries::new(self.tree.inorder_elements(), self.len())
    }

    /// Alias for [`entries`](Self::entries).
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Entries<'_, K, V> {
        self.entries()
    }

    /// Returns a lazy iterator over keys in ascending order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.entries())
    }

    /// Returns a lazy iterator over values in ascending key order.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.entries())
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Returns the number of internal levels of the tree (0 for an empty map).
    ///
    /// # Errors
    ///
    /// Returns a [`MapError::Structure`] only if the tree is corrupted.
    pub fn height(&self) -> Result<usize, MapError> {
        let mut deepest = 0;
        let mut pending: Vec<(Position, usize)> = vec![(self.root()?, 0)];
        while let Some((position, depth)) = pending.pop() {
            if self.is_sentinel(position)? {
                deepest = deepest.max(depth);
                continue;
            }
            pending.push((self.child(position, Side::Left)?, depth + 1));
            pending.push((self.child(position, Side::Right)?, depth + 1));
        }
        Ok(deepest)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{AvlBalance, AvlTreeMap, PartialOrder};
    use rstest::rstest;

    fn sample_map() -> AvlTreeMap<i32, String> {
        let mut map = AvlTreeMap::new();
        for key in [10, 20, 30] {
            map.put(key, format!("v{key}")).unwrap();
        }
        map
    }

    #[rstest]
    fn test_empty_map_is_single_sentinel() {
        let map: TreeMap<i32, i32> = TreeMap::new();
        assert_eq!(map.tree().len(), 1);
        assert_eq!(map.len(), 0);
        assert_eq!(map.height().unwrap(), 0);
    }

    #[rstest]
    fn test_put_creates_two_sentinels() {
        let mut map: TreeMap<i32, i32> = TreeMap::new();
        map.put(1, 1).unwrap();
        assert_eq!(map.tree().len(), 3);
        map.put(2, 2).unwrap();
        assert_eq!(map.tree().len(), 5);
        assert_eq!(map.len(), 2);
    }

    #[rstest]
    fn test_remove_with_two_internal_children_uses_predecessor() {
        let mut map = AvlTreeMap::new();
        for key in [20, 10, 30, 5, 15, 25, 35] {
            map.put(key, key).unwrap();
        }

        assert_eq!(map.remove(&20).unwrap(), Some(20));

        let root = map.tree().root().unwrap();
        assert_eq!(map.tree().element(root).unwrap().map(Entry::key), Some(&15));
        let keys: Vec<&i32> = map.keys().collect();
        assert_eq!(keys, vec![&5, &10, &15, &25, &30, &35]);
        assert_eq!(map.tree().len(), 2 * 6 + 1);
    }

    #[rstest]
    fn test_remove_last_entry_restores_sentinel_root() {
        let mut map = AvlTreeMap::new();
        map.put(1, "one").unwrap();

        assert_eq!(map.remove(&1).unwrap(), Some("one"));
        assert!(map.is_empty());
        assert_eq!(map.tree().len(), 1);
        let root = map.tree().root().unwrap();
        assert!(map.tree().is_external(root).unwrap());
    }

    #[rstest]
    #[case(10, 2)]
    #[case(15, 2)]
    #[case(20, 1)]
    #[case(35, 2)]
    fn test_traced_steps_count_comparisons(#[case] key: i32, #[case] expected_steps: usize) {
        let mut map = sample_map();
        assert_eq!(map.get_traced(&key).unwrap().steps, expected_steps);
    }

    #[rstest]
    fn test_put_traced_reports_previous_value() {
        let mut map = sample_map();
        let traced = map.put_traced(30, "new".to_string()).unwrap();
        assert_eq!(traced.value, Some("v30".to_string()));
        assert_eq!(traced.steps, 2);
    }

    #[rstest]
    fn test_remove_traced_on_missing_key() {
        let mut map = sample_map();
        let traced = map.remove_traced(&25).unwrap();
        assert_eq!(traced.value, None);
        assert_eq!(traced.steps, 2);
        assert_eq!(map.len(), 3);
    }

    #[rstest]
    fn test_invalid_key_is_rejected_before_mutation() {
        let mut map: TreeMap<f64, i32, AvlBalance, PartialOrder> =
            TreeMap::with_comparator(PartialOrder);
        map.put(1.0, 1).unwrap();

        assert_eq!(map.put(f64::NAN, 2), Err(MapError::InvalidKey));
        assert_eq!(map.get(&f64::NAN), Err(MapError::InvalidKey));
        assert_eq!(map.remove(&f64::NAN), Err(MapError::InvalidKey));
        assert_eq!(map.floor_entry(&f64::NAN), Err(MapError::InvalidKey));
        assert_eq!(map.sub_map(&0.0, &f64::NAN), Err(MapError::InvalidKey));
        assert_eq!(map.len(), 1);
        assert_eq!(map.tree().len(), 3);
    }

    #[rstest]
    fn test_navigation_on_empty_map() {
        let map: AvlTreeMap<i32, i32> = AvlTreeMap::new();
        assert_eq!(map.first_entry().unwrap(), None);
        assert_eq!(map.last_entry().unwrap(), None);
        assert_eq!(map.ceiling_entry(&1).unwrap(), None);
        assert_eq!(map.floor_entry(&1).unwrap(), None);
        assert_eq!(map.lower_entry(&1).unwrap(), None);
        assert_eq!(map.higher_entry(&1).unwrap(), None);
        assert!(map.sub_map(&0, &10).unwrap().is_empty());
    }

    #[rstest]
    fn test_lower_and_higher_on_exact_match_with_subtrees() {
        let mut map = AvlTreeMap::new();
        for key in [20, 10, 30, 5, 15, 25, 35] {
            map.put(key, ()).unwrap();
        }
        assert_eq!(map.lower_entry(&20).unwrap().map(|(key, _)| *key), Some(15));
        assert_eq!(map.higher_entry(&20).unwrap().map(|(key, _)| *key), Some(25));
        assert_eq!(map.lower_entry(&25).unwrap().map(|(key, _)| *key), Some(20));
        assert_eq!(map.higher_entry(&15).unwrap().map(|(key, _)| *key), Some(20));
    }
}
