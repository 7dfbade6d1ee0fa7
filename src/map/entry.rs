//! Values stored in and returned by [`TreeMap`](super::TreeMap).

/// A key-value pair held by an internal node of the map's tree.
///
/// Entries are immutable once stored; replacing the value of an existing key
/// swaps in a whole new entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
    pub(super) key: K,
    pub(super) value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry.
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns borrowed key and value.
    #[inline]
    #[must_use]
    pub const fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Consumes the entry, returning its key and value.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Consumes the entry, returning its value.
    #[inline]
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// The result of a map operation together with the number of key comparisons
/// its search performed.
///
/// A lookup that matches the root reports one step; a lookup on an empty map
/// reports zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Traced<T> {
    /// The operation's ordinary result.
    pub value: T,
    /// Key comparisons made while descending from the root.
    pub steps: usize,
}

impl<T> Traced<T> {
    /// Transforms the result, keeping the step count.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, function: F) -> Traced<U> {
        Traced {
            value: function(self.value),
            steps: self.steps,
        }
    }
}
