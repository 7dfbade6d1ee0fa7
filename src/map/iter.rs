//! Lazy iterators over a [`TreeMap`](super::TreeMap).
//!
//! All three walk the tree in order with an explicit stack, skipping
//! sentinels, and know their exact remaining length.

use std::iter::FusedIterator;

use super::Entry;
use crate::tree::InOrderElements;

// =============================================================================
// Entries
// =============================================================================

/// An iterator over key-value pairs in ascending key order.
#[derive(Debug)]
pub struct Entries<'a, K, V> {
    elements: InOrderElements<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Entries<'a, K, V> {
    pub(super) const fn new(elements: InOrderElements<'a, Entry<K, V>>, remaining: usize) -> Self {
        Self {
            elements,
            remaining,
        }
    }
}

impl<K, V> Clone for Entries<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.elements.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(entry.as_pair())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Entries<'_, K, V> {}

// =============================================================================
// Keys and Values
// =============================================================================

/// An iterator over keys in ascending order.
#[derive(Debug)]
pub struct Keys<'a, K, V> {
    entries: Entries<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(super) const fn new(entries: Entries<'a, K, V>) -> Self {
        Self { entries }
    }
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over values in ascending key order.
#[derive(Debug)]
pub struct Values<'a, K, V> {
    entries: Entries<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(super) const fn new(entries: Entries<'a, K, V>) -> Self {
        Self { entries }
    }
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

#[cfg(test)]
mod tests {
    use crate::map::AvlTreeMap;
    use rstest::rstest;

    #[rstest]
    fn test_entries_are_sorted_and_exact_size() {
        let mut map = AvlTreeMap::new();
        for key in [3, 1, 2] {
            map.put(key, key * 10).unwrap();
        }

        let mut entries = map.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries.next(), Some((&1, &10)));
        assert_eq!(entries.len(), 2);

        let rest: Vec<(&i32, &i32)> = entries.clone().collect();
        assert_eq!(rest, vec![(&2, &20), (&3, &30)]);
        assert_eq!(entries.count(), 2);
    }

    #[rstest]
    fn test_keys_and_values() {
        let mut map = AvlTreeMap::new();
        map.put("b", 2).unwrap();
        map.put("a", 1).unwrap();

        assert_eq!(map.keys().collect::<Vec<_>>(), vec![&"a", &"b"]);
        assert_eq!(map.values().collect::<Vec<_>>(), vec![&1, &2]);
        assert_eq!(map.values().len(), 2);
    }

    #[rstest]
    fn test_iterators_on_empty_map() {
        let map: AvlTreeMap<i32, i32> = AvlTreeMap::new();
        assert_eq!(map.entries().next(), None);
        assert_eq!(map.keys().len(), 0);
    }
}
