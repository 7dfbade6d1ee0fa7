//! Key orderings used by [`TreeMap`](super::TreeMap).
//!
//! A [`Comparator`] may decline to order two keys by returning `None`. The
//! map treats such a key as invalid and rejects the operation before it
//! touches the tree.

use std::cmp::Ordering;
use std::fmt;

/// An ordering over keys of type `K`.
///
/// Returning `None` marks the pair as not comparable; a key that cannot be
/// compared with itself is rejected by every map operation.
///
/// # Examples
///
/// ```rust
/// use avlmap::map::{Comparator, NaturalOrder, PartialOrder};
/// use std::cmp::Ordering;
///
/// assert_eq!(NaturalOrder.compare(&1, &2), Some(Ordering::Less));
/// assert_eq!(PartialOrder.compare(&f64::NAN, &1.0), None);
/// ```
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, left: &K, right: &K) -> Option<Ordering>;
}

/// The natural total ordering of `K: Ord`. Never declines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Option<Ordering> {
        Some(left.cmp(right))
    }
}

/// The partial ordering of `K: PartialOrd`, e.g. floating-point keys.
///
/// Keys such as `NaN` that do not compare with themselves are invalid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PartialOrder;

impl<K: PartialOrd + ?Sized> Comparator<K> for PartialOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Option<Ordering> {
        left.partial_cmp(right)
    }
}

/// A total ordering supplied as a closure.
///
/// # Examples
///
/// ```rust
/// use avlmap::map::{AvlTreeMap, FnComparator, TreeMap};
///
/// let descending = FnComparator::new(|left: &i32, right: &i32| right.cmp(left));
/// let mut map: AvlTreeMap<i32, &str, _> = TreeMap::with_comparator(descending);
/// map.put(1, "one").unwrap();
/// map.put(2, "two").unwrap();
///
/// let keys: Vec<&i32> = map.keys().collect();
/// assert_eq!(keys, vec![&2, &1]);
/// ```
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    function: F,
}

impl<F> FnComparator<F> {
    /// Wraps an ordering function.
    #[must_use]
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<K: ?Sized, F> Comparator<K> for FnComparator<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Option<Ordering> {
        Some((self.function)(left, right))
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FnComparator")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn test_natural_order(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(NaturalOrder.compare(&left, &right), Some(expected));
    }

    #[rstest]
    fn test_natural_order_on_unsized_keys() {
        assert_eq!(NaturalOrder.compare("apple", "banana"), Some(Ordering::Less));
    }

    #[rstest]
    fn test_partial_order_declines_nan() {
        assert_eq!(PartialOrder.compare(&1.0, &2.0), Some(Ordering::Less));
        assert_eq!(PartialOrder.compare(&f64::NAN, &f64::NAN), None);
    }

    #[rstest]
    fn test_fn_comparator_uses_closure() {
        let by_length = FnComparator::new(|left: &&str, right: &&str| left.len().cmp(&right.len()));
        assert_eq!(by_length.compare(&"ccc", &"a"), Some(Ordering::Greater));
        assert_eq!(format!("{by_length:?}"), "FnComparator");
    }
}
