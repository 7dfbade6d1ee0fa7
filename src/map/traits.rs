use std::fmt;

use tracing::error;

use super::compare::{Comparator, NaturalOrder};
use super::iter::Entries;
use super::policy::BalancePolicy;
use super::TreeMap;

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K: Ord, V, B: BalancePolicy + Default> Default for TreeMap<K, V, B, NaturalOrder> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Collects pairs into a map; a later duplicate key replaces the earlier value.
impl<K: Ord, V, B: BalancePolicy + Default> FromIterator<(K, V)>
    for TreeMap<K, V, B, NaturalOrder>
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, B: BalancePolicy, C: Comparator<K>> Extend<(K, V)> for TreeMap<K, V, B, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(cause) = self.put(key, value) {
                error!(%cause, "dropped entry while extending map");
            }
        }
    }
}

impl<'a, K, V, B: BalancePolicy, C: Comparator<K>> IntoIterator for &'a TreeMap<K, V, B, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Entries<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Two maps are equal when they hold equal entries in the same order,
/// regardless of tree shape.
impl<K, V, B, C> PartialEq for TreeMap<K, V, B, C>
where
    K: PartialEq,
    V: PartialEq,
    B: BalancePolicy,
    C: Comparator<K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries().eq(other.entries())
    }
}

impl<K, V, B, C> Eq for TreeMap<K, V, B, C>
where
    K: Eq,
    V: Eq,
    B: BalancePolicy,
    C: Comparator<K>,
{
}

impl<K, V, B, C> fmt::Debug for TreeMap<K, V, B, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    B: BalancePolicy,
    C: Comparator<K>,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries()).finish()
    }
}

impl<K, V, B, C> fmt::Display for TreeMap<K, V, B, C>
where
    K: fmt::Display,
    V: fmt::Display,
    B: BalancePolicy,
    C: Comparator<K>,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, B, C> serde::Serialize for TreeMap<K, V, B, C>
where
    K: serde::Serialize,
    V: serde::Serialize,
    B: BalancePolicy,
    C: Comparator<K>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct TreeMapVisitor<K, V, B, C> {
    marker: std::marker::PhantomData<fn() -> TreeMap<K, V, B, C>>,
}

#[cfg(feature = "serde")]
impl<K, V, B, C> TreeMapVisitor<K, V, B, C> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, B, C> serde::de::Visitor<'de> for TreeMapVisitor<K, V, B, C>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    B: BalancePolicy + Default,
    C: Comparator<K> + Default,
{
    type Value = TreeMap<K, V, B, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = TreeMap::with_comparator(C::default());
        while let Some((key, value)) = access.next_entry()? {
            map.put(key, value)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, B, C> serde::Deserialize<'de> for TreeMap<K, V, B, C>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    B: BalancePolicy + Default,
    C: Comparator<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(TreeMapVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
