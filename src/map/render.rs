//! Text renderings of a map's tree shape, for diagnostics.

use std::collections::VecDeque;
use std::fmt;

use super::TreeMap;
use super::compare::Comparator;
use super::policy::BalancePolicy;
use crate::error::MapError;
use crate::tree::Position;

const SENTINEL_MARK: &str = "X";
const SENTINEL_OUTLINE: &str = "leaf";

impl<K, V, B, C> TreeMap<K, V, B, C>
where
    K: fmt::Display,
    V: fmt::Display,
    B: BalancePolicy,
    C: Comparator<K>,
{
    /// Renders the tree breadth-first, one line per level.
    ///
    /// Keys are separated by single spaces and sentinels appear as `X`, so
    /// every level of a sentinel-leaf tree is fully accounted for.
    ///
    /// # Errors
    ///
    /// Returns a [`MapError::Structure`] only if the tree is corrupted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::map::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// for key in [2, 1, 3] {
    ///     map.put(key, "").unwrap();
    /// }
    /// assert_eq!(map.render_levels().unwrap(), "2\n1 3\nX X X X\n");
    /// ```
    pub fn render_levels(&self) -> Result<String, MapError> {
        let mut rendered = String::new();
        let mut level: VecDeque<Position> = self.tree().root().into_iter().collect();
        while !level.is_empty() {
            let mut tokens = Vec::with_capacity(level.len());
            for _ in 0..level.len() {
                let Some(position) = level.pop_front() else {
                    break;
                };
                match self.tree().element(position)? {
                    Some(entry) => tokens.push(entry.key().to_string()),
                    None => tokens.push(SENTINEL_MARK.to_string()),
                }
                level.extend(self.tree().left(position)?);
                level.extend(self.tree().right(position)?);
            }
            rendered.push_str(&tokens.join(" "));
            rendered.push('\n');
        }
        Ok(rendered)
    }

    /// Renders the tree as a pre-order outline indented two spaces per level.
    ///
    /// Internal nodes print as `key: value`, sentinels as `leaf`.
    ///
    /// # Errors
    ///
    /// Returns a [`MapError::Structure`] only if the tree is corrupted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avlmap::map::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.put(1, "one").unwrap();
    /// assert_eq!(map.render_outline().unwrap(), "1: one\n  leaf\n  leaf\n");
    /// ```
    pub fn render_outline(&self) -> Result<String, MapError> {
        let mut rendered = String::new();
        let mut pending: Vec<(Position, usize)> =
            self.tree().root().map(|root| (root, 0)).into_iter().collect();
        while let Some((position, depth)) = pending.pop() {
            let indent = "  ".repeat(depth);
            let line = match self.tree().element(position)? {
                Some(entry) => format!("{indent}{}: {}\n", entry.key(), entry.value()),
                None => format!("{indent}{SENTINEL_OUTLINE}\n"),
            };
            rendered.push_str(&line);
            // Right first so the left subtree is printed first.
            pending.extend(self.tree().right(position)?.map(|child| (child, depth + 1)));
            pending.extend(self.tree().left(position)?.map(|child| (child, depth + 1)));
        }
        Ok(rendered)
    }
}
