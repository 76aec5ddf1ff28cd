//! # Ratings
//!
//! A sparse rating vector: item key → score.
//!
//! Entries are kept in key order. That makes iteration deterministic and lets
//! two vectors be intersected with a single merge walk, visiting shared keys
//! in the same order no matter which vector is on the left.

use std::cmp::Ordering;
use std::collections::btree_map::{self, BTreeMap};
use std::collections::HashMap;
use std::hash::Hash;
use std::iter::Peekable;

/// Sparse mapping from item key to rating
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Ratings<I: Ord> {
    entries: BTreeMap<I, f64>,
}

impl<I: Ord> Ratings<I> {
    /// Create an empty rating vector
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace a rating, builder style
    pub fn with(mut self, item: I, rating: f64) -> Self {
        self.entries.insert(item, rating);
        self
    }

    /// Add or replace a rating
    pub fn insert(&mut self, item: I, rating: f64) -> Option<f64> {
        self.entries.insert(item, rating)
    }

    /// Rating for an item, if rated
    pub fn get(&self, item: &I) -> Option<f64> {
        self.entries.get(item).copied()
    }

    /// Whether the item has been rated
    pub fn contains(&self, item: &I) -> bool {
        self.entries.contains_key(item)
    }

    /// Number of rated items
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been rated
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate (item, rating) in key order
    pub fn iter(&self) -> impl Iterator<Item = (&I, f64)> + '_ {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    /// Iterate rated item keys in order
    pub fn items(&self) -> impl Iterator<Item = &I> + '_ {
        self.entries.keys()
    }

    /// Aligned rating pairs for every key present in both vectors
    ///
    /// Yields `(self[k], other[k])` in ascending key order.
    pub fn shared<'a>(&'a self, other: &'a Ratings<I>) -> Shared<'a, I> {
        Shared {
            left: self.entries.iter().peekable(),
            right: other.entries.iter().peekable(),
        }
    }
}

impl<I: Ord> Default for Ratings<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Ord> FromIterator<(I, f64)> for Ratings<I> {
    fn from_iter<T: IntoIterator<Item = (I, f64)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<I: Ord> From<BTreeMap<I, f64>> for Ratings<I> {
    fn from(entries: BTreeMap<I, f64>) -> Self {
        Self { entries }
    }
}

impl<I: Ord + Hash> From<HashMap<I, f64>> for Ratings<I> {
    fn from(entries: HashMap<I, f64>) -> Self {
        entries.into_iter().collect()
    }
}

impl<I: Ord, const N: usize> From<[(I, f64); N]> for Ratings<I> {
    fn from(entries: [(I, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<I: Ord> IntoIterator for Ratings<I> {
    type Item = (I, f64);
    type IntoIter = btree_map::IntoIter<I, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Merge-walk over the keys two rating vectors have in common
pub struct Shared<'a, I: Ord> {
    left: Peekable<btree_map::Iter<'a, I, f64>>,
    right: Peekable<btree_map::Iter<'a, I, f64>>,
}

impl<'a, I: Ord> Iterator for Shared<'a, I> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let lk: &'a I = self.left.peek()?.0;
            let rk: &'a I = self.right.peek()?.0;

            match lk.cmp(rk) {
                Ordering::Less => {
                    self.left.next();
                }
                Ordering::Greater => {
                    self.right.next();
                }
                Ordering::Equal => {
                    let (_, x) = self.left.next()?;
                    let (_, y) = self.right.next()?;
                    return Some((*x, *y));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_insert_and_get() {
        let mut ratings = Ratings::new();
        assert!(ratings.is_empty());

        ratings.insert("1984", 5.0);
        assert_eq!(ratings.insert("1984", 4.0), Some(5.0));

        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings.get(&"1984"), Some(4.0));
        assert!(!ratings.contains(&"Moby-Dick"));
    }

    #[test]
    fn test_ratings_builder() {
        let ratings = Ratings::new().with("1984", 5.0).with("Dune", 2.0).with("1984", 3.0);

        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings.get(&"1984"), Some(3.0));
        assert_eq!(ratings.get(&"Dune"), Some(2.0));
    }

    #[test]
    fn test_ratings_iterate_in_key_order() {
        let ratings = Ratings::from([("c", 3.0), ("a", 1.0), ("b", 2.0)]);

        let keys: Vec<_> = ratings.items().copied().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_ratings_from_hash_map() {
        let mut map = HashMap::new();
        map.insert("x".to_string(), 1.5);
        map.insert("y".to_string(), 2.5);

        let ratings = Ratings::from(map);
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings.get(&"y".to_string()), Some(2.5));
    }

    #[test]
    fn test_shared_yields_aligned_pairs() {
        let a = Ratings::from([("a", 1.0), ("b", 2.0), ("d", 4.0)]);
        let b = Ratings::from([("b", 20.0), ("c", 30.0), ("d", 40.0)]);

        let pairs: Vec<_> = a.shared(&b).collect();
        assert_eq!(pairs, vec![(2.0, 20.0), (4.0, 40.0)]);

        let reversed: Vec<_> = b.shared(&a).collect();
        assert_eq!(reversed, vec![(20.0, 2.0), (40.0, 4.0)]);
    }

    #[test]
    fn test_shared_disjoint_is_empty() {
        let a = Ratings::from([("a", 1.0)]);
        let b = Ratings::from([("b", 1.0)]);
        assert_eq!(a.shared(&b).count(), 0);
        assert_eq!(a.shared(&Ratings::new()).count(), 0);
    }
}
