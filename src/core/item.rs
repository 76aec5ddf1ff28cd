//! # Rating Item
//!
//! One entity and everything it has rated.

use super::Ratings;

/// An entity key together with its rating vector
///
/// Immutable once built. Replacing an entity's ratings means building a new
/// item and adding it under the same key.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingItem<K, I: Ord> {
    key: K,
    ratings: Ratings<I>,
}

impl<K, I: Ord> RatingItem<K, I> {
    /// Create a new item
    pub fn new(key: K, ratings: impl Into<Ratings<I>>) -> Self {
        Self {
            key,
            ratings: ratings.into(),
        }
    }

    /// The entity key
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The entity's ratings
    pub fn ratings(&self) -> &Ratings<I> {
        &self.ratings
    }

    /// Split into key and ratings
    pub fn into_parts(self) -> (K, Ratings<I>) {
        (self.key, self.ratings)
    }
}
