//! # Ranking
//!
//! Scored keys and the one ordering every query result uses: descending by
//! score, equal scores broken by ascending key. The tie-break makes results
//! reproducible even though tables store items in hash order.

use std::cmp::Ordering;

/// A key with its score
///
/// For neighbor queries the key is an entity and the score its similarity
/// to the query; for recommendations the key is an item and the score its
/// aggregated weighted rating.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedPair<T> {
    /// The ranked key
    pub key: T,

    /// Higher ranks first
    pub score: f64,
}

impl<T> RankedPair<T> {
    /// Create a new pair
    pub fn new(key: T, score: f64) -> Self {
        Self { key, score }
    }
}

/// Result ordering: higher score first, then smaller key
pub fn compare<T: Ord>(a: &RankedPair<T>, b: &RankedPair<T>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.key.cmp(&b.key))
}

/// Sort pairs into result order
pub fn rank<T: Ord>(mut pairs: Vec<RankedPair<T>>) -> Vec<RankedPair<T>> {
    pairs.sort_by(compare);
    pairs
}
