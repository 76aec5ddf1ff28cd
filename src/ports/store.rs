//! # Store Port
//!
//! Where a table keeps its items.
//!
//! A store is plain single-threaded storage. The owning table wraps it in
//! its lock, so implementations never synchronize on their own.

use std::sync::Arc;

use crate::core::RatingItem;

/// Trait for item storage backends
pub trait Store<K, I: Ord>: Send + Sync {
    /// Insert an item under its own key, returning whatever it replaced
    fn put(&mut self, item: Arc<RatingItem<K, I>>) -> Option<Arc<RatingItem<K, I>>>;

    /// Remove an item by key
    fn remove(&mut self, key: &K) -> Option<Arc<RatingItem<K, I>>>;

    /// Get an item by key
    fn get(&self, key: &K) -> Option<&Arc<RatingItem<K, I>>>;

    /// Check if a key is stored
    fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Number of stored items
    fn len(&self) -> usize;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all stored items
    fn iter(&self) -> Box<dyn Iterator<Item = &Arc<RatingItem<K, I>>> + '_>;

    /// Remove every item
    fn clear(&mut self);
}
