//! # Memory Storage Adapter
//!
//! In-memory storage using HashMap.
//! Fast, but volatile (data lost on shutdown).
//!
//! Good for:
//! - Testing
//! - The default backend of every table
//! - Moderate entity counts (neighbor search scans everything anyway)

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use crate::core::RatingItem;
use crate::ports::Store;

/// In-memory storage adapter
pub struct MemoryStorage<K, I: Ord> {
    /// The stored items, by entity key
    items: HashMap<K, Arc<RatingItem<K, I>>>,
}

impl<K, I: Ord> MemoryStorage<K, I> {
    /// Create an empty memory storage
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<K, I: Ord> Default for MemoryStorage<K, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, I> Store<K, I> for MemoryStorage<K, I>
where
    K: Eq + Hash + Clone + Send + Sync,
    I: Ord + Send + Sync,
{
    fn put(&mut self, item: Arc<RatingItem<K, I>>) -> Option<Arc<RatingItem<K, I>>> {
        self.items.insert(item.key().clone(), item)
    }

    fn remove(&mut self, key: &K) -> Option<Arc<RatingItem<K, I>>> {
        self.items.remove(key)
    }

    fn get(&self, key: &K) -> Option<&Arc<RatingItem<K, I>>> {
        self.items.get(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Arc<RatingItem<K, I>>> + '_> {
        Box::new(self.items.values())
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
