//! # Table
//!
//! A named, thread-safe collection of rating items, plus the two queries
//! built on it: neighbor search and recommendation.
//!
//! ## Locking
//!
//! One `RwLock` guards the store, the hooks and the log sink. Reads share
//! it, writes take it exclusively. Hooks are cloned out while the lock is
//! held and called after the guard is dropped, so a hook can call back into
//! the table without deadlocking. The price is that a hook may observe
//! state that changed since it was triggered.
//!
//! Neighbor search holds the read lock for the whole scan. Sorting and
//! recommendation aggregation run after it is released.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::adapters::storage::MemoryStorage;
use crate::core::config::TableConfig;
use crate::core::ranking::{self, RankedPair};
use crate::core::similarity;
use crate::core::{RatingItem, Ratings};
use crate::ports::{DataLoader, ItemCallback, LogSink, Store, TableError, TableResult};

/// Mutable table state, all behind one lock
struct Inner<K, I: Ord> {
    /// Storage backend
    storage: Box<dyn Store<K, I>>,

    /// Called on lookup miss
    loader: Option<DataLoader<K, I>>,

    /// Called after an item was added
    on_added: Option<ItemCallback<K, I>>,

    /// Called before an item is deleted
    on_about_to_delete: Option<ItemCallback<K, I>>,

    /// Informational messages
    logger: Option<Arc<dyn LogSink>>,
}

/// A named collection of rating vectors
///
/// `K` keys entities (e.g. users), `I` keys the things they rate
/// (e.g. books). Both default to the same type.
pub struct Table<K, I: Ord = K> {
    /// The table's name
    name: String,

    /// Configuration
    config: TableConfig,

    /// Items and hooks
    inner: RwLock<Inner<K, I>>,
}

impl<K, I> Table<K, I>
where
    K: Eq + Hash + Ord + Clone + fmt::Debug + Send + Sync + 'static,
    I: Ord + Clone + Send + Sync + 'static,
{
    /// Create an empty table with default config
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, TableConfig::default())
    }

    /// Create an empty table backed by memory storage
    pub fn with_config(name: impl Into<String>, config: TableConfig) -> Self {
        Self::with_storage(name, config, Box::new(MemoryStorage::new()))
    }

    /// Create with a custom storage backend
    pub fn with_storage(
        name: impl Into<String>,
        config: TableConfig,
        storage: Box<dyn Store<K, I>>,
    ) -> Self {
        Self {
            name: name.into(),
            config,
            inner: RwLock::new(Inner {
                storage,
                loader: None,
                on_added: None,
                on_about_to_delete: None,
                logger: None,
            }),
        }
    }

    /// The table's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the configuration
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Number of stored items
    pub fn count(&self) -> usize {
        self.inner.read().storage.len()
    }

    /// Snapshot of all stored keys, in key order
    pub fn keys(&self) -> Vec<K> {
        let mut keys: Vec<K> = self
            .inner
            .read()
            .storage
            .iter()
            .map(|item| item.key().clone())
            .collect();
        keys.sort();
        keys
    }

    // ========================================================================
    // HOOKS
    // ========================================================================

    /// Set the loader consulted when `value` misses
    pub fn set_data_loader<F>(&self, loader: F)
    where
        F: Fn(&K) -> Option<RatingItem<K, I>> + Send + Sync + 'static,
    {
        self.inner.write().loader = Some(Arc::new(loader));
    }

    /// Set the callback fired after every `add`
    pub fn set_added_callback<F>(&self, callback: F)
    where
        F: Fn(&RatingItem<K, I>) + Send + Sync + 'static,
    {
        self.inner.write().on_added = Some(Arc::new(callback));
    }

    /// Set the callback fired before an item is deleted
    pub fn set_about_to_delete_callback<F>(&self, callback: F)
    where
        F: Fn(&RatingItem<K, I>) + Send + Sync + 'static,
    {
        self.inner.write().on_about_to_delete = Some(Arc::new(callback));
    }

    /// Set the sink for informational messages
    pub fn set_logger<L: LogSink + 'static>(&self, logger: L) {
        self.inner.write().logger = Some(Arc::new(logger));
    }

    fn log(&self, args: fmt::Arguments<'_>) {
        let logger = self.inner.read().logger.clone();
        if let Some(logger) = logger {
            logger.log(args);
        }
    }

    fn not_found(&self, key: &K) -> TableError {
        TableError::NotFound {
            table: self.name.clone(),
            key: format!("{key:?}"),
        }
    }

    // ========================================================================
    // ITEM OPERATIONS
    // ========================================================================

    /// Add an item, replacing any previous ratings under the same key
    ///
    /// The item is visible to readers before the added-callback runs.
    pub fn add(&self, key: K, ratings: impl Into<Ratings<I>>) -> Arc<RatingItem<K, I>> {
        let item = Arc::new(RatingItem::new(key, ratings));

        let on_added = {
            let mut inner = self.inner.write();
            inner.storage.put(Arc::clone(&item));
            inner.on_added.clone()
        };

        if let Some(callback) = on_added {
            callback(item.as_ref());
        }

        item
    }

    /// Delete an item, returning it
    ///
    /// The about-to-delete callback sees the item while it is still stored.
    /// Only that item is removed: if the key was re-added while the callback
    /// ran, the replacement stays and the delete reports `NotFound`.
    pub fn delete(&self, key: &K) -> TableResult<Arc<RatingItem<K, I>>> {
        let (item, on_about_to_delete) = {
            let inner = self.inner.read();
            let item = inner
                .storage
                .get(key)
                .cloned()
                .ok_or_else(|| self.not_found(key))?;
            (item, inner.on_about_to_delete.clone())
        };

        if let Some(callback) = on_about_to_delete {
            callback(item.as_ref());
        }

        let mut inner = self.inner.write();
        let unchanged = inner
            .storage
            .get(key)
            .is_some_and(|stored| Arc::ptr_eq(stored, &item));
        if !unchanged {
            tracing::debug!(
                table = %self.name,
                key = ?key,
                "item replaced during delete, keeping it"
            );
            return Err(self.not_found(key));
        }

        inner.storage.remove(key).ok_or_else(|| self.not_found(key))
    }

    /// Check if a key is stored (never consults the loader)
    pub fn exists(&self, key: &K) -> bool {
        self.inner.read().storage.contains(key)
    }

    /// Get an item, loading it on a miss if a loader is set
    ///
    /// A loaded item is stored through `add`, so the added-callback fires.
    pub fn value(&self, key: &K) -> TableResult<Arc<RatingItem<K, I>>> {
        let loader = {
            let inner = self.inner.read();
            if let Some(item) = inner.storage.get(key) {
                return Ok(Arc::clone(item));
            }
            inner.loader.clone()
        };

        let Some(loader) = loader else {
            return Err(self.not_found(key));
        };

        match loader(key) {
            Some(loaded) => {
                tracing::debug!(table = %self.name, key = ?key, "promoting loaded item");
                let (_, ratings) = loaded.into_parts();
                Ok(self.add(key.clone(), ratings))
            }
            None => {
                tracing::debug!(table = %self.name, key = ?key, "loader produced no item");
                Err(self.not_found(key))
            }
        }
    }

    /// Remove every item without firing per-item callbacks
    pub fn flush(&self) {
        let flushed = {
            let mut inner = self.inner.write();
            let flushed = inner.storage.len();
            inner.storage.clear();
            flushed
        };

        self.log(format_args!("flushed {} items from table {}", flushed, self.name));
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Similarity between two stored entities, using the table's metric
    pub fn similarity(&self, a: &K, b: &K) -> TableResult<f64> {
        let a = self.value(a)?;
        let b = self.value(b)?;

        Ok(similarity::similarity(
            self.config.similarity.as_ref(),
            a.ratings(),
            b.ratings(),
        ))
    }

    /// Every other entity, ranked by similarity to `key`
    pub fn neighbors(&self, key: &K) -> TableResult<Vec<RankedPair<K>>> {
        let query = self.value(key)?;

        Ok(self
            .scan(&query)
            .into_iter()
            .map(|(pair, _)| pair)
            .collect())
    }

    /// Items `key` has not rated, ranked by similarity-weighted rating
    ///
    /// Each neighbor contributes `rating * weight` per unseen item, where
    /// `weight` is its share of the summed neighbor similarity (capped at 1,
    /// skipped when not positive). When the summed similarity is not
    /// positive there is nothing to weight by and the result is empty.
    pub fn recommend(&self, key: &K) -> TableResult<Vec<RankedPair<I>>> {
        let query = self.value(key)?;
        let neighbors = self.scan(&query);

        let total: f64 = neighbors.iter().map(|(pair, _)| pair.score).sum();
        if total <= 0.0 || !total.is_finite() {
            tracing::debug!(
                table = %self.name,
                key = ?key,
                total,
                "no positive similarity mass, nothing to recommend"
            );
            return Ok(Vec::new());
        }

        let mut scores: BTreeMap<I, f64> = BTreeMap::new();

        for (pair, item) in &neighbors {
            let weight = pair.score / total;
            if weight <= 0.0 {
                continue;
            }
            let weight = weight.min(1.0);

            for (rated, rating) in item.ratings().iter() {
                if query.ratings().contains(rated) {
                    continue;
                }
                *scores.entry(rated.clone()).or_insert(0.0) += rating * weight;
            }
        }

        Ok(ranking::rank(
            scores
                .into_iter()
                .map(|(rated, score)| RankedPair::new(rated, score))
                .collect(),
        ))
    }

    /// Score every stored item except the query, in result order
    fn scan(
        &self,
        query: &RatingItem<K, I>,
    ) -> Vec<(RankedPair<K>, Arc<RatingItem<K, I>>)> {
        let metric = self.config.similarity.as_ref();
        let mut shared = Vec::new();

        let mut scored: Vec<_> = {
            let inner = self.inner.read();
            inner
                .storage
                .iter()
                .filter(|other| other.key() != query.key())
                .map(|other| {
                    shared.clear();
                    shared.extend(query.ratings().shared(other.ratings()));
                    let score = metric.score(&shared);
                    (RankedPair::new(other.key().clone(), score), Arc::clone(other))
                })
                .collect()
        };

        tracing::trace!(table = %self.name, scanned = scored.len(), metric = metric.name());

        scored.sort_by(|(a, _), (b, _)| ranking::compare(a, b));
        scored
    }
}

impl<K, I: Ord> fmt::Debug for Table<K, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("similarity", &self.config.similarity.name())
            .finish_non_exhaustive()
    }
}
