//! # Registry
//!
//! Hands out tables by name. The first request for a name creates the
//! table; every later request returns that same instance. Tables live as
//! long as the registry.
//!
//! Owned, not global: create one at startup and pass it to whoever needs
//! tables.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use super::Table;
use crate::core::config::TableConfig;

/// Directory of named tables
pub struct Registry<K, I: Ord = K> {
    /// Applied to every table this registry creates
    config: TableConfig,

    /// Tables by name
    tables: RwLock<HashMap<String, Arc<Table<K, I>>>>,
}

impl<K, I> Registry<K, I>
where
    K: Eq + Hash + Ord + Clone + fmt::Debug + Send + Sync + 'static,
    I: Ord + Clone + Send + Sync + 'static,
{
    /// Create an empty registry with default table config
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    /// Create an empty registry whose tables use `config`
    pub fn with_config(config: TableConfig) -> Self {
        Self {
            config,
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Get the table called `name`, creating it if needed
    pub fn table(&self, name: &str) -> Arc<Table<K, I>> {
        if let Some(table) = self.tables.read().get(name) {
            return Arc::clone(table);
        }

        // Re-check under the write lock: another caller may have won the race.
        let mut tables = self.tables.write();
        let table = tables.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(table = name, "creating table");
            Arc::new(Table::with_config(name, self.config.clone()))
        });
        Arc::clone(table)
    }

    /// Check if a table has been created
    pub fn contains(&self, name: &str) -> bool {
        self.tables.read().contains_key(name)
    }

    /// Names of all created tables, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of created tables
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// Check if no table has been created
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }
}

impl<K, I> Default for Registry<K, I>
where
    K: Eq + Hash + Ord + Clone + fmt::Debug + Send + Sync + 'static,
    I: Ord + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
