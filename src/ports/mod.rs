//! # Ports
//!
//! Trait contracts between the engine and its adapters.
//!
//! - `Store` - where items live
//! - `LogSink` - where informational messages go
//! - `DataLoader`, `ItemCallback` - lifecycle hooks

mod hooks;
mod store;

pub use hooks::{DataLoader, ItemCallback, LogSink};
pub use store::Store;

use thiserror::Error;

/// Errors from table operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Key is not stored and no loader could produce it
    #[error("key {key} not found in table {table:?} and could not be loaded")]
    NotFound {
        /// Table that was queried
        table: String,
        /// The missing key, `Debug`-formatted
        key: String,
    },
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;
