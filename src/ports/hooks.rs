//! # Hook Ports
//!
//! Extension points a table calls out to. All of them run outside the
//! table's lock, so they are free to call back into the table.

use std::fmt;
use std::sync::Arc;

use crate::core::RatingItem;

/// Produces an item for a key the table does not hold
pub type DataLoader<K, I> = Arc<dyn Fn(&K) -> Option<RatingItem<K, I>> + Send + Sync>;

/// Observes an item (after it was added, or before it is deleted)
pub type ItemCallback<K, I> = Arc<dyn Fn(&RatingItem<K, I>) + Send + Sync>;

/// Destination for a table's informational messages
///
/// Logging is best effort: sinks cannot report failure back to the table.
pub trait LogSink: Send + Sync {
    /// Record one message
    fn log(&self, args: fmt::Arguments<'_>);
}

impl<F> LogSink for F
where
    F: Fn(fmt::Arguments<'_>) + Send + Sync,
{
    fn log(&self, args: fmt::Arguments<'_>) {
        self(args)
    }
}
