//! # Tracing Log Sink
//!
//! Routes a table's informational messages into `tracing`, so they land
//! wherever the host application's subscriber sends everything else.

use std::fmt;

use crate::ports::LogSink;

/// Log sink that emits `tracing` info events
#[derive(Debug, Clone)]
pub struct TracingSink {
    table: String,
}

impl TracingSink {
    /// Create a sink that tags every event with the table name
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl LogSink for TracingSink {
    fn log(&self, args: fmt::Arguments<'_>) {
        tracing::info!(table = %self.table, "{}", args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_sink_without_subscriber_is_silent() {
        let sink = TracingSink::new("books");
        sink.log(format_args!("flushed {} items", 3));
    }
}
