//! # Adapters
//!
//! Swappable implementations of port traits.
//!
//! - Storage adapters: Memory
//! - Log sinks: tracing
//! - Python bindings (when enabled)
//!
//! Each adapter implements one or more port traits.
//! Adapters can be swapped without changing core logic.

pub mod logging;
pub mod storage;

#[cfg(feature = "python")]
pub mod python;

pub use logging::TracingSink;
