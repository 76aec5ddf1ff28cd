//! # ARMS recommend - collaborative filtering for ARMS
//!
//! Tables of sparse rating vectors ("user → {item: rating}"), exact
//! neighbor search by similarity, and recommendations weighted by how
//! similar each neighbor is.
//!
//! ## Philosophy
//!
//! - **Agreement is relationship** - Entities are close when they rate the same things alike
//! - **Configurable, not hardcoded** - Similarity metrics are pluggable
//! - **Exact over approximate** - Every query scans every entity
//! - **Pure core, swappable adapters** - Hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ARMS recommend                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure math, no I/O)                                   │
//! │    Ratings, RatingItem, RankedPair, Similarity              │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Store, LogSink, hooks                                    │
//! │                                                              │
//! │  ADAPTERS (swappable implementations)                       │
//! │    Storage: Memory                                          │
//! │    Logging: tracing                                         │
//! │    API: Python bindings                                      │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    Table, Registry                                          │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use arms_recommend::Registry;
//!
//! // Accessing a table for the first time creates it
//! let registry: Registry<&str> = Registry::new();
//! let books = registry.table("books");
//!
//! books.add("Chris", [("1984", 5.0), ("Robinson Crusoe", 4.0), ("Moby-Dick", 3.0)]);
//! books.add("Jay", [("1984", 4.0), ("Robinson Crusoe", 3.0), ("Gulliver's Travels", 4.5)]);
//!
//! let recs = books.recommend(&"Chris").unwrap();
//! assert_eq!(recs[0].key, "Gulliver's Travels");
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure math, no I/O
/// Contains: Ratings, RatingItem, RankedPair, Similarity, TableConfig
pub mod core;

/// Port definitions - trait contracts for adapters
/// Contains: Store trait, LogSink trait, hook types, TableError
pub mod ports;

/// Adapter implementations - swappable components
/// Contains: storage, logging, python submodules
pub mod adapters;

/// Engine - orchestration layer
/// Contains: Table, Registry
pub mod engine;

// ============================================================================
// PYTHON BINDINGS (when enabled)
// ============================================================================

#[cfg(feature = "python")]
pub use adapters::python::*;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::{RankedPair, RatingItem, Ratings};
pub use crate::core::similarity::{similarity, Cosine, Pearson, Similarity};
pub use crate::core::config::TableConfig;

// Ports
pub use crate::ports::{LogSink, Store, TableError, TableResult};

// Adapters
pub use crate::adapters::storage::MemoryStorage;
pub use crate::adapters::TracingSink;

// Engine
pub use crate::engine::{Registry, Table};
