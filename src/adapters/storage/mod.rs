//! # Storage Adapters
//!
//! Implementations of the Store port.
//!
//! Available adapters:
//! - `MemoryStorage` - In-memory HashMap (fast, volatile)

mod memory;

pub use memory::MemoryStorage;
