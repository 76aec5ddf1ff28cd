//! # Engine
//!
//! The orchestration layer that wires everything together.
//!
//! This is where:
//! - Storage adapters are connected to tables
//! - Hooks and log sinks are invoked
//! - Neighbor search and recommendation run
//! - Tables are looked up by name

mod registry;
mod table;

pub use registry::Registry;
pub use table::Table;
