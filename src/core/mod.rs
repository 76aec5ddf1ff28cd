//! # Core
//!
//! Pure domain: value types and similarity math. No locks, no I/O.
//!
//! - `Ratings` - sparse item → score vector
//! - `RatingItem` - an entity key and its ratings
//! - `RankedPair` - a scored key, plus the result ordering
//! - `Similarity` - pluggable metric (Cosine, Pearson)
//! - `TableConfig` - per-table settings

pub mod config;
pub mod item;
pub mod ranking;
pub mod ratings;
pub mod similarity;

pub use item::RatingItem;
pub use ranking::RankedPair;
pub use ratings::Ratings;
