//! # Configuration
//!
//! Per-table settings. Nothing here is hardcoded into the algorithms; a
//! table only ever talks to its metric through the `Similarity` trait.

use std::sync::Arc;

use super::similarity::{Cosine, Similarity};

/// Table configuration
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Metric used by neighbor search and recommendations
    pub similarity: Arc<dyn Similarity>,
}

impl TableConfig {
    /// Default configuration (cosine similarity)
    pub fn new() -> Self {
        Self {
            similarity: Arc::new(Cosine),
        }
    }

    /// Use a different similarity metric
    pub fn with_similarity<S: Similarity + 'static>(mut self, similarity: S) -> Self {
        self.similarity = Arc::new(similarity);
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}
