//! # Similarity
//!
//! How alike are two rating vectors?
//!
//! Metrics only ever see the ratings both entities gave to the same items,
//! as aligned `(x, y)` pairs. Keys rated by just one side carry no signal
//! about agreement and are ignored.
//!
//! Higher = more similar. Every metric returns 0 for degenerate input
//! (nothing shared, zero magnitude, zero variance), never NaN or infinity.

use std::fmt;

use super::Ratings;

/// Trait for similarity metrics over shared ratings
///
/// Object safe, so a table can hold any metric behind an `Arc<dyn Similarity>`.
pub trait Similarity: Send + Sync + fmt::Debug {
    /// Score aligned rating pairs `(x, y)` taken from the shared keys
    ///
    /// Must be symmetric: swapping every pair must not change the result.
    fn score(&self, shared: &[(f64, f64)]) -> f64;

    /// Name of this metric (for debugging/config)
    fn name(&self) -> &'static str;
}

/// Score two rating vectors with the given metric
pub fn similarity<I: Ord>(metric: &dyn Similarity, a: &Ratings<I>, b: &Ratings<I>) -> f64 {
    let shared: Vec<(f64, f64)> = a.shared(b).collect();
    metric.score(&shared)
}

// ============================================================================
// BUILT-IN METRICS
// ============================================================================

/// Cosine similarity on the shared subspace
///
/// `Σxy / (√Σx² · √Σy²)`. Not clamped; lies in [0, 1] for non-negative
/// ratings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cosine;

impl Similarity for Cosine {
    fn score(&self, shared: &[(f64, f64)]) -> f64 {
        let mut sum_xy = 0.0;
        let mut sum_x2 = 0.0;
        let mut sum_y2 = 0.0;

        for &(x, y) in shared {
            sum_xy += x * y;
            sum_x2 += x * x;
            sum_y2 += y * y;
        }

        let denominator = sum_x2.sqrt() * sum_y2.sqrt();
        if denominator == 0.0 || !denominator.is_finite() {
            return 0.0;
        }

        sum_xy / denominator
    }

    fn name(&self) -> &'static str {
        "cosine"
    }
}

/// Pearson correlation on the shared subspace
///
/// Centers each side on its mean over the shared keys before correlating,
/// so two raters who agree on relative preference score high even if one
/// rates everything a point lower.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pearson;

impl Similarity for Pearson {
    fn score(&self, shared: &[(f64, f64)]) -> f64 {
        if shared.is_empty() {
            return 0.0;
        }

        let n = shared.len() as f64;
        let (sum_x, sum_y) = shared
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
        let mean_x = sum_x / n;
        let mean_y = sum_y / n;

        let mut covariance = 0.0;
        let mut var_x = 0.0;
        let mut var_y = 0.0;

        for &(x, y) in shared {
            let dx = x - mean_x;
            let dy = y - mean_y;
            covariance += dx * dy;
            var_x += dx * dx;
            var_y += dy * dy;
        }

        let denominator = var_x.sqrt() * var_y.sqrt();
        if denominator == 0.0 || !denominator.is_finite() {
            return 0.0;
        }

        covariance / denominator
    }

    fn name(&self) -> &'static str {
        "pearson"
    }
}
