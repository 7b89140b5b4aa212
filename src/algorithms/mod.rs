//! Edit-distance algorithms over generic element sequences.
//!
//! Each algorithm is implemented as a standalone generic function for
//! composability, plus `&str` convenience wrappers and a trait-based
//! interface for dynamic dispatch.

pub mod cost;
pub mod damerau;
pub(crate) mod engine;
pub mod levenshtein;
pub mod normalized;
pub mod osa;
pub mod weighted;

pub use cost::*;
pub use damerau::*;
pub use levenshtein::*;
pub use normalized::*;
pub use osa::*;
pub use weighted::*;

/// Trait for similarity metrics.
/// Returns a value between 0.0 (completely different) and 1.0 (identical).
pub trait Similarity: Send + Sync {
    fn similarity(&self, a: &str, b: &str) -> f64;

    /// Convenience method for normalized distance (1.0 - similarity)
    fn distance(&self, a: &str, b: &str) -> f64 {
        1.0 - self.similarity(a, b)
    }

    /// Name of the algorithm for dispatch and diagnostics
    fn name(&self) -> &'static str;
}

/// Trait for edit distance algorithms that return integer distances
pub trait EditDistance: Send + Sync + std::fmt::Debug {
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Convert to normalized similarity score (0.0 to 1.0)
    fn similarity(&self, a: &str, b: &str) -> f64 {
        let dist = self.distance(a, b);
        let max_len = a.chars().count().max(b.chars().count());
        if max_len == 0 {
            1.0
        } else {
            1.0 - (dist as f64 / max_len as f64)
        }
    }

    fn name(&self) -> &'static str;
}

/// Blanket implementation: any EditDistance is also a Similarity
impl<T: EditDistance> Similarity for T {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        EditDistance::similarity(self, a, b)
    }

    fn name(&self) -> &'static str {
        EditDistance::name(self)
    }
}
