//! seqdist - pairwise sequence distance algorithms
//!
//! A library of edit-distance algorithms for fuzzy matching, deduplication
//! and spell-correction ranking. Every algorithm is generic over the element
//! type being compared, requiring only decidable equality, so byte slices
//! and char slices behave identically; `&str` convenience wrappers operate
//! on `char`s with no grapheme segmentation.
//!
//! # Algorithms
//! - [`levenshtein`]: insertions, deletions, substitutions; a true metric
//! - [`osa`]: Levenshtein plus non-overlapping adjacent transpositions
//!   (restricted; not a metric)
//! - [`damerau`]: Levenshtein plus unrestricted adjacent transpositions
//!   (a true metric)
//! - [`WeightedLevenshtein`]: pluggable per-operation costs, not symmetric
//!   in general
//! - [`NormalizedLevenshtein`]: length-normalized distance/similarity
//!   in [0.0, 1.0]
//!
//! # Early termination
//! Levenshtein and the weighted variant accept a `limit`: once the running
//! row minimum proves the distance is at least `limit`, the scan stops and
//! `limit` itself is returned. A result equal to `limit` is a lower bound
//! on the true distance, not necessarily the exact value.
//!
//! # Example
//! ```
//! use seqdist::{damerau, levenshtein, levenshtein_bounded};
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert_eq!(damerau("ab", "ba"), 1);
//! assert_eq!(levenshtein_bounded("kitten", "sitting", 2), 2);
//! ```
//!
//! Every computation is pure, synchronous and allocation-local: concurrent
//! calls from multiple threads are independent, and caller-supplied cost
//! models are queried read-only.

pub mod algorithms;
pub mod batch;

pub use algorithms::{
    damerau, damerau_distance, damerau_similarity, levenshtein, levenshtein_bounded,
    levenshtein_distance, levenshtein_distance_with_limit, levenshtein_similarity,
    levenshtein_simd, levenshtein_simd_bounded, normalized_levenshtein,
    normalized_levenshtein_similarity, osa, osa_distance, osa_similarity, DamerauLevenshtein,
    EditDistance, InsDelCost, Levenshtein, NormalizedLevenshtein, OptimalStringAlignment,
    Similarity, SubstitutionCost, UnitCost, WeightedLevenshtein,
};
pub use batch::{batch_distances, batch_similarities, best_match, find_similar, find_within,
    metric_by_name, BatchMatch};

use thiserror::Error as ThisError;

/// Errors surfaced by this crate.
///
/// Distance computations themselves are infallible; errors arise only from
/// parameter validation and name-based dispatch, and always propagate
/// directly to the caller.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A parameter was outside its documented domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No metric is registered under the requested name.
    #[error("unknown algorithm: '{0}' (valid: levenshtein, osa, optimal_string_alignment, damerau, damerau_levenshtein)")]
    UnknownAlgorithm(String),
}
