//! Levenshtein distance with pluggable per-operation costs.
//!
//! The recurrence is the standard Levenshtein one, but substitution cost
//! comes from a [`SubstitutionCost`] model (queried only for unequal
//! elements) and insertion/deletion costs come from an optional
//! [`InsDelCost`] model, defaulting to 1.0 per element. Because inserting
//! an element and deleting it may be priced differently, the resulting
//! distance is **not symmetric** in general: `distance(a, b)` and
//! `distance(b, a)` can legitimately differ.

use smallvec::SmallVec;

use super::cost::{InsDelCost, SubstitutionCost, UnitCost};
use super::engine;

/// Weighted Levenshtein distance calculator.
///
/// # Example
/// ```
/// use seqdist::WeightedLevenshtein;
///
/// // Substituting 't' for 'r' is cheap: the keys are adjacent
/// let keyboard = |a: &char, b: &char| {
///     if *a == 't' && *b == 'r' { 0.5 } else { 1.0 }
/// };
/// let instance = WeightedLevenshtein::new(keyboard);
/// assert_eq!(instance.str_distance("String1", "Srring1"), 0.5);
/// ```
///
/// # Complexity
/// - Time: O(m*n) where m and n are sequence lengths
/// - Space: O(n) using two rolling rows
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedLevenshtein<S, D = UnitCost> {
    substitution: S,
    ins_del: D,
}

impl<S> WeightedLevenshtein<S, UnitCost> {
    /// Create a new instance with the provided substitution cost model and
    /// unit insertion/deletion costs.
    pub fn new(substitution: S) -> Self {
        Self {
            substitution,
            ins_del: UnitCost,
        }
    }
}

impl<S, D> WeightedLevenshtein<S, D> {
    /// Create a new instance with both a substitution cost model and a
    /// per-element insertion/deletion cost model.
    pub fn with_ins_del(substitution: S, ins_del: D) -> Self {
        Self {
            substitution,
            ins_del,
        }
    }

    /// Compute the weighted distance between two element slices.
    #[must_use]
    pub fn distance<T>(&self, a: &[T], b: &[T]) -> f64
    where
        T: PartialEq,
        S: SubstitutionCost<T>,
        D: InsDelCost<T>,
    {
        if a == b {
            return 0.0;
        }
        engine::weighted_distance(a, b, &self.substitution, &self.ins_del, None)
    }

    /// Compute the weighted distance, stopping early at `limit`.
    ///
    /// Returns `limit` once the distance is provably at least `limit`; a
    /// result equal to `limit` is a lower bound, not necessarily exact.
    #[must_use]
    pub fn distance_with_limit<T>(&self, a: &[T], b: &[T], limit: f64) -> f64
    where
        T: PartialEq,
        S: SubstitutionCost<T>,
        D: InsDelCost<T>,
    {
        if a == b {
            return 0.0;
        }
        engine::weighted_distance(a, b, &self.substitution, &self.ins_del, Some(limit))
    }

    /// Compute the weighted distance between two strings, by `char`.
    #[must_use]
    pub fn str_distance(&self, a: &str, b: &str) -> f64
    where
        S: SubstitutionCost<char>,
        D: InsDelCost<char>,
    {
        if a == b {
            return 0.0;
        }
        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        engine::weighted_distance(&a_chars, &b_chars, &self.substitution, &self.ins_del, None)
    }

    /// Compute the weighted distance between two strings with early
    /// termination at `limit`.
    #[must_use]
    pub fn str_distance_with_limit(&self, a: &str, b: &str, limit: f64) -> f64
    where
        S: SubstitutionCost<char>,
        D: InsDelCost<char>,
    {
        if a == b {
            return 0.0;
        }
        let a_chars: SmallVec<[char; 64]> = a.chars().collect();
        let b_chars: SmallVec<[char; 64]> = b.chars().collect();
        engine::weighted_distance(
            &a_chars,
            &b_chars,
            &self.substitution,
            &self.ins_del,
            Some(limit),
        )
    }
}
