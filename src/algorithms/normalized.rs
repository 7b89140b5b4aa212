//! Length-normalized Levenshtein distance and similarity.
//!
//! Distance is computed as `levenshtein(a, b) / max(|a|, |b|)`, which always
//! falls in [0.0, 1.0] but is no longer a metric. Similarity is
//! `1.0 - distance`.

use super::levenshtein::levenshtein_distance;
use super::Similarity;
use smallvec::SmallVec;

/// Normalized Levenshtein distance in [0.0, 1.0].
///
/// # Example
/// ```
/// use seqdist::normalized_levenshtein;
///
/// assert_eq!(normalized_levenshtein("abcd", "abcd"), 0.0);
/// assert_eq!(normalized_levenshtein("abcd", "wxyz"), 1.0);
/// ```
#[must_use]
pub fn normalized_levenshtein(a: &str, b: &str) -> f64 {
    if a == b {
        return 0.0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    let max_len = a_chars.len().max(b_chars.len());
    if max_len == 0 {
        return 0.0;
    }
    levenshtein_distance(&a_chars, &b_chars) as f64 / max_len as f64
}

/// Normalized Levenshtein similarity in [0.0, 1.0]: `1.0 - distance`.
#[inline]
#[must_use]
pub fn normalized_levenshtein_similarity(a: &str, b: &str) -> f64 {
    1.0 - normalized_levenshtein(a, b)
}

/// Normalized Levenshtein similarity calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizedLevenshtein;

impl NormalizedLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for NormalizedLevenshtein {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        normalized_levenshtein_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "normalized_levenshtein"
    }
}
