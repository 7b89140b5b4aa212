//! Levenshtein (edit) distance.
//!
//! Minimum number of single-element insertions, deletions and substitutions
//! required to change one sequence into the other. A true metric: it is zero
//! iff the sequences are equal, symmetric, and satisfies the triangle
//! inequality. Always at least the difference of the lengths and at most the
//! length of the longer sequence.
//!
//! Implementation uses the Wagner-Fischer dynamic program with two rolling
//! rows, so the space requirement is O(min(n, m)) and time is O(n·m).

use smallvec::SmallVec;

use super::engine;
use super::EditDistance;

/// Compute Levenshtein distance between two element slices.
///
/// Generic over any element type with decidable equality; byte slices and
/// char slices behave identically.
///
/// # Example
/// ```
/// use seqdist::levenshtein_distance;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
/// assert_eq!(levenshtein_distance(&a, &b), 3);
/// assert_eq!(levenshtein_distance(b"flaw", b"lawn"), 2);
/// ```
#[must_use]
pub fn levenshtein_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a == b {
        return 0;
    }
    engine::unit_distance(a, b, None)
}

/// Compute Levenshtein distance, stopping early at `limit`.
///
/// Returns `limit` as soon as the computation proves the distance is at
/// least `limit`. A return value equal to `limit` is therefore a lower
/// bound, not necessarily the exact distance; smaller return values are
/// exact.
#[must_use]
pub fn levenshtein_distance_with_limit<T: PartialEq>(a: &[T], b: &[T], limit: usize) -> usize {
    if a == b {
        return 0;
    }
    engine::unit_distance(a, b, Some(limit))
}

/// Compute Levenshtein distance between two strings, by `char`.
///
/// # Example
/// ```
/// use seqdist::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("café", "cafe"), 1);
/// ```
#[inline]
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    engine::unit_distance(&a_chars, &b_chars, None)
}

/// Compute Levenshtein distance between two strings with early termination.
///
/// Returns `limit` once the distance is provably at least `limit`; see
/// [`levenshtein_distance_with_limit`] for the exactness caveat.
///
/// # Example
/// ```
/// use seqdist::levenshtein_bounded;
///
/// assert_eq!(levenshtein_bounded("abc", "abd", 10), 1);
/// assert_eq!(levenshtein_bounded("abcdef", "uvwxyz", 3), 3);
/// ```
#[inline]
#[must_use]
pub fn levenshtein_bounded(a: &str, b: &str, limit: usize) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    engine::unit_distance(&a_chars, &b_chars, Some(limit))
}

/// Normalized Levenshtein similarity (0.0 to 1.0)
#[inline]
#[must_use]
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let dist = levenshtein(a, b);
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        1.0
    } else {
        1.0 - (dist as f64 / max_len as f64)
    }
}

/// SIMD-accelerated Levenshtein distance.
///
/// Uses triple_accel's vectorized implementation, which falls back to scalar
/// code on CPUs without SIMD support. Works on bytes, so for non-ASCII
/// strings the result is the byte-level distance, not the char-level one.
#[inline]
#[must_use]
pub fn levenshtein_simd(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    triple_accel::levenshtein::levenshtein(a.as_bytes(), b.as_bytes()) as usize
}

/// SIMD-accelerated Levenshtein distance with a threshold.
///
/// Returns `None` if the byte-level distance exceeds `max_distance`.
#[inline]
#[must_use]
pub fn levenshtein_simd_bounded(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    if a == b {
        return Some(0);
    }
    if a.len().abs_diff(b.len()) > max_distance {
        return None;
    }
    triple_accel::levenshtein::levenshtein_simd_k(a.as_bytes(), b.as_bytes(), max_distance as u32)
        .map(|d| d as usize)
}

/// Levenshtein distance calculator with optional early termination.
///
/// # Complexity
/// - Time: O(m*n) where m and n are sequence lengths
/// - Space: O(min(m,n)) using the rolling-row optimization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein {
    /// Maximum distance of interest; the computation stops once the
    /// distance is provably at least this value and returns it as-is.
    pub limit: Option<usize>,
}

impl Levenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self { limit: None }
    }

    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }
}

impl EditDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        match self.limit {
            Some(lim) => levenshtein_bounded(a, b, lim),
            None => levenshtein(a, b),
        }
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
        assert_eq!(levenshtein("ABCDEF", "ABCDE"), 1);
        assert_eq!(levenshtein("ABCDEF", "BCDEF"), 1);
        assert_eq!(levenshtein("ABCDEF", "ABDCEF"), 2);
    }

    #[test]
    fn test_levenshtein_symmetry() {
        assert_eq!(levenshtein("flaw", "lawn"), levenshtein("lawn", "flaw"));
        assert_eq!(
            levenshtein("intention", "execution"),
            levenshtein("execution", "intention")
        );
    }

    #[test]
    fn test_levenshtein_unicode() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("日本語", "日本"), 1);
    }

    #[test]
    fn test_levenshtein_generic_bytes_and_chars_agree() {
        let a = "flaw";
        let b = "lawn";
        let ac: Vec<char> = a.chars().collect();
        let bc: Vec<char> = b.chars().collect();
        assert_eq!(
            levenshtein_distance(a.as_bytes(), b.as_bytes()),
            levenshtein_distance(&ac, &bc)
        );
    }

    #[test]
    fn test_levenshtein_bounded_returns_limit() {
        // True distance (6) exceeds the limit
        assert_eq!(levenshtein_bounded("abcdef", "uvwxyz", 3), 3);
        // Within the limit the exact distance comes back
        assert_eq!(levenshtein_bounded("abc", "abd", 2), 1);
        // Equal strings short-circuit regardless of limit
        assert_eq!(levenshtein_bounded("abc", "abc", 0), 0);
        // Distance exactly at the limit
        assert_eq!(levenshtein_bounded("ab", "cd", 2), 2);
    }

    #[test]
    fn test_levenshtein_struct() {
        let lev = Levenshtein::with_limit(2);
        assert_eq!(lev.distance("abc", "abd"), 1);
        assert_eq!(lev.distance("abc", "xyz"), 2);

        let unbounded = Levenshtein::new();
        assert_eq!(unbounded.distance("abc", "xyz"), 3);
        assert_eq!(unbounded.name(), "levenshtein");
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert_eq!(levenshtein_similarity("abc", "abc"), 1.0);
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert!(levenshtein_similarity("abc", "abd") > 0.6);
    }

    #[test]
    fn test_levenshtein_simd_ascii_agrees_with_scalar() {
        for (a, b) in [
            ("kitten", "sitting"),
            ("hello", "hallo"),
            ("", "abc"),
            ("same", "same"),
        ] {
            assert_eq!(levenshtein_simd(a, b), levenshtein(a, b));
        }
    }

    #[test]
    fn test_levenshtein_simd_bounded() {
        assert_eq!(levenshtein_simd_bounded("hello", "hallo", 2), Some(1));
        assert_eq!(levenshtein_simd_bounded("abc", "xyz", 2), None);
        assert_eq!(levenshtein_simd_bounded("abc", "abc", 0), Some(0));
    }
}
