//! Optimal String Alignment distance (restricted Damerau-Levenshtein).
//!
//! Extends Levenshtein with an adjacent-transposition operation, under the
//! restriction that no substring is edited more than once: a transposition
//! cannot be followed by another edit touching either swapped element.
//!
//! Because of that restriction OSA is *not* a metric. It can overcount
//! relative to the unrestricted Damerau-Levenshtein distance and can violate
//! the triangle inequality: with `d("CA", "AC") = 1` and `d("AC", "ABC") = 1`
//! but `d("CA", "ABC") = 3`.
//!
//! The transposition term only ever looks back two rows, so a three-row
//! window suffices; the full matrix is never materialized.

use smallvec::{smallvec, SmallVec};

use super::EditDistance;

/// Compute OSA distance between two element slices.
///
/// # Example
/// ```
/// use seqdist::osa_distance;
///
/// let a: Vec<char> = "CA".chars().collect();
/// let b: Vec<char> = "ABC".chars().collect();
/// assert_eq!(osa_distance(&a, &b), 3);
/// ```
#[must_use]
pub fn osa_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a == b {
        return 0;
    }

    let m = a.len();
    let n = b.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Three rows: the transposition term reads two rows back
    let mut two_ago: SmallVec<[usize; 64]> = smallvec![0; n + 1];
    let mut prev: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 64]> = smallvec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution

            // Adjacent transposition, allowed at most once per substring
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                curr[j] = curr[j].min(two_ago[j - 2] + cost);
            }
        }

        // Rotate rows
        std::mem::swap(&mut two_ago, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Compute OSA distance between two strings, by `char`.
///
/// # Example
/// ```
/// use seqdist::osa;
///
/// assert_eq!(osa("ab", "ba"), 1);
/// assert_eq!(osa("BAC", "CAB"), 2);
/// ```
#[inline]
#[must_use]
pub fn osa(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    osa_distance(&a_chars, &b_chars)
}

/// Normalized OSA similarity (0.0 to 1.0)
#[inline]
#[must_use]
pub fn osa_similarity(a: &str, b: &str) -> f64 {
    let dist = osa(a, b);
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        1.0
    } else {
        1.0 - (dist as f64 / max_len as f64)
    }
}

/// Optimal String Alignment distance calculator.
///
/// # Complexity
/// - Time: O(m*n) where m and n are sequence lengths
/// - Space: O(n) via a three-row window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptimalStringAlignment;

impl OptimalStringAlignment {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for OptimalStringAlignment {
    fn distance(&self, a: &str, b: &str) -> usize {
        osa(a, b)
    }

    fn name(&self) -> &'static str {
        "osa"
    }
}
