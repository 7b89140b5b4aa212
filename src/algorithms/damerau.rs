//! Damerau-Levenshtein distance with unrestricted transpositions.
//!
//! Minimum number of insertions, deletions, substitutions and adjacent
//! transpositions needed to transform one sequence into the other, where a
//! transposition may be separated from other edits by any number of
//! untouched elements and the same substring may take part in several edits.
//! Unlike the restricted Optimal String Alignment variant this is a true
//! metric: it satisfies the triangle inequality.
//!
//! The transposition term can jump back arbitrarily far, so the full
//! distance matrix is retained: O(m*n) time *and* space. This is the one
//! member of the family that cannot roll its rows. The last row index at
//! which each element value was matched lives in a per-call hash map that is
//! rebuilt on every invocation and discarded on return.

use std::hash::Hash;

use ahash::AHashMap;
use smallvec::SmallVec;

use super::engine::Matrix;
use super::EditDistance;

/// Compute unrestricted Damerau-Levenshtein distance between two slices.
///
/// Requires `Eq + Hash` on the element type: the transposition bookkeeping
/// keys a map by element value.
///
/// # Example
/// ```
/// use seqdist::damerau_distance;
///
/// let a: Vec<char> = "ABCDEF".chars().collect();
/// let b: Vec<char> = "ABDCEF".chars().collect();
/// assert_eq!(damerau_distance(&a, &b), 1);
/// ```
#[must_use]
pub fn damerau_distance<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
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

    // Larger than any real distance; seeds the phantom row/column so the
    // transposition lookup never wins when no prior match exists
    let inf = m + n;

    // Last row index at which each element value was matched
    let mut last_row: AHashMap<&T, usize> = AHashMap::with_capacity(m + n);
    for e in a.iter().chain(b.iter()) {
        last_row.insert(e, 0);
    }

    let mut h = Matrix::new(m + 2, n + 2);

    h.set(0, 0, inf);
    for i in 0..=m {
        h.set(i + 1, 0, inf);
        h.set(i + 1, 1, i);
    }
    for j in 0..=n {
        h.set(0, j + 1, inf);
        h.set(1, j + 1, j);
    }

    for i in 1..=m {
        // Last column index at which a[i-1] was matched within this row
        let mut db = 0usize;

        for j in 1..=n {
            let i1 = last_row[&b[j - 1]];
            let j1 = db;

            let cost = if a[i - 1] == b[j - 1] {
                db = j;
                0
            } else {
                1
            };

            let value = (h.get(i, j) + cost) // substitution
                .min(h.get(i + 1, j) + 1) // insertion
                .min(h.get(i, j + 1) + 1) // deletion
                // transposition: reach the last double match, swap, and
                // delete/insert everything strictly in between
                .min(h.get(i1, j1) + (i - i1 - 1) + 1 + (j - j1 - 1));
            h.set(i + 1, j + 1, value);
        }

        last_row.insert(&a[i - 1], i);
    }

    h.get(m + 1, n + 1)
}

/// Compute unrestricted Damerau-Levenshtein distance between two strings,
/// by `char`.
///
/// # Example
/// ```
/// use seqdist::damerau;
///
/// assert_eq!(damerau("ABCDEF", "ABDCEF"), 1);
/// assert_eq!(damerau("CA", "ABC"), 2);
/// ```
#[inline]
#[must_use]
pub fn damerau(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    let a_chars: SmallVec<[char; 64]> = a.chars().collect();
    let b_chars: SmallVec<[char; 64]> = b.chars().collect();
    damerau_distance(&a_chars, &b_chars)
}

/// Normalized Damerau-Levenshtein similarity (0.0 to 1.0)
#[inline]
#[must_use]
pub fn damerau_similarity(a: &str, b: &str) -> f64 {
    let dist = damerau(a, b);
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        1.0
    } else {
        1.0 - (dist as f64 / max_len as f64)
    }
}

/// Unrestricted Damerau-Levenshtein distance calculator.
///
/// # Complexity
/// - Time: O(m*n) where m and n are sequence lengths
/// - Space: O(m*n); the unbounded transposition lookback needs the full
///   matrix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein;

impl DamerauLevenshtein {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EditDistance for DamerauLevenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        damerau(a, b)
    }

    fn name(&self) -> &'static str {
        "damerau_levenshtein"
    }
}
