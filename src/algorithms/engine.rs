//! Shared dynamic-programming cores for the edit-distance family.
//!
//! Every algorithm in this module family evaluates, for each cell `(i, j)`,
//! the cheapest way to transform the first `i` elements of one sequence into
//! the first `j` elements of the other:
//!
//! ```text
//! cost(i, j) = min(
//!     cost(i-1, j)   + deletion_cost(s1[i-1]),
//!     cost(i,   j-1) + insertion_cost(s2[j-1]),
//!     cost(i-1, j-1) + substitution_cost(s1[i-1], s2[j-1]),  // 0 if equal
//! )
//! ```
//!
//! The cores here materialize only two rows at a time, alternating the
//! "current"/"previous" roles with a swap instead of a copy. Algorithms that
//! need deeper lookback (transpositions) keep more history: a three-row
//! window for the restricted variant, a full [`Matrix`] for the unrestricted
//! one.

use smallvec::{smallvec, SmallVec};

use super::cost::{InsDelCost, SubstitutionCost};

/// Flat row-major matrix of distances.
///
/// Backs the unrestricted transposition algorithm, whose lookback into
/// earlier rows is unbounded and therefore cannot roll.
pub(crate) struct Matrix {
    cols: usize,
    cells: Vec<usize>,
}

impl Matrix {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            cells: vec![0; rows * cols],
        }
    }

    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.cols + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.cols + col] = value;
    }
}

/// Unit-cost edit distance via two rolling rows.
///
/// Rolls over the shorter sequence so space is O(min(n, m)); the recurrence
/// is symmetric under unit costs, so swapping the arguments is safe.
///
/// When `limit` is set, the scan stops as soon as a completed row's minimum
/// proves the distance can no longer drop below `limit`, and `limit` itself
/// is returned. The final result is clamped to `limit` so callers can rely
/// on "returns exactly `limit` when the distance is at least `limit`".
pub(crate) fn unit_distance<T: PartialEq>(s1: &[T], s2: &[T], limit: Option<usize>) -> usize {
    // Keep the shorter sequence on the column axis
    let (outer, inner) = if s1.len() >= s2.len() {
        (s1, s2)
    } else {
        (s2, s1)
    };
    let n = inner.len();

    let mut prev: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr: SmallVec<[usize; 64]> = smallvec![0; n + 1];

    for (i, oc) in outer.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];

        for j in 1..=n {
            let cost = usize::from(*oc != inner[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
            row_min = row_min.min(curr[j]);
        }

        if let Some(lim) = limit {
            if row_min >= lim {
                return lim;
            }
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    match limit {
        Some(lim) => prev[n].min(lim),
        None => prev[n],
    }
}

/// Cost-model-driven edit distance via two rolling rows of `f64`.
///
/// Unlike [`unit_distance`] the arguments cannot be swapped: insertion
/// applies to elements of `s2` and deletion to elements of `s1`, and the two
/// may be priced differently. Row 0 accumulates the actual insertion cost of
/// each `s2` element, and each row start accumulates the deletion cost of
/// the corresponding `s1` element, not unit increments.
pub(crate) fn weighted_distance<T, S, D>(
    s1: &[T],
    s2: &[T],
    substitution: &S,
    ins_del: &D,
    limit: Option<f64>,
) -> f64
where
    T: PartialEq,
    S: SubstitutionCost<T>,
    D: InsDelCost<T>,
{
    let n = s2.len();

    let mut prev: SmallVec<[f64; 64]> = smallvec![0.0; n + 1];
    let mut curr: SmallVec<[f64; 64]> = smallvec![0.0; n + 1];

    for j in 0..n {
        prev[j + 1] = prev[j] + ins_del.insertion_cost(&s2[j]);
    }

    for c1 in s1.iter() {
        let deletion = ins_del.deletion_cost(c1);
        curr[0] = prev[0] + deletion;
        let mut row_min = curr[0];

        for (j, c2) in s2.iter().enumerate() {
            let cost = if c1 == c2 {
                0.0
            } else {
                substitution.cost(c1, c2)
            };
            curr[j + 1] = (curr[j] + ins_del.insertion_cost(c2))
                .min(prev[j + 1] + deletion)
                .min(prev[j] + cost);
            row_min = row_min.min(curr[j + 1]);
        }

        if let Some(lim) = limit {
            if row_min >= lim {
                return lim;
            }
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    match limit {
        Some(lim) => prev[n].min(lim),
        None => prev[n],
    }
}
