//! Pluggable cost models for weighted edit distances.
//!
//! Costs are expected to be in [0.0, 1.0]. For example, in an OCR
//! application `cost('o', 'a')` could be 0.4; in a spell-checking
//! application `cost('u', 'i')` could be 0.4 because the keys are
//! adjacent on a keyboard.

/// Cost of substituting one element for another.
///
/// Implementations shared across threads are queried read-only and must
/// not mutate shared state.
pub trait SubstitutionCost<T>: Send + Sync {
    /// Cost of substituting `a` with `b`, in [0.0, 1.0].
    ///
    /// Only queried for unequal elements; equal elements always cost 0.
    fn cost(&self, a: &T, b: &T) -> f64;
}

/// Per-element insertion and deletion costs.
///
/// Insertion and deletion are priced independently, so a distance built
/// on this model is not symmetric in general.
pub trait InsDelCost<T>: Send + Sync {
    /// Cost of inserting `t`, in [0.0, 1.0].
    fn insertion_cost(&self, t: &T) -> f64;

    /// Cost of deleting `t`, in [0.0, 1.0].
    fn deletion_cost(&self, t: &T) -> f64;
}

/// Any thread-safe closure can act as a substitution cost model.
impl<T, F> SubstitutionCost<T> for F
where
    F: Fn(&T, &T) -> f64 + Send + Sync,
{
    fn cost(&self, a: &T, b: &T) -> f64 {
        self(a, b)
    }
}

/// Default cost model: every operation costs 1.0.
///
/// Backs the unweighted algorithms and serves as the insertion/deletion
/// model when none is supplied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitCost;

impl<T> SubstitutionCost<T> for UnitCost {
    fn cost(&self, _a: &T, _b: &T) -> f64 {
        1.0
    }
}

impl<T> InsDelCost<T> for UnitCost {
    fn insertion_cost(&self, _t: &T) -> f64 {
        1.0
    }

    fn deletion_cost(&self, _t: &T) -> f64 {
        1.0
    }
}
