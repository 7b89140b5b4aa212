//! Property-based tests for the edit-distance family.
//!
//! Verifies the metric (and documented non-metric) properties:
//!
//! 1. **Identity**: d(x, x) = 0 for every algorithm
//! 2. **Symmetry**: d(x, y) = d(y, x) for Levenshtein, OSA and
//!    Damerau-Levenshtein (the weighted variant is exempt by design)
//! 3. **Triangle inequality**: holds for Levenshtein and
//!    Damerau-Levenshtein; OSA is allowed to violate it
//! 4. **Ordering**: osa(x, y) >= damerau(x, y), and both are bounded above
//!    by plain Levenshtein
//! 5. **Limit contract**: the bounded variant equals min(exact, limit)

use proptest::prelude::*;
use seqdist::{
    damerau, levenshtein, levenshtein_bounded, osa, UnitCost, WeightedLevenshtein,
};

fn arb_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c]{0,12}").unwrap()
}

fn arb_unicode_string() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..12).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn identity(a in arb_unicode_string()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
        prop_assert_eq!(osa(&a, &a), 0);
        prop_assert_eq!(damerau(&a, &a), 0);
    }

    #[test]
    fn empty_string_distance_is_length(a in arb_unicode_string()) {
        let len = a.chars().count();
        prop_assert_eq!(levenshtein("", &a), len);
        prop_assert_eq!(levenshtein(&a, ""), len);
        prop_assert_eq!(osa("", &a), len);
        prop_assert_eq!(damerau(&a, ""), len);
    }

    #[test]
    fn symmetry(a in arb_string(), b in arb_string()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        prop_assert_eq!(osa(&a, &b), osa(&b, &a));
        prop_assert_eq!(damerau(&a, &b), damerau(&b, &a));
    }

    #[test]
    fn indiscernible(a in arb_string(), b in arb_string()) {
        if levenshtein(&a, &b) == 0 {
            prop_assert_eq!(&a, &b);
        }
        if damerau(&a, &b) == 0 {
            prop_assert_eq!(&a, &b);
        }
    }

    #[test]
    fn triangle_inequality_levenshtein(
        a in arb_string(),
        b in arb_string(),
        c in arb_string(),
    ) {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
    }

    #[test]
    fn triangle_inequality_damerau(
        a in arb_string(),
        b in arb_string(),
        c in arb_string(),
    ) {
        prop_assert!(damerau(&a, &c) <= damerau(&a, &b) + damerau(&b, &c));
    }

    #[test]
    fn osa_dominates_damerau(a in arb_string(), b in arb_string()) {
        prop_assert!(osa(&a, &b) >= damerau(&a, &b));
    }

    #[test]
    fn levenshtein_dominates_transposition_variants(a in arb_string(), b in arb_string()) {
        let lev = levenshtein(&a, &b);
        prop_assert!(lev >= osa(&a, &b));
        prop_assert!(lev >= damerau(&a, &b));
    }

    #[test]
    fn length_difference_is_a_lower_bound(a in arb_string(), b in arb_string()) {
        let diff = a.chars().count().abs_diff(b.chars().count());
        let upper = a.chars().count().max(b.chars().count());
        let lev = levenshtein(&a, &b);
        prop_assert!(lev >= diff);
        prop_assert!(lev <= upper);
    }

    #[test]
    fn limit_contract(a in arb_string(), b in arb_string(), limit in 0usize..8) {
        let exact = levenshtein(&a, &b);
        let bounded = levenshtein_bounded(&a, &b, limit);
        if a == b {
            prop_assert_eq!(bounded, 0);
        } else {
            prop_assert_eq!(bounded, exact.min(limit));
        }
    }

    #[test]
    fn weighted_unit_costs_match_levenshtein(a in arb_string(), b in arb_string()) {
        let weighted = WeightedLevenshtein::new(UnitCost);
        prop_assert_eq!(weighted.str_distance(&a, &b), levenshtein(&a, &b) as f64);
    }

    #[test]
    fn unicode_agrees_with_ascii_semantics(a in arb_unicode_string(), b in arb_unicode_string()) {
        // Distances count caller-supplied atomic characters, never bytes
        let lev = levenshtein(&a, &b);
        prop_assert!(lev <= a.chars().count().max(b.chars().count()));
        prop_assert_eq!(lev, levenshtein(&b, &a));
    }
}

#[test]
fn osa_triangle_inequality_counterexample_exists() {
    // The restriction that no substring is edited twice makes OSA a
    // semi-metric only; this is the canonical violation.
    assert_eq!(osa("CA", "AC") + osa("AC", "ABC"), 2);
    assert_eq!(osa("CA", "ABC"), 3);
}
