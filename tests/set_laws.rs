//! Property-based tests for `ChainSet` algebra.
//!
//! These tests verify that the set operations satisfy the usual laws
//! regardless of insertion order.

use chaincollections::ChainSet;
use proptest::prelude::*;

fn set_of(elements: Vec<i16>) -> ChainSet<i16> {
    elements.into_iter().collect()
}

// =============================================================================
// Union Laws
// Description: A ∪ B = B ∪ A, A ∪ ∅ = A
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(
        elements_a in prop::collection::vec(any::<i16>(), 0..30),
        elements_b in prop::collection::vec(any::<i16>(), 0..30)
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);

        prop_assert_eq!(set_a.union(&set_b), set_b.union(&set_a));
    }

    #[test]
    fn prop_union_identity_law(elements in prop::collection::vec(any::<i16>(), 0..30)) {
        let set = set_of(elements);
        let empty = ChainSet::new();

        prop_assert_eq!(set.union(&empty), set.clone());
        prop_assert_eq!(empty.union(&set), set);
    }
}

// =============================================================================
// Intersection Laws
// Description: A ∩ B = B ∩ A, A ∩ B ⊆ A
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_commutativity_law(
        elements_a in prop::collection::vec(0..20_i16, 0..30),
        elements_b in prop::collection::vec(0..20_i16, 0..30)
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);

        prop_assert_eq!(set_a.intersection(&set_b), set_b.intersection(&set_a));
    }

    #[test]
    fn prop_intersection_subset_law(
        elements_a in prop::collection::vec(0..20_i16, 0..30),
        elements_b in prop::collection::vec(0..20_i16, 0..30)
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);

        let both = set_a.intersection(&set_b);
        prop_assert!(both.is_subset(&set_a));
        prop_assert!(both.is_subset(&set_b));
    }
}

// =============================================================================
// Difference Laws
// Description: (A - B) ∩ B = ∅, A △ B = (A - B) ∪ (B - A)
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_disjoint_law(
        elements_a in prop::collection::vec(0..20_i16, 0..30),
        elements_b in prop::collection::vec(0..20_i16, 0..30)
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);

        prop_assert!(set_a.difference(&set_b).intersection(&set_b).is_empty());
    }

    #[test]
    fn prop_symmetric_difference_law(
        elements_a in prop::collection::vec(0..20_i16, 0..30),
        elements_b in prop::collection::vec(0..20_i16, 0..30)
    ) {
        let set_a = set_of(elements_a);
        let set_b = set_of(elements_b);

        let expected = set_a.difference(&set_b).union(&set_b.difference(&set_a));
        prop_assert_eq!(set_a.symmetric_difference(&set_b), expected);
    }
}
