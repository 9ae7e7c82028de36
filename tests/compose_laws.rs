#![cfg(feature = "compose")]
//! Property-based tests for composition over container pipelines.
//!
//! ## Composition Laws
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//!
//! ## Pipe Laws
//! - **Consistency with Compose**: `pipe!(x, f, g) == compose!(g, f)(x)`
//!
//! ## Flip Laws
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`

use chaincollections::compose::{flip, identity};
use chaincollections::prelude::*;
use chaincollections::{compose, pipe};
use proptest::prelude::*;

fn evens(list: ChainList<i32>) -> ChainList<i32> {
    list.filter(|value| value % 2 == 0)
}

fn halved(list: ChainList<i32>) -> ChainList<i32> {
    list.map(|value| value / 2)
}

fn sorted(list: ChainList<i32>) -> ChainList<i32> {
    list.sort()
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_identity(elements in prop::collection::vec(any::<i32>(), 0..40)) {
        let left = compose!(identity, evens);
        let right = compose!(evens, identity);

        prop_assert_eq!(left(ChainList::from(elements.clone())), evens(ChainList::from(elements.clone())));
        prop_assert_eq!(right(ChainList::from(elements.clone())), evens(ChainList::from(elements)));
    }

    #[test]
    fn prop_compose_associativity(elements in prop::collection::vec(any::<i32>(), 0..40)) {
        let left_associative = compose!(sorted, compose!(halved, evens));
        let right_associative = compose!(compose!(sorted, halved), evens);

        prop_assert_eq!(
            left_associative(ChainList::from(elements.clone())),
            right_associative(ChainList::from(elements))
        );
    }
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_pipe_matches_compose(elements in prop::collection::vec(any::<i32>(), 0..40)) {
        let piped = pipe!(ChainList::from(elements.clone()), evens, halved);
        let composed = compose!(halved, evens)(ChainList::from(elements));

        prop_assert_eq!(piped, composed);
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_flip_definition(
        elements in prop::collection::vec(any::<i32>(), 0..20),
        extra in any::<i32>()
    ) {
        let append = |list: ChainList<i32>, value: i32| list.append(value);
        let flipped = flip(append);

        prop_assert_eq!(
            flipped(extra, ChainList::from(elements.clone())),
            append(ChainList::from(elements), extra)
        );
    }
}
