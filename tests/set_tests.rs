//! Integration tests for `ChainSet`.

use chaincollections::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn left() -> ChainSet<i32> {
    ChainSet::from([1, 2, 3])
}

#[fixture]
fn right() -> ChainSet<i32> {
    ChainSet::from([2, 3, 4])
}

// =============================================================================
// Set algebra
// =============================================================================

#[rstest]
fn test_union_of_overlapping_sets(left: ChainSet<i32>, right: ChainSet<i32>) {
    assert_eq!(left.union(&right), ChainSet::from([1, 2, 3, 4]));
}

#[rstest]
fn test_intersection_of_overlapping_sets(left: ChainSet<i32>, right: ChainSet<i32>) {
    assert_eq!(left.intersection(&right), ChainSet::from([2, 3]));
}

#[rstest]
fn test_difference_of_overlapping_sets(left: ChainSet<i32>, right: ChainSet<i32>) {
    assert_eq!(left.difference(&right), ChainSet::from([1]));
    assert_eq!(right.difference(&left), ChainSet::from([4]));
}

#[rstest]
fn test_symmetric_difference_of_overlapping_sets(left: ChainSet<i32>, right: ChainSet<i32>) {
    assert_eq!(left.symmetric_difference(&right), ChainSet::from([1, 4]));
}

#[rstest]
fn test_operands_are_not_consumed(left: ChainSet<i32>, right: ChainSet<i32>) {
    let _ = left.union(&right);
    assert_eq!(left.len(), 3);
    assert_eq!(right.len(), 3);
}

#[rstest]
fn test_subset_relations(left: ChainSet<i32>) {
    let small = ChainSet::from([2, 3]);
    assert!(small.is_subset(&left));
    assert!(left.is_superset(&small));
    assert!(!left.is_subset(&small));
}

// =============================================================================
// Sequence operations on sets
// =============================================================================

#[rstest]
fn test_map_collapses_duplicates() {
    let remainders = ChainSet::from([1, 4, 7, 8]).map(|value| value % 3);
    assert_eq!(remainders, ChainSet::from([1, 2]));
}

#[rstest]
fn test_insert_returns_a_copy(left: ChainSet<i32>) {
    let grown = left.insert(10);
    assert!(grown.contains(&10));
    assert!(!left.contains(&10));
}

#[rstest]
fn test_partition_groups_in_insertion_order() {
    let groups = ChainSet::from([5, 6, 7, 8, 9]).partition(2);
    assert_eq!(
        groups,
        ChainSet::from([ChainList::from(vec![5, 6]), ChainList::from(vec![7, 8])])
    );
}

#[rstest]
fn test_accumulate_on_sets_deduplicates_results() {
    let running = ChainSet::from([0, 1, 2]).accumulate(|left, right| left * right);
    assert_eq!(running, ChainSet::from([0]));
}

#[rstest]
fn test_positional_access_follows_insertion_order() {
    let set = ChainSet::from([9, 3, 5]);
    assert_eq!(set.first(), Ok(&9));
    assert_eq!(set.last(), Ok(&5));
    assert_eq!(set.nth(7), Err(ChainError::IndexOutOfRange { index: 7, length: 3 }));
}

#[rstest]
fn test_sets_are_always_distinct(left: ChainSet<i32>) {
    assert!(left.is_distinct());
    assert_eq!(left.clone().unique(), left);
}

#[rstest]
fn test_conversions() {
    let set = ChainList::from(vec![3, 1, 3]).to_set();
    assert_eq!(set.clone().to_vec(), vec![3, 1]);
    assert_eq!(set.clone().to_list(), vec![3, 1]);
    assert_eq!(set.to_iter().to_vec(), vec![3, 1]);
}

#[rstest]
fn test_display_uses_braces() {
    assert_eq!(ChainSet::from([1, 2]).to_string(), "{1, 2}");
}
