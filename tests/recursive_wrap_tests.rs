#![cfg(feature = "dynamic")]
//! Recursive wrapping of nested values.
//!
//! Covers the document `{"a": 1, "b": {"c": 2}, "e": [4, 5, 6]}` in both
//! modes, propagation of the flag through kind-preserving operations and
//! the absence of the flag on scalar results.

use chaincollections::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn document() -> Value {
    Value::map([
        ("a", Value::from(1)),
        ("b", Value::map([("c", 2)])),
        ("e", Value::list([4, 5, 6])),
    ])
}

fn key(name: &str) -> Value {
    Value::from(name)
}

// =============================================================================
// Nested access
// =============================================================================

#[rstest]
fn test_recursive_mapping_wraps_nested_containers(document: Value) {
    let Some(root) = chain_recursive(document).into_mapping() else {
        panic!("expected a mapping");
    };
    assert!(root.wrap_mode().is_recursive());

    let Some(Wrapped::Mapping(inner)) = root.nested(&key("b")) else {
        panic!("expected a wrapped mapping under b");
    };
    assert!(inner.wrap_mode().is_recursive());
    assert_eq!(inner.get(&key("c")), Some(&Value::from(2)));

    let Some(Wrapped::Sequence(numbers)) = root.nested(&key("e")) else {
        panic!("expected a wrapped sequence under e");
    };
    assert!(numbers.wrap_mode().is_recursive());
    assert_eq!(numbers, vec![Value::from(4), Value::from(5), Value::from(6)]);

    assert_eq!(root.nested(&key("a")), Some(Wrapped::Plain(Value::from(1))));
    assert_eq!(root.nested(&key("missing")), None);
}

#[rstest]
fn test_plain_mapping_returns_raw_values(document: Value) {
    let Some(root) = chain(document).into_mapping() else {
        panic!("expected a mapping");
    };
    assert_eq!(root.wrap_mode(), WrapMode::Plain);

    let nested = root.nested(&key("b"));
    assert_eq!(nested, Some(Wrapped::Plain(Value::map([("c", 2)]))));
    assert_eq!(nested.and_then(|wrapped| wrapped.kind()), None);
}

#[rstest]
fn test_wrapping_continues_at_every_depth() {
    let deep = ChainList::from(vec![Value::list([Value::list([Value::map([("leaf", true)])])])])
        .recursive();

    let Some(Wrapped::Sequence(level_one)) = deep.nested(0) else {
        panic!("expected level one");
    };
    let Some(Wrapped::Sequence(level_two)) = level_one.nested(0) else {
        panic!("expected level two");
    };
    let Some(Wrapped::Mapping(leaf)) = level_two.nested(0) else {
        panic!("expected a mapping leaf");
    };
    assert!(leaf.wrap_mode().is_recursive());
    assert_eq!(leaf.get(&key("leaf")), Some(&Value::from(true)));
}

#[rstest]
fn test_sets_are_never_wrapped() {
    let list = ChainList::from(vec![Value::set([1, 2])]).recursive();
    assert_eq!(list.nested(0), Some(Wrapped::Plain(Value::set([1, 2]))));
}

// =============================================================================
// Flag propagation
// =============================================================================

#[rstest]
fn test_kind_preserving_operations_keep_the_flag(document: Value) {
    let Some(root) = chain_recursive(document).into_mapping() else {
        panic!("expected a mapping");
    };

    let filtered = root.filter(|_, value| value.is_collection()).take(5);
    assert!(filtered.wrap_mode().is_recursive());
    assert_eq!(filtered.len(), 2);

    let values = filtered.values();
    assert!(values.wrap_mode().is_recursive());
    let mapped = values.map(|value| value).drop(1);
    assert!(mapped.wrap_mode().is_recursive());
    assert!(matches!(mapped.nested(0), Some(Wrapped::Sequence(_))));
}

#[rstest]
fn test_inner_chunks_carry_the_flag() {
    let chunks = crange(0..7).recursive().partition_all(3);
    assert!(chunks.wrap_mode().is_recursive());
    assert!(chunks.iter().all(|chunk| chunk.wrap_mode().is_recursive()));
    assert_eq!(chunks[2], vec![6]);
}

#[rstest]
fn test_scalar_results_are_unflagged() {
    let list = ChainList::from(vec![Value::list([1]), Value::from(2)]).recursive();
    assert_eq!(list.first().ok(), Some(&Value::list([1])));

    let total = crange(1..4).recursive().fold(0, |sum, value| sum + value);
    assert_eq!(total, 6);
}

#[rstest]
fn test_grouping_results_are_plain_mappings() {
    let groups = crange(0..4).recursive().group_by(|value| value % 2);
    assert_eq!(groups.wrap_mode(), WrapMode::Plain);
}

// =============================================================================
// Paths and flattening
// =============================================================================

#[rstest]
fn test_get_in_walks_maps_and_lists(document: Value) {
    let Some(root) = chain(document).into_mapping() else {
        panic!("expected a mapping");
    };
    assert_eq!(root.get_in(&[key("b"), key("c")]), Some(&Value::from(2)));
    assert_eq!(root.get_in(&[key("e"), Value::from(2)]), Some(&Value::from(6)));
    assert_eq!(root.get_in(&[key("e"), Value::from(-1)]), None);
    assert_eq!(root.get_in(&[key("a"), key("x")]), None);
    assert_eq!(root.get_in_or(&[key("zz")], &Value::Null), &Value::Null);
}

#[rstest]
fn test_flatten_depth_rejects_scalars() {
    let mixed = ChainList::from(vec![Value::list([1]), Value::from("oops")]);
    assert_eq!(
        mixed.flatten_depth(1),
        Err(ChainError::TypeMismatch {
            expected: "list or set",
            found: "text",
        })
    );
}

#[rstest]
fn test_flatten_depth_keeps_mode() {
    let nested = ChainList::from(vec![Value::list([Value::list([1])])]).recursive();
    let flat = nested.flatten_depth(1);
    assert!(flat.is_ok_and(|list| list.wrap_mode().is_recursive()));
}
