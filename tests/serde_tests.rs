#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! These tests verify that the eager containers and `Value` serialize to
//! the natural JSON shapes and deserialize back.

use chaincollections::{ChainList, ChainMap, ChainSet};
use rstest::rstest;

// =============================================================================
// ChainList Integration Tests
// =============================================================================

#[rstest]
fn test_list_json_roundtrip() {
    let list: ChainList<i32> = (1..=5).collect();
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,2,3,4,5]");

    let restored: ChainList<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(list, restored);
}

#[rstest]
fn test_list_nested_structures() {
    let nested = ChainList::from(vec![ChainList::from(vec![1]), ChainList::from(vec![2, 3])]);
    let json = serde_json::to_string(&nested).unwrap();
    assert_eq!(json, "[[1],[2,3]]");
}

// =============================================================================
// ChainMap Integration Tests
// =============================================================================

#[rstest]
fn test_map_keeps_insertion_order() {
    let map = ChainMap::from_pairs([("zeta".to_owned(), 1), ("alpha".to_owned(), 2)]);
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);

    let restored: ChainMap<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.keys(), vec!["zeta".to_owned(), "alpha".to_owned()]);
}

// =============================================================================
// ChainSet Integration Tests
// =============================================================================

#[rstest]
fn test_set_deduplicates_on_deserialize() {
    let restored: ChainSet<i32> = serde_json::from_str("[3,1,3,2]").unwrap();
    assert_eq!(restored.to_vec(), vec![3, 1, 2]);
}

// =============================================================================
// Value Integration Tests
// =============================================================================

#[cfg(feature = "dynamic")]
mod value {
    use chaincollections::prelude::*;
    use rstest::rstest;

    #[rstest]
    fn test_value_reads_any_document() {
        let document: Value =
            serde_json::from_str(r#"{"a": 1, "b": {"c": 2.5}, "e": [4, null, "x", true]}"#).unwrap();

        let expected = Value::map([
            ("a", Value::from(1)),
            ("b", Value::map([("c", 2.5)])),
            (
                "e",
                Value::list([Value::from(4), Value::Null, Value::from("x"), Value::from(true)]),
            ),
        ]);
        assert_eq!(document, expected);
    }

    #[rstest]
    fn test_value_roundtrip() {
        let value = Value::list([Value::from(-3), Value::map([("k", "v")])]);
        let json = serde_json::to_string(&value).unwrap();
        let restored: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, restored);
    }

    #[rstest]
    fn test_unsigned_beyond_i64_is_rejected() {
        let result: Result<Value, _> = serde_json::from_str("18446744073709551615");
        assert!(result.is_err());

        let largest: Value = serde_json::from_str("9223372036854775807").unwrap();
        assert_eq!(largest, Value::Integer(i64::MAX));
    }

    #[rstest]
    fn test_long_arrays_read_past_the_preallocation_limit() {
        let json = serde_json::to_string(&(0..5000).collect::<Vec<i64>>()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_list().map(<[Value]>::len), Some(5000));
    }

    #[rstest]
    fn test_document_feeds_recursive_chain() {
        let document: Value = serde_json::from_str(r#"{"rows": [[1, 2], [3, 4]]}"#).unwrap();
        let Some(root) = chain_recursive(document).into_mapping() else {
            panic!("expected a mapping");
        };
        let Some(Wrapped::Sequence(rows)) = root.nested(&Value::from("rows")) else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
    }
}
