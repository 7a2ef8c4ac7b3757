//! Integration tests for the collection helpers

use stencil::functions::collections::{isset, last, set_item};
use stencil::functions::seq::seq;
use stencil::{FunctionError, FunctionRegistry, Value, values};

fn call(name: &str, args: &[Value]) -> Result<Value, FunctionError> {
    FunctionRegistry::with_builtins().call(name, args)
}

#[test]
fn test_create_map_and_set_item() {
    let m = call("createMap", &[]).unwrap();
    let m = call("setItem", &values![m, "a", "b"]).unwrap();
    let m = call("setItem", &values![m, "c", "d"]).unwrap();
    let rendered: Vec<String> = m
        .as_mapping()
        .unwrap()
        .iter()
        .map(|(k, v)| format!("{k}:{v}"))
        .collect();
    assert_eq!(rendered.join(" "), "a:b c:d");
}

#[test]
fn test_set_item_leaves_original_untouched() {
    let original = Value::mapping([("a", 1)]);
    let updated = set_item(&original, "b", Value::from(2)).unwrap();
    assert_eq!(original, Value::mapping([("a", 1)]));
    assert_eq!(updated, Value::mapping([("a", 1), ("b", 2)]));
}

#[test]
fn test_set_item_on_absent_starts_empty() {
    let updated = set_item(&Value::Absent, "k", Value::from("v")).unwrap();
    assert_eq!(updated, Value::mapping([("k", "v")]));
}

#[test]
fn test_set_item_on_sequence_is_invalid() {
    let err = call("setItem", &values![Value::sequence([1]), "k", "v"]).unwrap_err();
    assert!(matches!(err, FunctionError::InvalidArgument { .. }));
}

#[test]
fn test_mk_slice() {
    let slice = call("mkSlice", &values!["a", "b", "c"]).unwrap();
    assert_eq!(slice, Value::sequence(["a", "b", "c"]));
    assert_eq!(call("mkSlice", &[]).unwrap(), Value::empty_sequence());
}

#[test]
fn test_unique_keeps_first_seen_order() {
    let slice = Value::sequence(["a", "a", "b", "b", "c", "a"]);
    assert_eq!(
        call("unique", &values![slice]).unwrap(),
        Value::sequence(["a", "b", "c"])
    );
}

#[test]
fn test_unique_needs_a_sequence() {
    assert!(call("unique", &values!["abc"]).is_err());
}

#[test]
fn test_in_array() {
    let haystack = call("explode", &values!["1|2|3", "|"]).unwrap();
    assert_eq!(call("in_array", &values!["1", haystack.clone()]).unwrap(), Value::from(true));
    assert_eq!(call("in_array", &values!["4", haystack.clone()]).unwrap(), Value::from(false));
    assert_eq!(call("in_array", &values![1, haystack]).unwrap(), Value::from(false));
    assert_eq!(call("in_array", &values!["a", "abc"]).unwrap(), Value::from(false));
}

#[test]
fn test_isset_on_mapping() {
    let a = Value::mapping([("z", Value::from(1)), ("p", Value::from("a & b"))]);
    assert!(isset(&a, &Value::from("z")));
    assert!(!isset(&a, &Value::from("c")));
}

#[test]
fn test_isset_on_sequence() {
    let s = Value::sequence(["x", "y"]);
    assert!(isset(&s, &Value::from(1)));
    assert!(isset(&s, &Value::from("0")));
    assert!(!isset(&s, &Value::from(2)));
    assert!(!isset(&s, &Value::from(-1)));
    assert!(!isset(&Value::from("xy"), &Value::from(0)));
}

#[test]
fn test_last() {
    let s = Value::sequence([1, 2, 3]);
    assert!(last(2, &s));
    assert!(!last(1, &s));
    assert!(!last(0, &Value::empty_sequence()));
    assert_eq!(call("last", &values![2, "abc"]).unwrap(), Value::from(true));
}

#[test]
fn test_seq_forms() {
    assert_eq!(seq(&[3]), vec![1, 2, 3]);
    assert_eq!(seq(&[0, 3]), vec![0, 1, 2, 3]);
    assert_eq!(seq(&[1, 2, 4]), vec![1, 3]);
    assert_eq!(seq(&[-3]), vec![-1, -2, -3]);
    assert_eq!(seq(&[1, 4]), vec![1, 2, 3, 4]);
    assert_eq!(seq(&[1, -2]), vec![1, 0, -1, -2]);
}

#[test]
fn test_seq_rejects_bad_input() {
    assert!(seq(&[]).is_empty());
    assert!(seq(&[0]).is_empty());
    assert!(seq(&[1, 0, 3]).is_empty());
    assert!(seq(&[1, -1, 3]).is_empty());
    assert!(seq(&[3, 1, 1]).is_empty());
    assert!(seq(&[1, 2, 3, 4]).is_empty());
}

#[test]
fn test_seq_limits() {
    assert_eq!(seq(&[2000]).len(), 2000);
    assert!(seq(&[2001]).is_empty());
    assert!(seq(&[-100_000, -100_001]).is_empty());
    assert!(seq(&[i64::MIN, i64::MAX]).is_empty());
}

#[test]
fn test_seq_through_registry() {
    let rendered: Vec<String> = call("seq", &values![3])
        .unwrap()
        .as_sequence()
        .unwrap()
        .iter()
        .map(Value::render)
        .collect();
    assert_eq!(rendered.join(" "), "1 2 3");
    assert_eq!(call("seq", &values!["x"]).unwrap(), Value::empty_sequence());
    assert!(call("seq", &values![1, 2, 3, 4]).is_err());
}
