//! Integration tests for the generic value model

use std::sync::Arc;

use stencil::{Mapping, Scalar, Value};

#[test]
fn test_canonical_forms() {
    assert_eq!(Scalar::Float(3.0).canonical(), "3");
    assert_eq!(Scalar::Float(2.5).canonical(), "2.5");
    assert_eq!(Scalar::Integer(-7).canonical(), "-7");
    assert_eq!(Scalar::Bool(true).canonical(), "true");
    assert_eq!(Scalar::Null.canonical(), "");
}

#[test]
fn test_absent_is_not_null() {
    assert_ne!(Value::Absent, Value::null());
    assert!(Value::Absent.is_absent());
    assert!(!Value::null().is_absent());
    assert_eq!(Value::Absent.render(), "");
    assert_eq!(Value::null().render(), "");
}

#[test]
fn test_render_collections_as_json() {
    let v = Value::mapping([("b", Value::sequence([1, 2])), ("a", Value::from("x"))]);
    assert_eq!(v.render(), r#"{"a":"x","b":[1,2]}"#);
    assert_eq!(v.to_string(), v.render());
}

#[test]
fn test_mapping_later_duplicates_win() {
    let v = Value::mapping([("k", 1), ("k", 2)]);
    assert_eq!(v.len(), Some(1));
    assert_eq!(v.get("k"), Value::from(2));
}

#[test]
fn test_accessors() {
    let v = Value::sequence([Value::from(4), Value::from(1.5), Value::from("s")]);
    assert_eq!(v.at(0).as_i64(), Some(4));
    assert_eq!(v.at(0).as_f64(), Some(4.0));
    assert_eq!(v.at(1).as_i64(), None);
    assert_eq!(v.at(1).as_f64(), Some(1.5));
    assert_eq!(v.at(2).as_str(), Some("s"));
    assert!(v.at(3).is_absent());
    assert!(v.get("x").is_absent());
    assert_eq!(Value::from("héllo").len(), Some(5));
    assert_eq!(Value::from(1).len(), None);
}

#[test]
fn test_from_serde_json() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"n":1,"f":1.5,"s":"x","z":null,"l":[true]}"#).unwrap();
    let v = Value::from(json);
    assert_eq!(v.get("n"), Value::from(1));
    assert_eq!(v.get("f"), Value::from(1.5));
    assert_eq!(v.get("z"), Value::null());
    assert_eq!(v.get("l"), Value::sequence([true]));
}

#[test]
fn test_from_mapping() {
    let mut m = Mapping::new();
    m.insert("a".into(), Value::from("b"));
    assert_eq!(Value::from(m), Value::mapping([("a", "b")]));
}

#[test]
fn test_clone_shares_storage() {
    let v = Value::sequence(["a", "b"]);
    let copy = v.clone();
    match (&v, &copy) {
        (Value::Sequence(a), Value::Sequence(b)) => assert!(Arc::ptr_eq(a, b)),
        _ => panic!("expected sequences"),
    }
}

#[test]
fn test_value_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
}
