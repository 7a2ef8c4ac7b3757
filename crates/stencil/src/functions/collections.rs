//! Building and inspecting mappings and sequences.

use std::sync::Arc;

use crate::types::{Mapping, Scalar, Value};

pub fn create_map() -> Value {
    Value::Mapping(Arc::new(Mapping::new()))
}

/// A copy of `map` with `key` set to `value`.
///
/// Other holders of `map` keep seeing the old contents. An absent map
/// starts empty; `None` is returned for anything that is not a mapping.
pub fn set_item(map: &Value, key: &str, value: Value) -> Option<Value> {
    let mut fields = match map {
        Value::Mapping(fields) => Arc::clone(fields),
        Value::Absent => Arc::new(Mapping::new()),
        Value::Scalar(_) | Value::Sequence(_) => return None,
    };
    Arc::make_mut(&mut fields).insert(key.to_string(), value);
    Some(Value::Mapping(fields))
}

pub fn mk_slice(items: &[Value]) -> Value {
    Value::Sequence(Arc::new(items.to_vec()))
}

/// The distinct items of `items`, in first-seen order.
pub fn unique(items: &[Value]) -> Value {
    let mut seen: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(item) {
            seen.push(item.clone());
        }
    }
    Value::Sequence(Arc::new(seen))
}

/// Whether `haystack` is a sequence holding an item equal to `needle`.
pub fn in_array(needle: &Value, haystack: &Value) -> bool {
    haystack
        .as_sequence()
        .is_some_and(|items| items.contains(needle))
}

/// Whether `key` names a field of a mapping or a valid index of a sequence.
pub fn isset(container: &Value, key: &Value) -> bool {
    match container {
        Value::Mapping(fields) => key.as_str().is_some_and(|k| fields.contains_key(k)),
        Value::Sequence(items) => index_of(key).is_some_and(|i| i < items.len()),
        Value::Scalar(_) | Value::Absent => false,
    }
}

fn index_of(key: &Value) -> Option<usize> {
    match key.as_scalar()? {
        Scalar::Integer(n) => usize::try_from(*n).ok(),
        Scalar::String(s) => s.trim().parse().ok(),
        Scalar::Null | Scalar::Bool(_) | Scalar::Float(_) => None,
    }
}

/// Whether `index` is the last position of `collection`.
pub fn last(index: i64, collection: &Value) -> bool {
    collection
        .len()
        .and_then(|len| len.checked_sub(1))
        .and_then(|last| i64::try_from(last).ok())
        .is_some_and(|last| last == index)
}
