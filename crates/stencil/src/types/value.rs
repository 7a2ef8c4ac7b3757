use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::Scalar;

/// A keyed collection of values.
pub type Mapping = BTreeMap<String, Value>;

/// A generic, dynamically-shaped value decoded from JSON, XML or CSV.
///
/// Values form an immutable, shared graph: mappings and sequences are held
/// behind [`Arc`], so cloning is cheap and a value can be queried from many
/// threads at once.
///
/// # Example
///
/// ```
/// use stencil::Value;
///
/// let country = Value::mapping([("iso", "GB"), ("name", "Great Britain")]);
/// assert_eq!(country.get("iso"), Value::from("GB"));
/// assert!(country.get("capital").is_absent());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// No value here: a missing field, an index out of range, a failed filter.
    #[default]
    Absent,

    /// A leaf value.
    Scalar(Scalar),

    /// String-keyed fields.
    Mapping(Arc<Mapping>),

    /// An ordered list.
    Sequence(Arc<Vec<Value>>),
}

impl Value {
    /// Build a mapping from key/value pairs. Later duplicates win.
    pub fn mapping<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Value
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Mapping(Arc::new(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// Build a sequence from values.
    pub fn sequence<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Value {
        Value::Sequence(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// An empty sequence.
    pub fn empty_sequence() -> Value {
        Value::Sequence(Arc::new(Vec::new()))
    }

    /// A `null` scalar.
    pub fn null() -> Value {
        Value::Scalar(Scalar::Null)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m.as_ref()),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(s) => Some(s.as_slice()),
            _ => None,
        }
    }

    /// Get this value as a string slice, if it is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Scalar(Scalar::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    /// Integers widen to `f64`. Strings are not parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Scalar(Scalar::Float(f)) => Some(*f),
            Value::Scalar(Scalar::Integer(n)) => Some(*n as f64),
            _ => None,
        }
    }

    /// Look up a field of a mapping. Anything else yields `Absent`.
    pub fn get(&self, key: &str) -> Value {
        self.as_mapping()
            .and_then(|m| m.get(key))
            .cloned()
            .unwrap_or_default()
    }

    /// Look up an element of a sequence. Anything else yields `Absent`.
    pub fn at(&self, index: usize) -> Value {
        self.as_sequence()
            .and_then(|s| s.get(index))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of elements, fields, or characters for collections and strings.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Mapping(m) => Some(m.len()),
            Value::Sequence(s) => Some(s.len()),
            Value::Scalar(Scalar::String(s)) => Some(s.chars().count()),
            Value::Scalar(_) | Value::Absent => None,
        }
    }

    /// Render as template output text.
    ///
    /// `Absent` renders empty, scalars render in canonical form, and
    /// collections render as compact JSON.
    pub fn render(&self) -> String {
        match self {
            Value::Absent => String::new(),
            Value::Scalar(s) => s.canonical(),
            Value::Mapping(_) | Value::Sequence(_) => {
                serde_json::to_string(self).unwrap_or_default()
            }
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Absent => Ok(()),
            Value::Scalar(s) => write!(f, "{s}"),
            Value::Mapping(_) | Value::Sequence(_) => f.write_str(&self.render()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent => serializer.serialize_unit(),
            Value::Scalar(s) => s.serialize(serializer),
            Value::Mapping(m) => {
                let mut map = serializer.serialize_map(Some(m.len()))?;
                for (k, v) in m.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

// From implementations for common types

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Scalar(Scalar::Integer(i64::from(n)))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Integer(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Scalar(Scalar::Integer(i64::from(n)))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Scalar(Scalar::Integer(n as i64))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(Scalar::Float(n))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::String(s))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(Arc::new(items))
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Mapping(Arc::new(m))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::null(),
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => i.into(),
                None => n.as_f64().unwrap_or(f64::NAN).into(),
            },
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(items) => {
                Value::sequence(items.into_iter().map(Value::from))
            }
            serde_json::Value::Object(fields) => Value::mapping(fields),
        }
    }
}
