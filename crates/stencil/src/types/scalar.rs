use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Serialize, Serializer};

/// An opaque leaf value produced by a decoder.
///
/// Scalars are never inspected during path traversal, except when a filter
/// segment compares a field against a literal. That comparison uses the
/// canonical string form returned by [`Scalar::canonical`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// An explicit null (JSON `null`). Present, unlike [`crate::Value::Absent`].
    Null,

    /// A boolean.
    Bool(bool),

    /// An integer that fits in 64 bits.
    Integer(i64),

    /// Any other number.
    Float(f64),

    /// A string.
    String(String),
}

impl Scalar {
    /// The string form a filter literal is compared against.
    ///
    /// Floats with no fractional part drop the trailing `.0`, so `3.0`
    /// compares equal to the literal `3`. `Null` is the empty string.
    pub fn canonical(&self) -> String {
        match self {
            Scalar::Null => String::new(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::String(s) => s.clone(),
        }
    }

    /// Get this scalar as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for `Null` and the empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::String(s) => s.is_empty(),
            Scalar::Bool(_) | Scalar::Integer(_) | Scalar::Float(_) => false,
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Integer(n) => write!(f, "{n}"),
            Scalar::Float(n) => write!(f, "{n}"),
            Scalar::String(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Integer(n) => serializer.serialize_i64(*n),
            // Whole floats encode without a fraction, matching their canonical form.
            Scalar::Float(n) if n.fract() == 0.0 && n.abs() < WHOLE_FLOAT_LIMIT => {
                serializer.serialize_i64(*n as i64)
            }
            Scalar::Float(n) => serializer.serialize_f64(*n),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}

const WHOLE_FLOAT_LIMIT: f64 = 1e15;
