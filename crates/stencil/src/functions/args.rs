//! Argument access and coercion for template functions.

use crate::functions::{Arity, FunctionError};
use crate::types::{Mapping, Scalar, Value};

static ABSENT: Value = Value::Absent;

/// A number taken from an argument, keeping integers exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => i.into(),
            Number::Float(f) => f.into(),
        }
    }
}

/// The arguments of one function call, with the function's name for errors.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    function: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    pub fn new(function: &'a str, values: &'a [Value]) -> Self {
        Self { function, values }
    }

    pub fn function(&self) -> &'a str {
        self.function
    }

    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fail with [`FunctionError::ArgumentCount`] unless `arity` accepts the call.
    pub fn expect(&self, arity: Arity) -> Result<(), FunctionError> {
        if arity.accepts(self.values.len()) {
            Ok(())
        } else {
            Err(FunctionError::ArgumentCount {
                function: self.function.to_string(),
                expected: arity,
                got: self.values.len(),
            })
        }
    }

    /// The argument at `index`, or `Absent` past the end.
    pub fn value(&self, index: usize) -> &'a Value {
        self.values.get(index).unwrap_or(&ABSENT)
    }

    /// Text form of a scalar argument. `Absent` and `null` are empty.
    pub fn string(&self, index: usize) -> Result<String, FunctionError> {
        match self.value(index) {
            Value::Absent => Ok(String::new()),
            Value::Scalar(s) => Ok(s.canonical()),
            Value::Mapping(_) | Value::Sequence(_) => {
                Err(self.invalid(format!("argument {} must be text", index + 1)))
            }
        }
    }

    /// Every argument from `start` on, as text.
    pub fn strings_from(&self, start: usize) -> Result<Vec<String>, FunctionError> {
        (start..self.values.len()).map(|i| self.string(i)).collect()
    }

    /// A numeric argument. Numeric strings are parsed; empty values are 0.
    pub fn number(&self, index: usize) -> Result<Number, FunctionError> {
        let scalar = match self.value(index) {
            Value::Absent => return Ok(Number::Int(0)),
            Value::Scalar(s) => s,
            Value::Mapping(_) | Value::Sequence(_) => {
                return Err(self.invalid(format!("argument {} must be a number", index + 1)));
            }
        };
        match scalar {
            Scalar::Null => Ok(Number::Int(0)),
            Scalar::Integer(n) => Ok(Number::Int(*n)),
            Scalar::Float(f) => Ok(Number::Float(*f)),
            Scalar::String(s) => parse_number(s.trim()).ok_or_else(|| {
                self.invalid(format!("argument {} is not a number: '{s}'", index + 1))
            }),
            Scalar::Bool(_) => Err(self.invalid(format!("argument {} must be a number", index + 1))),
        }
    }

    /// An integer argument. Floats are truncated.
    pub fn int(&self, index: usize) -> Result<i64, FunctionError> {
        Ok(match self.number(index)? {
            Number::Int(n) => n,
            Number::Float(f) => f.trunc() as i64,
        })
    }

    pub fn float(&self, index: usize) -> Result<f64, FunctionError> {
        Ok(self.number(index)?.as_f64())
    }

    pub fn sequence(&self, index: usize) -> Result<&'a [Value], FunctionError> {
        self.value(index)
            .as_sequence()
            .ok_or_else(|| self.invalid(format!("argument {} must be a sequence", index + 1)))
    }

    pub fn mapping(&self, index: usize) -> Result<&'a Mapping, FunctionError> {
        self.value(index)
            .as_mapping()
            .ok_or_else(|| self.invalid(format!("argument {} must be a mapping", index + 1)))
    }

    /// Build an [`FunctionError::InvalidArgument`] for this call.
    pub fn invalid(&self, message: impl Into<String>) -> FunctionError {
        FunctionError::InvalidArgument {
            function: self.function.to_string(),
            message: message.into(),
        }
    }
}

fn parse_number(s: &str) -> Option<Number> {
    if s.is_empty() {
        return Some(Number::Int(0));
    }
    s.parse::<i64>()
        .map(Number::Int)
        .or_else(|_| s.parse::<f64>().map(Number::Float))
        .ok()
}
