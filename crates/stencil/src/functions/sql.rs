//! SQL literal escaping.

use crate::functions::FunctionError;
use crate::types::{Scalar, Value};

/// Render `value` as a MySQL literal.
///
/// Strings are single-quoted and escaped, sequences become a
/// comma-separated list, and numbers are written bare. Anything else is
/// JSON-encoded and quoted as a string.
///
/// # Example
///
/// ```
/// use stencil::Value;
/// use stencil::functions::sql::sql_escape;
///
/// let list = Value::sequence(["a", "b'c"]);
/// assert_eq!(sql_escape(&list).unwrap(), r"'a', 'b\'c'");
/// ```
pub fn sql_escape(value: &Value) -> Result<String, FunctionError> {
    match value {
        Value::Scalar(Scalar::String(s)) => Ok(quote(s)),
        Value::Scalar(Scalar::Integer(n)) => Ok(n.to_string()),
        Value::Scalar(Scalar::Float(f)) => Ok(f.to_string()),
        Value::Sequence(items) => {
            let escaped = items.iter().map(sql_escape).collect::<Result<Vec<_>, _>>()?;
            Ok(escaped.join(", "))
        }
        Value::Scalar(Scalar::Null | Scalar::Bool(_)) | Value::Mapping(_) | Value::Absent => {
            Ok(quote(&serde_json::to_string(value)?))
        }
    }
}

/// Quote a string, escaping NUL, newline, carriage return, backslash,
/// single quote and Ctrl-Z.
pub fn quote(source: &str) -> String {
    let mut dest = String::with_capacity(source.len() * 2 + 2);
    dest.push('\'');
    for c in source.chars() {
        let escape = match c {
            '\0' => Some('0'),
            '\n' => Some('n'),
            '\r' => Some('r'),
            '\\' => Some('\\'),
            '\'' => Some('\''),
            '\u{1a}' => Some('Z'),
            _ => None,
        };
        match escape {
            Some(e) => {
                dest.push('\\');
                dest.push(e);
            }
            None => dest.push(c),
        }
    }
    dest.push('\'');
    dest
}
