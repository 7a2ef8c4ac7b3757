//! JSON decoding.

use std::io::Read;

use crate::decode::DecodeError;
use crate::types::Value;

/// Decode a JSON document.
///
/// Integers that fit in an `i64` stay integers; other numbers become floats.
/// `null` decodes to a present null scalar, not to `Absent`.
pub fn decode_json(input: &str) -> Result<Value, DecodeError> {
    let json: serde_json::Value = serde_json::from_str(input)?;
    Ok(json.into())
}

/// Decode a JSON document from a reader.
pub fn read_json(content: &mut dyn Read) -> Result<Value, DecodeError> {
    let json: serde_json::Value = serde_json::from_reader(content)?;
    Ok(json.into())
}
