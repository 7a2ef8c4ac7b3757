//! Decoders that turn JSON, XML and CSV documents into [`Value`]s.
//!
//! [`Parser`] keeps a table of decoders keyed by lower-case format name.
//! `json`, `xml` and `csv` are built in; more can be registered.

mod delimited;
mod error;
mod json;
mod xml;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

pub use self::delimited::{CsvOptions, decode_csv, read_csv};
pub use self::error::DecodeError;
pub use self::json::{decode_json, read_json};
pub use self::xml::{ATTRIBUTE_PREFIX, TEXT_KEY, decode_xml, read_xml};
use crate::types::Value;

/// Decoder function signature.
pub type ParserFn = fn(&mut dyn Read) -> Result<Value, DecodeError>;

/// A table of document decoders keyed by format name.
///
/// # Example
///
/// ```
/// use stencil::decode::Parser;
///
/// let parser = Parser::new();
/// let doc = parser.parse_str(r#"{"a":["b","c"]}"#, "json").unwrap();
/// assert_eq!(doc.get("a").at(1), stencil::Value::from("c"));
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    parsers: BTreeMap<String, ParserFn>,
}

impl Parser {
    /// Create a parser with the built-in `json`, `xml` and `csv` decoders.
    pub fn new() -> Self {
        let mut parser = Self::empty();
        parser.register_parser("json", read_json);
        parser.register_parser("xml", read_xml);
        parser.register_parser("csv", read_csv);
        parser
    }

    /// Create a parser with no decoders.
    pub fn empty() -> Self {
        Self {
            parsers: BTreeMap::new(),
        }
    }

    /// Register or override the decoder for a format.
    ///
    /// Format names are case-insensitive.
    pub fn register_parser(&mut self, format: &str, parser: ParserFn) {
        debug!("registering decoder for '{format}'");
        self.parsers.insert(format.to_lowercase(), parser);
    }

    /// Registered format names, sorted.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.parsers.keys().map(String::as_str)
    }

    /// Decode `content` using the decoder registered for `format`.
    pub fn parse_struct(&self, mut content: impl Read, format: &str) -> Result<Value, DecodeError> {
        let parser = self
            .parsers
            .get(&format.to_lowercase())
            .ok_or_else(|| DecodeError::UnknownFormat {
                format: format.to_string(),
            })?;
        parser(&mut content)
    }

    /// Decode an in-memory document.
    pub fn parse_str(&self, content: &str, format: &str) -> Result<Value, DecodeError> {
        self.parse_struct(content.as_bytes(), format)
    }

    /// Open `path` and decode it.
    pub fn read_struct(&self, path: impl AsRef<Path>, format: &str) -> Result<Value, DecodeError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DecodeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("decoding '{}' as {format}", path.display());
        self.parse_struct(BufReader::new(file), format)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
