//! CSV decoding.

use std::io::Read;

use bon::Builder;
use csv::{ReaderBuilder, Trim};
use log::error;

use crate::decode::DecodeError;
use crate::types::Value;

/// Options for reading delimited text.
///
/// # Example
///
/// ```
/// use stencil::decode::{CsvOptions, decode_csv};
///
/// let options = CsvOptions::builder().delimiter(b';').build();
/// let rows = decode_csv("a;b\n1;2\n".as_bytes(), &options).unwrap();
/// assert_eq!(rows.at(0).get("a"), stencil::Value::from("1"));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct CsvOptions {
    /// Field delimiter.
    #[builder(default = b',')]
    pub delimiter: u8,

    /// Whether the first row names the columns.
    ///
    /// With headers each row becomes a mapping; without, each row is a
    /// sequence of strings.
    #[builder(default = true)]
    pub has_headers: bool,

    /// Accept rows with a different number of fields than the header.
    #[builder(default = true)]
    pub flexible: bool,

    /// Trim whitespace around fields.
    #[builder(default)]
    pub trim: bool,

    /// Lines starting with this byte are skipped.
    pub comment: Option<u8>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions::builder().build()
    }
}

/// Decode delimited text into a sequence of rows.
///
/// A header that cannot be read is logged and yields an empty sequence.
pub fn decode_csv(content: impl Read, options: &CsvOptions) -> Result<Value, DecodeError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_headers)
        .flexible(options.flexible)
        .trim(if options.trim { Trim::All } else { Trim::None })
        .comment(options.comment)
        .from_reader(content);

    let mut rows = Vec::new();
    if options.has_headers {
        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(e) => {
                error!("error reading csv header: {e}");
                return Ok(Value::empty_sequence());
            }
        };
        for record in reader.records() {
            let record = record?;
            rows.push(Value::mapping(headers.iter().zip(record.iter())));
        }
    } else {
        for record in reader.records() {
            let record = record?;
            rows.push(Value::sequence(record.iter()));
        }
    }
    Ok(Value::from(rows))
}

/// Decode comma-separated text with a header row from a reader.
pub fn read_csv(content: &mut dyn Read) -> Result<Value, DecodeError> {
    decode_csv(content, &CsvOptions::default())
}
