//! JSON and XML encoding, decoding and hashing.
//!
//! XML output mirrors what [`decode_xml`] reads: keys starting with `-`
//! are attributes, `#text` is element text, and sequences repeat their
//! parent's tag.

use md5::{Digest, Md5};
use quick_xml::escape::escape;

use crate::decode::{ATTRIBUTE_PREFIX, TEXT_KEY, decode_json, decode_xml};
use crate::functions::FunctionError;
use crate::types::{Mapping, Value};

/// Root tag used by [`xml_encode`] when a mapping has more than one key.
pub const DOCUMENT_TAG: &str = "doc";

const XML_HEADER: &str = "<?xml version=\"1.0\"?>\n";

pub fn json_encode(value: &Value) -> Result<String, FunctionError> {
    Ok(serde_json::to_string(value)?)
}

/// JSON with two-space indentation.
pub fn json_pretty(value: &Value) -> Result<String, FunctionError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Escape a string for use inside a JSON string literal.
///
/// Non-string values are returned JSON-encoded.
pub fn json_escape(value: &Value) -> Result<String, FunctionError> {
    let encoded = serde_json::to_string(value)?;
    if value.as_str().is_none() {
        return Ok(encoded);
    }
    Ok(encoded
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .map_or_else(|| encoded.clone(), str::to_string))
}

pub fn json_decode(s: &str) -> Result<Value, FunctionError> {
    Ok(decode_json(s)?)
}

pub fn xml_decode(s: &str) -> Result<Value, FunctionError> {
    Ok(decode_xml(s)?)
}

/// Hex MD5 digest of the value's compact JSON encoding.
pub fn md5(value: &Value) -> Result<String, FunctionError> {
    let json = serde_json::to_string(value)?;
    Ok(hex::encode(Md5::digest(json.as_bytes())))
}

/// Encode a mapping as XML on one line.
///
/// A mapping with a single key uses that key as the root element;
/// anything else is wrapped in `<doc>`.
///
/// # Example
///
/// ```
/// use stencil::Value;
/// use stencil::functions::encode::xml_encode;
///
/// let doc = Value::mapping([("note", Value::mapping([("-lang", "en"), ("#text", "a < b")]))]);
/// let fields = doc.as_mapping().unwrap();
/// assert_eq!(xml_encode(fields), r#"<note lang="en">a &lt; b</note>"#);
/// ```
pub fn xml_encode(fields: &Mapping) -> String {
    let mut writer = XmlWriter::new(None);
    match single_entry(fields) {
        Some((name, value)) => writer.element(name, value, 0),
        None => writer.mapping_element(DOCUMENT_TAG, fields, 0),
    }
    writer.finish()
}

/// Encode `items` as a `root_tag` document with one `item_tag` element
/// per item, indented two spaces, with an XML declaration.
pub fn xml_array(items: &[Value], root_tag: &str, item_tag: &str) -> String {
    let mut writer = XmlWriter::new(Some("  "));
    if items.is_empty() {
        writer.mapping_element(root_tag, &Mapping::new(), 0);
    } else {
        let mut root = Mapping::new();
        root.insert(item_tag.to_string(), Value::sequence(items.iter().cloned()));
        writer.mapping_element(root_tag, &root, 0);
    }
    format!("{XML_HEADER}{}", writer.finish())
}

fn single_entry(fields: &Mapping) -> Option<(&str, &Value)> {
    let mut entries = fields.iter();
    match (entries.next(), entries.next()) {
        (Some((name, value)), None) => Some((name.as_str(), value)),
        _ => None,
    }
}

struct XmlWriter {
    out: String,
    indent: Option<&'static str>,
}

impl XmlWriter {
    fn new(indent: Option<&'static str>) -> Self {
        Self {
            out: String::new(),
            indent,
        }
    }

    fn finish(self) -> String {
        self.out
    }

    /// Start an element on its own line when indenting.
    fn line(&mut self, depth: usize) {
        if let Some(indent) = self.indent {
            if !self.out.is_empty() {
                self.out.push('\n');
            }
            self.out.push_str(&indent.repeat(depth));
        }
    }

    fn element(&mut self, name: &str, value: &Value, depth: usize) {
        match value {
            Value::Sequence(items) => {
                for item in items.iter() {
                    self.element(name, item, depth);
                }
            }
            Value::Mapping(fields) => self.mapping_element(name, fields, depth),
            Value::Scalar(s) if !s.is_blank() => {
                self.line(depth);
                let text = s.canonical();
                self.out.push_str(&format!("<{name}>{}</{name}>", escape(text.as_str())));
            }
            Value::Scalar(_) | Value::Absent => {
                self.line(depth);
                self.out.push_str(&format!("<{name}/>"));
            }
        }
    }

    fn mapping_element(&mut self, name: &str, fields: &Mapping, depth: usize) {
        let mut attributes = String::new();
        let mut text = String::new();
        let mut children = Vec::new();
        for (key, child) in fields {
            match (key.strip_prefix(ATTRIBUTE_PREFIX), child.as_scalar()) {
                (Some(attribute), Some(scalar)) => {
                    let value = scalar.canonical();
                    attributes.push_str(&format!(" {attribute}=\"{}\"", escape(value.as_str())));
                }
                _ if key == TEXT_KEY => text = child.render(),
                _ => children.push((key, child)),
            }
        }

        self.line(depth);
        self.out.push_str(&format!("<{name}{attributes}"));
        if children.is_empty() {
            if text.is_empty() {
                self.out.push_str("/>");
            } else {
                self.out.push_str(&format!(">{}</{name}>", escape(text.as_str())));
            }
            return;
        }

        self.out.push('>');
        self.out.push_str(&escape(text.as_str()));
        for (key, child) in children {
            self.element(key, child, depth + 1);
        }
        self.line(depth);
        self.out.push_str(&format!("</{name}>"));
    }
}
