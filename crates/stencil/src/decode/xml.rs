//! XML decoding.
//!
//! Documents map onto values the way most XML-to-map converters do:
//! - the document is a single-key mapping `{root_tag: root}`
//! - an element with only text is a string scalar (`""` when empty)
//! - attributes become `-name` keys
//! - repeated child tags become a sequence in document order
//! - text next to attributes or children becomes `#text`

use std::collections::btree_map::Entry;
use std::io::Read;
use std::mem;
use std::sync::Arc;

use roxmltree::{Document, Node};

use crate::decode::DecodeError;
use crate::types::{Mapping, Value};

/// Prefix for attribute keys.
pub const ATTRIBUTE_PREFIX: &str = "-";

/// Key for element text that sits next to attributes or child elements.
pub const TEXT_KEY: &str = "#text";

/// Decode an XML document.
pub fn decode_xml(input: &str) -> Result<Value, DecodeError> {
    let doc = Document::parse(input)?;
    let root = doc.root_element();
    Ok(Value::mapping([(root.tag_name().name(), element_value(root))]))
}

/// Decode an XML document from a reader.
pub fn read_xml(content: &mut dyn Read) -> Result<Value, DecodeError> {
    let mut input = String::new();
    content.read_to_string(&mut input)?;
    decode_xml(&input)
}

fn element_value(node: Node<'_, '_>) -> Value {
    let mut fields = Mapping::new();
    for attribute in node.attributes() {
        fields.insert(
            format!("{ATTRIBUTE_PREFIX}{}", attribute.name()),
            attribute.value().into(),
        );
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            insert_child(&mut fields, child.tag_name().name(), element_value(child));
        } else if child.is_text() {
            text.push_str(child.text().unwrap_or_default());
        }
    }

    let text = text.trim();
    if fields.is_empty() {
        return text.into();
    }
    if !text.is_empty() {
        fields.insert(TEXT_KEY.to_string(), text.into());
    }
    Value::from(fields)
}

/// Element values are never sequences, so a sequence under `name` can only
/// come from an earlier repetition of the same tag.
fn insert_child(fields: &mut Mapping, name: &str, value: Value) {
    match fields.entry(name.to_string()) {
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
        Entry::Occupied(mut slot) => match slot.get_mut() {
            Value::Sequence(items) => Arc::make_mut(items).push(value),
            existing => {
                let first = mem::take(existing);
                *existing = Value::from(vec![first, value]);
            }
        },
    }
}
