//! String helpers.
//!
//! Truncation and padding count grapheme clusters, so `"e\u{301}"` is one
//! column.

use std::collections::BTreeMap;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use unicode_segmentation::UnicodeSegmentation;

use crate::functions::FunctionError;
use crate::types::{Scalar, Value};

pub fn concat(parts: &[String]) -> String {
    parts.concat()
}

/// Replace every occurrence of `from` with `to`.
pub fn replace(input: &str, from: &str, to: &str) -> String {
    input.replace(from, to)
}

/// Replace every match of `pattern` in `text`. `$1` and `${name}` in `repl`
/// expand to capture groups.
pub fn re_replace_all(pattern: &str, repl: &str, text: &str) -> Result<String, FunctionError> {
    let re = Regex::new(pattern)?;
    Ok(re.replace_all(text, repl).into_owned())
}

/// Whether `pattern` matches anywhere in `text`.
pub fn matches(pattern: &str, text: &str) -> Result<bool, FunctionError> {
    Ok(Regex::new(pattern)?.is_match(text))
}

/// Capitalize the first letter of every word. Other letters are untouched.
pub fn title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_word_bounds() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Backslash-escape double quotes.
pub fn escape(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Split `s` on `sep`. An empty separator splits into characters.
pub fn explode(s: &str, sep: &str) -> Vec<String> {
    if sep.is_empty() {
        s.chars().map(String::from).collect()
    } else {
        s.split(sep).map(String::from).collect()
    }
}

/// The `num`th piece of `s` split on `sep`, or empty when there is none.
pub fn item(s: &str, sep: &str, num: i64) -> String {
    usize::try_from(num)
        .ok()
        .and_then(|index| explode(s, sep).into_iter().nth(index))
        .unwrap_or_default()
}

/// Look `item` up in a table written as `key:value|key:value`.
///
/// `pair_separator` splits entries and `key_separator` splits each entry.
/// The key `*` is the fallback; without one, an unmatched item is returned
/// as is. A malformed entry makes the whole lookup empty.
pub fn mapto(item: &str, table: &str, pair_separator: &str, key_separator: &str) -> String {
    let mut entries = BTreeMap::new();
    for entry in table.split(pair_separator) {
        let mut parts = entry.split(key_separator);
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            return String::new();
        };
        entries.insert(key, value);
    }
    entries
        .get(item)
        .or_else(|| entries.get("*"))
        .map_or_else(|| item.to_string(), |value| (*value).to_string())
}

/// `first` unless it is empty, then `second`.
pub fn ifthen(first: String, second: String) -> String {
    if first.is_empty() { second } else { first }
}

/// Empty when `first` is empty, otherwise `second`.
pub fn elseifthen(first: String, second: String) -> String {
    if first.is_empty() { first } else { second }
}

/// Lower-case URL slug: runs of anything but ASCII letters and digits
/// become a single `-`.
pub fn url_path(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// A lower-case name safe to use as a file name.
///
/// Slashes and the separators ` &_=+:` become `-`, accents are stripped,
/// and anything other than ASCII letters, digits, `-` and `.` is dropped.
pub fn sanitise(s: &str) -> String {
    let lowered = s.replace('/', " ").to_lowercase();
    let mut name = String::with_capacity(lowered.len());
    for c in lowered.trim_matches(' ').nfd().filter(|c| !is_combining_mark(*c)) {
        let c = if " &_=+:".contains(c) { '-' } else { c };
        if !(c.is_ascii_alphanumeric() || c == '-' || c == '.') {
            continue;
        }
        if c == '-' && name.ends_with('-') {
            continue;
        }
        name.push(c);
    }
    name
}

/// Truncate text to `length` columns. Integers and floats are padded on
/// the right to at least `length` instead; floats keep 4 decimals.
pub fn limit(data: &Value, length: usize) -> Value {
    match data.as_scalar() {
        Some(Scalar::String(s)) => truncate(s, length).into(),
        Some(Scalar::Integer(n)) => format!("{n:<length$}").into(),
        Some(Scalar::Float(f)) => format!("{f:<length$.4}").into(),
        _ => data.clone(),
    }
}

/// Exactly `length` columns, left-aligned.
///
/// Text is truncated or padded, integers are zero-filled to `length`
/// digits, floats keep 4 decimals. Anything else is `length` spaces.
pub fn fixlen(length: usize, data: &Value) -> String {
    fixed(length, data, Align::Left)
}

/// [`fixlen`], right-aligned.
pub fn fixlenr(length: usize, data: &Value) -> String {
    fixed(length, data, Align::Right)
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

fn fixed(length: usize, data: &Value, align: Align) -> String {
    let body = match data.as_scalar() {
        Some(Scalar::String(s)) => truncate(s, length),
        Some(Scalar::Integer(n)) => zero_filled(*n, length),
        Some(Scalar::Float(f)) => format!("{f:.4}"),
        _ => return " ".repeat(length),
    };
    pad(body, length, align)
}

/// Integer with at least `digits` digits, like `%.Nd`.
fn zero_filled(n: i64, digits: usize) -> String {
    if n == 0 && digits == 0 {
        return String::new();
    }
    let sign = if n < 0 { "-" } else { "" };
    format!("{sign}{:0>digits$}", n.unsigned_abs())
}

fn truncate(s: &str, length: usize) -> String {
    s.graphemes(true).take(length).collect()
}

fn pad(body: String, length: usize, align: Align) -> String {
    let width = body.graphemes(true).count();
    if width >= length {
        return body;
    }
    let fill = " ".repeat(length - width);
    match align {
        Align::Left => body + &fill,
        Align::Right => fill + &body,
    }
}

/// Empty text for absent, null and empty values, otherwise the value.
///
/// A sequence whose items are all empty collections counts as empty.
pub fn empty(value: &Value) -> Value {
    if is_empty_value(value) {
        Value::from("")
    } else {
        value.clone()
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Absent => true,
        Value::Scalar(s) => s.is_blank(),
        Value::Mapping(m) => m.is_empty(),
        Value::Sequence(items) => items.iter().all(is_empty_collection),
    }
}

fn is_empty_collection(value: &Value) -> bool {
    match value {
        Value::Mapping(m) => m.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Scalar(_) | Value::Absent => false,
    }
}
