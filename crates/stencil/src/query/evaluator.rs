//! Recursive descent of a path over a [`Value`].
//!
//! Each level consumes one segment. A filter segment is carried down as a
//! pending predicate and tested against the first mapping reached by
//! further traversal. Every failure collapses to [`Value::Absent`]; the
//! reason is only traced through `log`.

use log::trace;

use crate::query::{Path, Segment};
use crate::types::{Mapping, Value};

/// Evaluate `path` against `value`.
///
/// Never fails: a missing field, an invalid index, a failed filter or a
/// segment applied to a scalar all yield `Absent`.
///
/// # Example
///
/// ```
/// use stencil::Value;
/// use stencil::query::{Path, evaluate};
///
/// let data = Value::mapping([(
///     "data",
///     Value::sequence([
///         Value::mapping([("iso", "GB"), ("name", "Great Britain")]),
///         Value::mapping([("iso", "US"), ("name", "United States")]),
///     ]),
/// )]);
///
/// let gb = evaluate(&Path::parse("data.[iso=GB]"), &data);
/// assert_eq!(gb.get("name"), Value::from("Great Britain"));
/// assert!(evaluate(&Path::parse("data.[iso=FR]"), &data).is_absent());
/// ```
pub fn evaluate(path: &Path, value: &Value) -> Value {
    descend(path.segments(), value, None)
}

/// Parse `path` and evaluate it against `value`.
///
/// This is the `filter` template function.
pub fn filter_path(value: &Value, path: &str) -> Value {
    evaluate(&Path::parse(path), value)
}

/// A single-key equality test from a `[key=value]` segment.
#[derive(Debug, Clone, Copy)]
struct Predicate<'p> {
    key: &'p str,
    value: &'p str,
}

impl Predicate<'_> {
    /// Loose equality: the field's canonical string form against the literal.
    fn matches(&self, fields: &Mapping) -> bool {
        fields
            .get(self.key)
            .and_then(Value::as_scalar)
            .is_some_and(|scalar| scalar.canonical() == self.value)
    }
}

/// What the current level does with the value in hand.
#[derive(Debug, Clone, Copy)]
enum Step<'p> {
    /// Select one field or index.
    Select(&'p str),
    /// Visit every field or element; `level` is passed down to each visit.
    Spread { level: Option<Predicate<'p>> },
}

fn descend<'p>(segments: &'p [Segment], value: &Value, pending: Option<Predicate<'p>>) -> Value {
    let (step, rest) = match segments.split_first() {
        Some((Segment::Field(name), rest)) => (Step::Select(name), rest),
        Some((Segment::Wildcard, rest)) => (Step::Spread { level: None }, rest),
        Some((Segment::Filter { key, value: literal }, rest)) => {
            let level = Predicate {
                key,
                value: literal,
            };
            (Step::Spread { level: Some(level) }, rest)
        }
        None => match pending {
            None => return value.clone(),
            // The end of the path is where a pending filter gets tested.
            Some(_) => (Step::Spread { level: None }, segments),
        },
    };

    match (value, step) {
        (Value::Mapping(fields), Step::Spread { level }) => {
            if let Some(predicate) = pending {
                if !predicate.matches(fields) {
                    trace!(
                        "filter mismatch [{}={}]",
                        predicate.key,
                        predicate.value
                    );
                    return Value::Absent;
                }
            }
            // Misses stay in the mapping as `Absent` values.
            let collected: Mapping = fields
                .iter()
                .map(|(key, field)| (key.clone(), descend(rest, field, level)))
                .collect();
            if collected.is_empty() {
                Value::Absent
            } else {
                Value::from(collected)
            }
        }
        (Value::Mapping(fields), Step::Select(name)) => match fields.get(name) {
            Some(field) => descend(rest, field, None),
            None => {
                trace!("key not present [key:{name}]");
                Value::Absent
            }
        },
        (Value::Sequence(_), _) if pending.is_some() => Value::empty_sequence(),
        (Value::Sequence(items), Step::Spread { level }) => {
            let mut collected: Vec<Value> = items
                .iter()
                .map(|item| descend(rest, item, level))
                .filter(|result| !result.is_absent())
                .collect();
            match collected.len() {
                0 => Value::Absent,
                1 => collected.pop().unwrap_or_default(),
                _ => Value::from(collected),
            }
        }
        (Value::Sequence(items), Step::Select(name)) => match name.parse::<usize>() {
            Ok(index) => match items.get(index) {
                Some(item) => descend(rest, item, None),
                None => {
                    trace!("index out of bounds [index:{index}] [len:{}]", items.len());
                    Value::Absent
                }
            },
            Err(_) => {
                trace!("not an index [key:{name}]");
                Value::Absent
            }
        },
        (Value::Scalar(_) | Value::Absent, _) => Value::Absent,
    }
}
