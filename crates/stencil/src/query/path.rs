//! Dotted path expressions.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// One dot-delimited unit of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A field name against a mapping, or a base-10 index against a sequence.
    Field(String),

    /// An empty segment: traverse every field or element at this level.
    Wildcard,

    /// `[key=value]`: keep only mappings whose `key` field equals `value`.
    Filter { key: String, value: String },
}

impl Segment {
    /// Classify a single segment of a path string.
    ///
    /// A filter is split at its first `=`. A filter with no `=` matches an
    /// empty field value, and `[]` is a plain wildcard.
    pub fn parse(raw: &str) -> Segment {
        if raw.is_empty() {
            return Segment::Wildcard;
        }
        match raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            // `[]` carries no predicate.
            Some("") => Segment::Wildcard,
            Some(body) => {
                let (key, value) = body.split_once('=').unwrap_or((body, ""));
                Segment::Filter {
                    key: key.to_string(),
                    value: value.to_string(),
                }
            }
            None => Segment::Field(raw.to_string()),
        }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Segment::Field(name) => f.write_str(name),
            Segment::Wildcard => Ok(()),
            Segment::Filter { key, value } => write!(f, "[{key}={value}]"),
        }
    }
}

/// A parsed path expression.
///
/// Parsing never fails: any string splits into segments. Malformed filters
/// (unbalanced brackets) are treated as plain field names.
///
/// # Example
///
/// ```
/// use stencil::query::{Path, Segment};
///
/// let path = Path::parse("data.[iso=GB]");
/// assert_eq!(
///     path.segments(),
///     &[
///         Segment::Field("data".to_string()),
///         Segment::Filter { key: "iso".to_string(), value: "GB".to_string() },
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn parse(input: &str) -> Path {
        Path {
            segments: input.split('.').map(Segment::parse).collect(),
        }
    }

    pub fn from_segments(segments: Vec<Segment>) -> Path {
        Path { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(input: &str) -> Self {
        Path::parse(input)
    }
}
