//! Error types for template functions.

use std::fmt::{Display, Formatter, Result as FmtResult};

use strsim::levenshtein;
use thiserror::Error;

use crate::decode::DecodeError;

/// How many arguments a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    Between(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::Between(min, max) => (min..=max).contains(&count),
            Arity::AtLeast(min) => count >= min,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::Between(min, max) => write!(f, "{min} to {max}"),
            Arity::AtLeast(min) => write!(f, "at least {min}"),
        }
    }
}

/// An error returned by a template function.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// No function registered under this name.
    #[error("unknown function '{name}'{}", format_suggestions(suggestions))]
    UnknownFunction {
        name: String,
        suggestions: Vec<String>,
    },

    /// Wrong number of arguments.
    #[error("function '{function}' expects {expected} arguments, got {got}")]
    ArgumentCount {
        function: String,
        expected: Arity,
        got: usize,
    },

    /// An argument has the wrong shape or cannot be converted.
    #[error("function '{function}': {message}")]
    InvalidArgument { function: String, message: String },

    /// Invalid regular expression passed to `match` or `reReplaceAll`.
    #[error("invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    /// JSON encoding failed.
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// `json_decode` or `xml_decode` failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Malformed percent-encoding.
    #[error("invalid url escape in '{input}'")]
    UrlDecode { input: String },

    /// A date string does not match its layout.
    #[error("parsing time '{input}' as '{layout}': {message}")]
    DateParse {
        input: String,
        layout: String,
        message: String,
    },

    /// `div` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute up to three names similar to `name`, closest first.
///
/// Names of three characters or fewer allow an edit distance of 1, longer
/// names allow 2.
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
