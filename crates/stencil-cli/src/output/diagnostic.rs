//! Miette diagnostic wrapper for document decode errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use stencil::DecodeError;
use thiserror::Error;

/// A miette-compatible diagnostic for malformed documents.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(stencil::decode))]
pub struct DecodeDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl DecodeDiagnostic {
    /// Create a diagnostic from a decode error that reports a position.
    ///
    /// Returns `None` when the error carries no line and column.
    pub fn from_decode_error(name: &str, content: &str, err: &DecodeError) -> Option<Self> {
        let (line, column) = err.position()?;

        // Sum of (line_length + 1) for lines before the error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Keep the label inside the source for miette
        let offset = offset.min(content.len());

        Some(DecodeDiagnostic {
            src: NamedSource::new(name, content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help: Some("check the document matches the selected --format".into()),
        })
    }
}
