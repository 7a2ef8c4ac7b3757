//! Error types for the document decoders.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while decoding a document into a [`crate::Value`].
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No decoder is registered for the requested format.
    #[error("unknown format '{format}'")]
    UnknownFormat { format: String },

    /// File I/O error when opening or reading a document.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error on an already open reader.
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),

    /// Malformed JSON.
    #[error("can't parse json at {line}:{column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },

    /// Malformed XML.
    #[error("can't parse xml at {line}:{column}: {message}")]
    Xml {
        line: usize,
        column: usize,
        message: String,
    },

    /// Malformed CSV.
    #[error("can't parse csv: {0}")]
    Csv(#[from] csv::Error),

    /// Failure reported by a user-registered decoder.
    #[error("can't parse {format}: {message}")]
    Custom { format: String, message: String },
}

impl DecodeError {
    /// Line and column of the failure, when the decoder reports one.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            DecodeError::Json { line, column, .. } | DecodeError::Xml { line, column, .. } => {
                Some((*line, *column))
            }
            DecodeError::Csv(e) => e.position().map(|p| (p.line() as usize, 1)),
            DecodeError::UnknownFormat { .. }
            | DecodeError::Io { .. }
            | DecodeError::Read(_)
            | DecodeError::Custom { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        DecodeError::Json {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

impl From<roxmltree::Error> for DecodeError {
    fn from(e: roxmltree::Error) -> Self {
        let pos = e.pos();
        DecodeError::Xml {
            line: pos.row as usize,
            column: pos.col as usize,
            message: e.to_string(),
        }
    }
}
