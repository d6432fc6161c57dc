//! Error types for reading and transforming a list document.
//!
//! Every failure is fatal for the run: the CLI converts these into an
//! `anyhow` chain and exits non-zero.

use std::path::PathBuf;

/// Top-level error for loading a document and generating entries from it.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// The input could not be read or is not valid JSON.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[source] serde_json::Error),
}

/// Valid JSON that does not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("top-level object has no `results` field")]
    MissingResults,

    #[error("unexpected document shape: {0}")]
    Shape(#[source] serde_json::Error),

    #[error("record {index} has no `url` field")]
    MissingUrl { index: usize },

    #[error("record {index} has url {url:?} with no path segment to use as identifier")]
    EmptyIdentifier { index: usize, url: String },
}

impl ListError {
    /// True for errors caused by unreadable or malformed input.
    pub fn is_parse(&self) -> bool {
        matches!(self, ListError::Parse(_))
    }

    /// True for errors caused by well-formed JSON of the wrong shape.
    pub fn is_schema(&self) -> bool {
        matches!(self, ListError::Schema(_))
    }
}
