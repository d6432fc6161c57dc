//! Read and shape-check a list document.

use serde_json::Value;
use std::path::Path;

use crate::error::{ListError, ParseError, SchemaError};

use super::parse::ApiDocument;

/// Reads `path` and parses it as a list document.
///
/// An unreadable file or invalid JSON is a [`ParseError`]; JSON without a
/// `results` array of objects is a [`SchemaError`].
pub fn load_document(path: &Path) -> Result<ApiDocument, ListError> {
    let bytes = std::fs::read(path).map_err(|source| ParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = parse_document(&bytes)?;
    tracing::debug!(
        path = %path.display(),
        records = doc.results.len(),
        "loaded list document"
    );
    Ok(doc)
}

/// Parses an in-memory list document.
pub fn parse_document(bytes: &[u8]) -> Result<ApiDocument, ListError> {
    let value: Value = serde_json::from_slice(bytes).map_err(ParseError::Json)?;

    // Distinguish "no results at all" from "results of the wrong type".
    if value
        .as_object()
        .is_some_and(|obj| !obj.contains_key("results"))
    {
        return Err(SchemaError::MissingResults.into());
    }

    serde_json::from_value(value).map_err(|e| SchemaError::Shape(e).into())
}
