//! Turn a list document into artwork entries.

use crate::document::ApiDocument;
use crate::error::{ListError, SchemaError};
use crate::filename::artwork_filename;
use crate::identifier::identifier_from_url;
use crate::sprite::SpriteTemplate;

/// One record of the input, resolved to an image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkEntry {
    /// Position of the record in `results`.
    pub index: usize,
    pub identifier: String,
    pub image_url: String,
    /// Local filename a downloader would save the image as.
    pub filename: String,
}

/// Resolves every record of `doc` against `template`, preserving order.
///
/// Stops at the first record without a `url` or without a usable
/// identifier; no entries are returned in that case.
pub fn generate(
    doc: &ApiDocument,
    template: &SpriteTemplate,
) -> Result<Vec<ArtworkEntry>, ListError> {
    let mut entries = Vec::with_capacity(doc.results.len());

    for (index, record) in doc.results.iter().enumerate() {
        let url = match record.url.as_deref() {
            Some(url) => url,
            None => {
                tracing::warn!(index, name = ?record.name(), "record has no url");
                return Err(SchemaError::MissingUrl { index }.into());
            }
        };

        let identifier = match identifier_from_url(url) {
            Some(id) => id,
            None => {
                tracing::warn!(index, url, "record url yields an empty identifier");
                return Err(SchemaError::EmptyIdentifier {
                    index,
                    url: url.to_string(),
                }
                .into());
            }
        };

        let image_url = template.expand(identifier);
        let filename = artwork_filename(identifier, &image_url);
        tracing::trace!(index, identifier, name = ?record.name(), %image_url, "resolved record");

        entries.push(ArtworkEntry {
            index,
            identifier: identifier.to_string(),
            image_url,
            filename,
        });
    }

    tracing::info!(
        entries = entries.len(),
        template = template.as_str(),
        "generated artwork entries"
    );
    Ok(entries)
}
