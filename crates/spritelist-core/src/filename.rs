//! Local filename for a downloaded sprite.

/// Extension used when the image URL's last segment has none.
const DEFAULT_EXTENSION: &str = "png";

/// Derives `{identifier}.{ext}` for an expanded image URL.
///
/// The extension is taken from the last path segment of `image_url` (query
/// and fragment ignored), so `.../official-artwork/25.png` gives `25.png` and
/// a `.webp` template gives `25.webp`.
pub fn artwork_filename(identifier: &str, image_url: &str) -> String {
    let ext = extension_from_url(image_url).unwrap_or(DEFAULT_EXTENSION);
    format!("{}.{}", sanitize_stem(identifier), ext)
}

fn extension_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next()?;
    let segment = path.rsplit('/').next()?;
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}

/// Replaces NUL, path separators and control characters with `_`.
fn sanitize_stem(identifier: &str) -> String {
    identifier
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}
