//! Identifier extraction from a resource URL.

/// Returns the last `/`-separated segment of `url` after stripping trailing
/// slashes, or `None` if that segment is empty.
///
/// The URL is treated as plain text: no scheme or host is required, and a
/// string without any `/` is its own identifier.
pub fn identifier_from_url(url: &str) -> Option<&str> {
    let trimmed = url.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(segment)
}
