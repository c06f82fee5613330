//! Path building for object-scoped endpoints.

use std::borrow::Cow;

use billing_types::UpstreamError;

/// Percent-encodes an object identifier so it occupies exactly one path segment.
///
/// Empty and dot-only identifiers would address the parent collection after
/// URL normalization, so they are refused before any request is made.
pub(crate) fn segment(id: &str) -> Result<Cow<'_, str>, UpstreamError> {
    if matches!(id, "" | "." | "..") {
        return Err(UpstreamError::InvalidIdentifier(id.to_string()));
    }
    Ok(urlencoding::encode(id))
}
