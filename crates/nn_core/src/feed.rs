//! Feed titles are opaque strings that double as route keys, so they are
//! percent-encoded whenever they are embedded in a path or query.

/// Percent-encodes one path segment or query value.
pub fn encode_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// Decodes a raw route segment. Segments that do not decode to valid UTF-8
/// are returned unchanged.
pub fn decode_segment(segment: &str) -> String {
    match urlencoding::decode(segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::warn!("Could not decode route segment {:?}: {}", segment, e);
            segment.to_string()
        }
    }
}

/// Route of the per-feed article table.
pub fn feed_href(feed_title: &str) -> String {
    format!("/feeds/{}", encode_segment(feed_title))
}
