use super::normalize;

pub const DATA_URL_PREFIX: &str = "data:image/svg+xml;charset=UTF-8,";

/// Normalize and percent-encode a document into a `data:` URL.
///
/// Returns `None` when nothing is left after normalization; an empty image
/// URL is never produced.
pub fn to_data_url(svg: &str) -> Option<String> {
    let normalized = normalize(svg);
    if normalized.is_empty() {
        tracing::warn!("refusing to encode an empty document as a data URL");
        return None;
    }

    Some(format!("{}{}", DATA_URL_PREFIX, urlencoding::encode(&normalized)))
}
