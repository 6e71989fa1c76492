// Where a piece of logo content came from
// Generated logos arrive either as inline markup, as a `data:` URL, or as a
// plain link to a hosted image.

use base64::Engine;

use crate::error::SvgError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgSource<'a> {
    /// Markup to process as text
    Inline(&'a str),
    /// `data:` URL (base64 or percent-encoded)
    DataUrl(&'a str),
    /// Hosted image; never fetched or processed here
    Remote(&'a str),
}

impl<'a> SvgSource<'a> {
    pub fn classify(content: &'a str) -> Self {
        if content.starts_with("data:") {
            SvgSource::DataUrl(content)
        } else if content.starts_with("http://") || content.starts_with("https://") {
            SvgSource::Remote(content)
        } else {
            SvgSource::Inline(content)
        }
    }
}

/// Recover the markup embedded in a `data:` URL.
///
/// `data:image/svg+xml;base64,xxxxx` or `data:image/svg+xml,<svg>...</svg>`
pub fn decode_data_url(data_url: &str) -> Result<String, SvgError> {
    let (header, content) = data_url
        .split_once(',')
        .ok_or(SvgError::MissingPayload)?;

    if header.contains("base64") {
        let decoded = base64::engine::general_purpose::STANDARD.decode(content)?;
        Ok(String::from_utf8(decoded)?)
    } else {
        Ok(urlencoding::decode(content)?.into_owned())
    }
}
