// SVG text processing for generated logos
// Markup is handled as opaque text: every inspection and rewrite is a pattern
// match over the string, never a DOM parse.

use regex::Regex;
use std::sync::LazyLock;

mod colors;
mod data_url;
mod inspect;
mod normalize;
mod preview;
mod transform;
mod validate;

pub use colors::{extract_colors, MAX_COLORS};
pub use data_url::{to_data_url, DATA_URL_PREFIX};
pub use inspect::{inspect, SvgInfo};
pub use normalize::normalize;
pub use preview::{
    build_preview, placeholder, Preview, PreviewOutcome, DEFAULT_PLACEHOLDER_LABEL,
    DEFAULT_PLACEHOLDER_SIZE, PREVIEW_SIZE, TRANSPARENT,
};
pub use transform::{add_background, resize, PassthroughReason, Rewrite};
pub use validate::{validate, SvgIssue, ValidationResult};

// ============================================================================
// SHARED ATTRIBUTE PATTERNS
// ============================================================================

// Quotes are matched independently, so `width='10"` is accepted as well.
static RE_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"width=['"]([0-9.]+)['"]"#).expect("valid width regex"));
static RE_HEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"height=['"]([0-9.]+)['"]"#).expect("valid height regex"));

/// Read a `[0-9.]+` capture the way a lenient float reader does: the longest
/// valid numeric prefix wins, and no valid prefix reads as zero.
fn lenient_number(text: &str) -> f64 {
    let end = text
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .nth(1)
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    text[..end].parse().unwrap_or(0.0)
}

/// Format a number for an attribute value (`100`, `12.5`)
fn format_number(value: f64) -> String {
    format!("{}", value)
}
