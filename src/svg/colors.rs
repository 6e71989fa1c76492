use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Maximum number of colors reported for one document
pub const MAX_COLORS: usize = 10;

static RE_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Fa-f]{6}").expect("valid hex color regex"));
static RE_RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgb\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)").expect("valid rgb regex")
});

// Defaults that say nothing about a palette
const DEFAULT_COLORS: [&str; 2] = ["#000000", "#FFFFFF"];

/// Collect the palette of a document as uppercase `#RRGGBB` strings.
///
/// Hex literals are gathered first, then `rgb()` literals, each in document
/// order; duplicates, pure black and pure white are dropped.
pub fn extract_colors(svg: &str) -> Vec<String> {
    let mut colors: Vec<String> = Vec::new();

    for hex in RE_HEX.find_iter(svg) {
        push_unique(&mut colors, hex.as_str().to_ascii_uppercase());
    }

    for caps in RE_RGB.captures_iter(svg) {
        match rgb_to_hex(&caps) {
            Some(hex) => push_unique(&mut colors, hex),
            None => tracing::debug!(literal = &caps[0], "skipping rgb() literal with channel out of range"),
        }
    }

    colors
        .into_iter()
        .filter(|color| !DEFAULT_COLORS.contains(&color.as_str()))
        .take(MAX_COLORS)
        .collect()
}

fn push_unique(colors: &mut Vec<String>, color: String) {
    if !colors.contains(&color) {
        colors.push(color);
    }
}

// Channels above 255 reject the whole literal
fn rgb_to_hex(caps: &Captures<'_>) -> Option<String> {
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    Some(format!("#{:02X}{:02X}{:02X}", r, g, b))
}
