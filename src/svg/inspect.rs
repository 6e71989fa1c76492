use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::{lenient_number, RE_HEIGHT, RE_WIDTH};

static RE_VIEW_BOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"viewBox=['"]([0-9\s.-]+)['"]"#).expect("valid viewBox regex")
});

/// Surface facts read from SVG markup
///
/// `is_valid` only says the text contains an opening `<svg` and a closing
/// `</svg>`; nesting and attribute syntax are never checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgInfo {
    /// First `width="..."` value in the document, 0 when absent
    pub width: f64,
    /// First `height="..."` value in the document, 0 when absent
    pub height: f64,
    /// Raw `viewBox` attribute value
    pub view_box: Option<String>,
    pub is_valid: bool,
}

pub fn inspect(svg: &str) -> SvgInfo {
    let number = |re: &Regex| {
        re.captures(svg)
            .map(|caps| lenient_number(&caps[1]))
            .unwrap_or(0.0)
    };

    SvgInfo {
        width: number(&*RE_WIDTH),
        height: number(&*RE_HEIGHT),
        view_box: RE_VIEW_BOX.captures(svg).map(|caps| caps[1].to_string()),
        is_valid: svg.contains("<svg") && svg.contains("</svg>"),
    }
}
