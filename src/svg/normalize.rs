use regex::Regex;
use std::sync::LazyLock;

use super::{format_number, inspect};

static RE_XML_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<\?xml[^>]*\?>\s*").expect("valid xml declaration regex"));
static RE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment regex"));
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Strip declarations and comments, collapse whitespace, and backfill a
/// `viewBox` from `width`/`height` when none is declared.
///
/// Applying this twice gives the same result as applying it once.
pub fn normalize(svg: &str) -> String {
    let stripped = strip_prologue_and_comments(svg);
    let mut normalized = RE_WHITESPACE.replace_all(&stripped, " ").trim().to_string();

    if !normalized.contains("viewBox") && normalized.contains("<svg") {
        let info = inspect(&normalized);
        if info.width != 0.0 && info.height != 0.0 {
            let tag = format!(
                r#"<svg viewBox="0 0 {} {}""#,
                format_number(info.width),
                format_number(info.height)
            );
            normalized = normalized.replacen("<svg", &tag, 1);
        } else {
            tracing::debug!("no viewBox and no usable width/height; leaving root tag as is");
        }
    }

    normalized
}

// Removing one construct can splice together another (`<!<!-- -->--x-->`),
// so strip until nothing matches.
fn strip_prologue_and_comments(svg: &str) -> String {
    let mut current = svg.to_string();
    loop {
        let without_decl = RE_XML_DECL.replace_all(&current, "");
        let next = RE_COMMENT.replace_all(&without_decl, "").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}
