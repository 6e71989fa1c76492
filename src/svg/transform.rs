use regex::NoExpand;

use super::{format_number, RE_HEIGHT, RE_WIDTH};

/// Result of a text rewrite. A rewrite that finds nothing to act on hands the
/// input back unchanged, together with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    Applied(String),
    Passthrough {
        svg: String,
        reason: PassthroughReason,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassthroughReason {
    /// Neither `width`/`height` nor a `viewBox` to size from
    NoDimensions,
    /// No `>` anywhere, so there is no tag end to insert after
    NoTagEnd,
}

impl Rewrite {
    pub fn is_applied(&self) -> bool {
        matches!(self, Rewrite::Applied(_))
    }

    pub fn into_svg(self) -> String {
        match self {
            Rewrite::Applied(svg) | Rewrite::Passthrough { svg, .. } => svg,
        }
    }
}

/// Set the first `width` and `height` attributes to `target_size`.
///
/// Documents sized only by a `viewBox` get both attributes injected right
/// after the first `<svg`.
pub fn resize(svg: &str, target_size: f64) -> Rewrite {
    let size = format_number(target_size);

    let matched = RE_WIDTH.is_match(svg) || RE_HEIGHT.is_match(svg);
    let scaled = RE_WIDTH.replace(svg, NoExpand(&format!(r#"width="{size}""#)));
    let scaled = RE_HEIGHT.replace(&scaled, NoExpand(&format!(r#"height="{size}""#)));
    let mut scaled = scaled.into_owned();

    let mut injected = false;
    if !scaled.contains("width=") && scaled.contains("viewBox") && scaled.contains("<svg") {
        let tag = format!(r#"<svg width="{size}" height="{size}""#);
        scaled = scaled.replacen("<svg", &tag, 1);
        injected = true;
    }

    if matched || injected {
        Rewrite::Applied(scaled)
    } else {
        tracing::debug!("resize found no width, height or viewBox to act on");
        Rewrite::Passthrough {
            svg: scaled,
            reason: PassthroughReason::NoDimensions,
        }
    }
}

/// Insert a full-bleed background rectangle right after the first `>`.
///
/// The first `>` is assumed to close the root `<svg ...>` tag.
pub fn add_background(svg: &str, color: &str) -> Rewrite {
    let Some(tag_end) = svg.find('>').map(|i| i + 1) else {
        tracing::debug!("no tag end found; background not added");
        return Rewrite::Passthrough {
            svg: svg.to_string(),
            reason: PassthroughReason::NoTagEnd,
        };
    };

    let rect = format!(r#"<rect width="100%" height="100%" fill="{color}"/>"#);
    let mut out = String::with_capacity(svg.len() + rect.len());
    out.push_str(&svg[..tag_end]);
    out.push_str(&rect);
    out.push_str(&svg[tag_end..]);

    Rewrite::Applied(out)
}
