use quick_xml::escape::escape;
use serde::Serialize;

use super::{add_background, inspect, normalize, resize};

/// Edge length of the canonical preview
pub const PREVIEW_SIZE: u32 = 200;
pub const DEFAULT_PLACEHOLDER_SIZE: u32 = 200;
pub const DEFAULT_PLACEHOLDER_LABEL: &str = "Logo";
/// Background value that means "no background rectangle"
pub const TRANSPARENT: &str = "transparent";

const INVALID_LABEL: &str = "Invalid SVG";
const ERROR_LABEL: &str = "Preview Error";

/// Preview document plus how it was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub svg: String,
    pub outcome: PreviewOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewOutcome {
    /// Input was resized, optionally backed, and normalized
    Rendered,
    /// Input failed the shallow validity check; `svg` is the "Invalid SVG" placeholder
    InvalidInput,
    /// Processing produced a document that is no longer valid; `svg` is the
    /// "Preview Error" placeholder
    Failed,
}

impl PreviewOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewOutcome::Rendered => "rendered",
            PreviewOutcome::InvalidInput => "invalid-input",
            PreviewOutcome::Failed => "failed",
        }
    }
}

/// Build the canonical 200x200 preview of a document.
///
/// Pass [`TRANSPARENT`] to skip the background rectangle.
pub fn build_preview(svg: &str, background_color: &str) -> Preview {
    if !inspect(svg).is_valid {
        tracing::debug!("preview input is not SVG markup; using placeholder");
        return Preview {
            svg: placeholder(PREVIEW_SIZE, PREVIEW_SIZE, INVALID_LABEL),
            outcome: PreviewOutcome::InvalidInput,
        };
    }

    let mut preview = resize(svg, f64::from(PREVIEW_SIZE)).into_svg();

    if background_color != TRANSPARENT {
        preview = add_background(&preview, background_color).into_svg();
    }

    let preview = normalize(&preview);

    // e.g. the only `</svg>` sat inside a comment that normalization removed
    if !inspect(&preview).is_valid {
        tracing::warn!("preview lost its svg tags during processing");
        return Preview {
            svg: placeholder(PREVIEW_SIZE, PREVIEW_SIZE, ERROR_LABEL),
            outcome: PreviewOutcome::Failed,
        };
    }

    Preview {
        svg: preview,
        outcome: PreviewOutcome::Rendered,
    }
}

/// Self-contained stand-in drawn when no usable logo is available
pub fn placeholder(width: u32, height: u32, label: &str) -> String {
    format!(
        r##"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">
    <rect width="100%" height="100%" fill="#f3f4f6" stroke="#e5e7eb" stroke-width="2"/>
    <text x="50%" y="50%" text-anchor="middle" dy="0.3em" font-family="Arial, sans-serif" font-size="24" fill="#6b7280">
      {label}
    </text>
  </svg>"##,
        label = escape(label)
    )
}
