use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static RE_OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<svg[^>]*>").expect("valid svg tag regex"));

/// Outcome of a validation pass; every violation found is listed in check order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Structural problems detected in SVG markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgIssue {
    Empty,
    MissingOpeningTag,
    MissingClosingTag,
    MissingNamespace,
}

impl fmt::Display for SvgIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SvgIssue::Empty => "SVG content is empty",
            SvgIssue::MissingOpeningTag => "Missing SVG opening tag",
            SvgIssue::MissingClosingTag => "Missing SVG closing tag",
            SvgIssue::MissingNamespace => "Missing XML namespace",
        })
    }
}

pub fn validate(svg: &str) -> ValidationResult {
    if svg.is_empty() {
        return ValidationResult::from_errors(vec![SvgIssue::Empty.to_string()]);
    }

    let mut issues = Vec::new();

    if !svg.contains("<svg") {
        issues.push(SvgIssue::MissingOpeningTag);
    }

    if !svg.contains("</svg>") {
        issues.push(SvgIssue::MissingClosingTag);
    }

    // Namespace is only checked when an opening tag can be matched at all
    if let Some(tag) = RE_OPEN_TAG.find(svg) {
        if !tag.as_str().contains("xmlns") {
            issues.push(SvgIssue::MissingNamespace);
        }
    }

    ValidationResult::from_errors(issues.iter().map(ToString::to_string).collect())
}
