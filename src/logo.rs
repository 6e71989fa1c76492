use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::svg::ValidationResult;

// ============================================================================
// CATALOGS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoStyle {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Phrase spliced into the design brief
    pub prompt_modifier: &'static str,
    /// Short description used in the provider prompt
    #[serde(skip)]
    pub provider_description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub value: &'static str,
    pub label: &'static str,
    pub colors: [&'static str; 3],
    pub prompt_modifier: &'static str,
}

/// Scheme value meaning "use the colors the user typed in"
pub const CUSTOM_SCHEME: &str = "custom";

pub static LOGO_STYLES: [LogoStyle; 6] = [
    LogoStyle {
        value: "minimalist",
        label: "Minimalist",
        description: "Clean, simple, modern design",
        prompt_modifier: "minimalist design with clean lines, simple geometric shapes, plenty of white space, modern typography",
        provider_description: "clean, simple, modern design with minimal elements",
    },
    LogoStyle {
        value: "corporate",
        label: "Corporate",
        description: "Professional, trustworthy, formal",
        prompt_modifier: "corporate professional design, trustworthy appearance, formal business style, conservative colors",
        provider_description: "professional, trustworthy, formal business appearance",
    },
    LogoStyle {
        value: "creative",
        label: "Creative",
        description: "Artistic, unique, expressive",
        prompt_modifier: "creative artistic design, unique visual elements, expressive shapes, innovative composition",
        provider_description: "artistic, unique, expressive with creative elements",
    },
    LogoStyle {
        value: "tech",
        label: "Tech/Modern",
        description: "Futuristic, digital, innovative",
        prompt_modifier: "modern tech design, futuristic elements, digital aesthetic, innovative geometric patterns",
        provider_description: "futuristic, digital, innovative with modern tech aesthetics",
    },
    LogoStyle {
        value: "vintage",
        label: "Vintage",
        description: "Classic, retro, timeless",
        prompt_modifier: "vintage retro design, classic typography, timeless elements, traditional craftsmanship feel",
        provider_description: "classic, retro, timeless with traditional elements",
    },
    LogoStyle {
        value: "playful",
        label: "Playful",
        description: "Fun, energetic, colorful",
        prompt_modifier: "playful fun design, energetic elements, vibrant colors, dynamic composition",
        provider_description: "fun, energetic, colorful with dynamic elements",
    },
];

pub static COLOR_SCHEMES: [ColorScheme; 6] = [
    ColorScheme {
        value: "monochrome",
        label: "Monochrome",
        colors: ["#000000", "#808080", "#FFFFFF"],
        prompt_modifier: "monochrome black and white design, grayscale palette, high contrast",
    },
    ColorScheme {
        value: "blue-professional",
        label: "Professional Blue",
        colors: ["#1E40AF", "#3B82F6", "#DBEAFE"],
        prompt_modifier: "professional blue color palette, trust and stability, corporate blue tones",
    },
    ColorScheme {
        value: "green-nature",
        label: "Nature Green",
        colors: ["#059669", "#10B981", "#D1FAE5"],
        prompt_modifier: "nature green color palette, growth and harmony, fresh green tones",
    },
    ColorScheme {
        value: "orange-energy",
        label: "Energy Orange",
        colors: ["#EA580C", "#F97316", "#FED7AA"],
        prompt_modifier: "energetic orange color palette, warmth and enthusiasm, vibrant orange tones",
    },
    ColorScheme {
        value: "purple-creative",
        label: "Creative Purple",
        colors: ["#7C3AED", "#8B5CF6", "#DDD6FE"],
        prompt_modifier: "creative purple color palette, innovation and creativity, rich purple tones",
    },
    ColorScheme {
        value: "red-bold",
        label: "Bold Red",
        colors: ["#DC2626", "#EF4444", "#FECACA"],
        prompt_modifier: "bold red color palette, strength and passion, powerful red tones",
    },
];

pub fn find_style(value: &str) -> Option<&'static LogoStyle> {
    LOGO_STYLES.iter().find(|s| s.value == value)
}

pub fn find_color_scheme(value: &str) -> Option<&'static ColorScheme> {
    COLOR_SCHEMES.iter().find(|c| c.value == value)
}

// ============================================================================
// BRIEF
// ============================================================================

/// What the user told us about the business
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoConfig {
    pub company_name: String,
    pub description: String,
    pub industry: String,
    pub style: String,
    pub color_scheme: String,
    pub custom_colors: Option<String>,
    pub additional_notes: Option<String>,
}

/// Request forwarded to the image provider
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderRequest {
    pub prompt: String,
    pub company_name: String,
    pub style: String,
    pub color_scheme: String,
    pub custom_colors: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn validate_logo_config(config: &LogoConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.company_name.trim().is_empty() {
        errors.push("Company name is required".to_string());
    }

    if config.description.trim().is_empty() {
        errors.push("Company description is required".to_string());
    }

    if config.style.is_empty() {
        errors.push("Logo style is required".to_string());
    }

    if config.color_scheme.is_empty() {
        errors.push("Color scheme is required".to_string());
    }

    let custom_colors_blank = config
        .custom_colors
        .as_deref()
        .map_or(true, |c| c.trim().is_empty());
    if config.color_scheme == CUSTOM_SCHEME && custom_colors_blank {
        errors.push("Custom colors are required when custom color scheme is selected".to_string());
    }

    ValidationResult::from_errors(errors)
}

/// Turn a brief into the design prompt shown to (and editable by) the user
pub fn generate_logo_prompt(config: &LogoConfig) -> String {
    let style = find_style(&config.style);
    let scheme = find_color_scheme(&config.color_scheme);

    let aesthetic = style.map_or(config.style.as_str(), |s| s.label);
    let style_modifier = style.map_or("modern professional design", |s| s.prompt_modifier);
    let scheme_modifier = scheme.map_or("balanced color palette", |c| c.prompt_modifier);
    let custom_line = non_empty(&config.custom_colors)
        .map(|c| format!("Custom colors: {c}"))
        .unwrap_or_default();
    let notes_line = non_empty(&config.additional_notes)
        .map(|n| format!("Additional requirements: {n}"))
        .unwrap_or_default();

    format!(
        r#"Create a professional vector-style logo design for "{company}".

Company Details:
- Description: {description}
- Industry: {industry}
- Target aesthetic: {aesthetic}

Design Requirements:
- {style_modifier}
- {scheme_modifier}
- {custom_line}
- Vector-friendly design that scales well
- Clean, memorable, and distinctive
- Professional appearance suitable for business use
- Simple geometric shapes and clear composition
- Balanced proportions for various applications

{notes_line}

Generate a high-quality logo that captures the essence of the business while being visually appealing and professionally appropriate. The design should work well across different media including digital platforms, print materials, and signage."#,
        company = config.company_name,
        description = config.description,
        industry = config.industry,
    )
}

/// Missing fields of a provider request, if any
pub fn check_provider_request(request: &ProviderRequest) -> Result<(), &'static str> {
    if request.prompt.is_empty() || request.company_name.is_empty() {
        return Err("Missing required fields: prompt and companyName");
    }
    Ok(())
}

/// Wrap the user's prompt with the standing requirements sent to the provider
pub fn provider_prompt(request: &ProviderRequest) -> String {
    let style_description = find_style(&request.style)
        .map_or("modern professional design", |s| s.provider_description);
    let custom = non_empty(&request.custom_colors)
        .map(|c| format!(" with custom colors: {c}"))
        .unwrap_or_default();

    format!(
        r#"Create a professional vector-style logo design with the following specifications:

{prompt}

IMPORTANT REQUIREMENTS:
- Design should work well as a scalable vector logo
- Clean, professional appearance suitable for business use
- Simple geometric shapes and clear typography
- Balanced composition with proper proportions
- Should look great at both large and small sizes
- Modern, memorable, and distinctive design
- Avoid overly complex details that don't scale well

Style: {style} ({style_description})
Color scheme: {scheme}{custom}

Generate a high-quality logo design that captures the essence of "{company}" while being visually appealing and professional. The logo should be suitable for use across various media including websites, business cards, and signage."#,
        prompt = request.prompt,
        style = request.style,
        scheme = request.color_scheme,
        company = request.company_name,
    )
}

// ============================================================================
// EXPORT NAMING
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png512,
    Png256,
    Png128,
    Png64,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "svg" => Some(ExportFormat::Svg),
            "png-512" => Some(ExportFormat::Png512),
            "png-256" => Some(ExportFormat::Png256),
            "png-128" => Some(ExportFormat::Png128),
            "png-64" => Some(ExportFormat::Png64),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            _ => "png",
        }
    }
}

static RE_NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));
static RE_EDGE_DASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+|-+$").expect("valid dash regex"));

pub fn sanitize_company_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let dashed = RE_NON_SLUG.replace_all(&lowered, "-");
    RE_EDGE_DASHES.replace_all(&dashed, "").into_owned()
}

/// `{slug}-logo-{YYYY-MM-DD}.{ext}`; unknown formats are named as PNG
pub fn generate_filename(company_name: &str, format: &str, date: NaiveDate) -> String {
    let ext = ExportFormat::parse(format).map_or("png", |f| f.extension());
    format!(
        "{}-logo-{}.{}",
        sanitize_company_name(company_name),
        date.format("%Y-%m-%d"),
        ext
    )
}
