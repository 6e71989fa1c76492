//! API request and response types

use serde::{Deserialize, Serialize};

use crate::svg::TRANSPARENT;

/// Body shared by every endpoint that takes one document
#[derive(Debug, Clone, Deserialize)]
pub struct SvgRequest {
    pub svg: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResizeRequest {
    pub svg: String,
    pub size: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackgroundRequest {
    pub svg: String,
    pub color: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    pub svg: String,
    #[serde(default = "default_background")]
    pub background_color: String,
}

fn default_background() -> String {
    TRANSPARENT.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderQuery {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilenameRequest {
    pub company_name: String,
    pub format: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SvgResponse {
    pub svg: String,
}

/// Result of a rewrite; `applied` is false when the input came back untouched
#[derive(Debug, Clone, Serialize)]
pub struct RewriteResponse {
    pub svg: String,
    pub applied: bool,
}

/// `outcome` is one of `rendered`, `invalid-input`, `failed`, or `remote`
/// (a hosted image URL, echoed back unprocessed)
#[derive(Debug, Clone, Serialize)]
pub struct PreviewResponse {
    pub svg: String,
    pub outcome: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorsResponse {
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataUrlResponse {
    pub data_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilenameResponse {
    pub filename: String,
}
