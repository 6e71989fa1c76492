//! Error types for the logo service

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Errors raised while turning incoming content back into SVG markup
#[derive(Error, Debug)]
pub enum SvgError {
    /// `data:` URL without the comma separating header and payload
    #[error("Invalid data URL format")]
    MissingPayload,

    /// Payload declared as base64 but not decodable
    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded payload is not UTF-8 text
    #[error("UTF-8 decode error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Startup configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value `{value}` for {var}: {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Errors returned by HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unprocessable(String),

    /// Input was understood but failed validation; details list every violation
    #[error("{message}")]
    Invalid {
        message: String,
        details: Vec<String>,
    },

    #[error(transparent)]
    Svg(#[from] SvgError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Invalid { .. } | ApiError::Svg(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        tracing::warn!(status = status.as_u16(), "request rejected: {}", self);

        let body = match &self {
            ApiError::Invalid { message, details } => json!({
                "error": message,
                "details": details,
            }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
