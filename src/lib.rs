//! Logo service core
//!
//! Collects a logo brief, builds the prompt sent to the image provider, and
//! prepares generated SVG for display and download. SVG is handled as text:
//! see [`svg`] for the inspection, validation, normalization and rewrite
//! helpers and the canonical preview pipeline built on them.

pub mod api;
pub mod config;
pub mod error;
pub mod logo;
pub mod source;
pub mod svg;
pub mod types;

pub use api::{build_router, start_server};
pub use config::ServerConfig;
pub use error::{ApiError, ConfigError, SvgError};
