//! HTTP surface over the SVG toolkit and the logo brief helpers

use axum::{
    extract::{DefaultBodyLimit, Query},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::logo::{self, LogoConfig, ProviderRequest, COLOR_SCHEMES, LOGO_STYLES};
use crate::source::{decode_data_url, SvgSource};
use crate::svg::{self, SvgInfo, ValidationResult};
use crate::types::*;

/// Largest placeholder edge we are willing to draw
const MAX_PLACEHOLDER_SIZE: u32 = 4096;

pub fn build_router(config: &ServerConfig) -> Router {
    // Allow all origins; the form UI is served from elsewhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/svg/inspect", post(inspect_svg))
        .route("/svg/validate", post(validate_svg))
        .route("/svg/normalize", post(normalize_svg))
        .route("/svg/resize", post(resize_svg))
        .route("/svg/background", post(background_svg))
        .route("/svg/preview", post(preview_svg))
        .route("/svg/colors", post(extract_colors))
        .route("/svg/data-url", post(data_url))
        .route("/svg/placeholder", get(placeholder_svg))
        .route("/logo/styles", get(logo_styles))
        .route("/logo/color-schemes", get(color_schemes))
        .route("/logo/prompt", post(logo_prompt))
        .route("/logo/provider-prompt", post(provider_prompt))
        .route("/logo/filename", post(logo_filename))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(config.max_body_bytes)),
        )
}

pub async fn start_server(config: ServerConfig) -> std::io::Result<()> {
    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Logo service listening on http://{}", config.addr);

    axum::serve(listener, app).await
}

// ============================================================================
// CONTENT RESOLUTION
// ============================================================================

/// Content after the caller-side URL/markup decision
enum Resolved {
    Markup(String),
    Remote(String),
}

fn resolve(content: &str) -> Result<Resolved, ApiError> {
    match SvgSource::classify(content) {
        SvgSource::Inline(svg) => Ok(Resolved::Markup(svg.to_string())),
        SvgSource::DataUrl(url) => Ok(Resolved::Markup(decode_data_url(url)?)),
        SvgSource::Remote(url) => {
            debug!("content is a hosted image; skipping markup processing");
            Ok(Resolved::Remote(url.to_string()))
        }
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn inspect_svg(Json(request): Json<SvgRequest>) -> Json<SvgInfo> {
    Json(svg::inspect(&request.svg))
}

async fn validate_svg(Json(request): Json<SvgRequest>) -> Json<ValidationResult> {
    Json(svg::validate(&request.svg))
}

async fn normalize_svg(Json(request): Json<SvgRequest>) -> Json<SvgResponse> {
    Json(SvgResponse {
        svg: svg::normalize(&request.svg),
    })
}

async fn resize_svg(Json(request): Json<ResizeRequest>) -> Result<Json<RewriteResponse>, ApiError> {
    if !request.size.is_finite() || request.size <= 0.0 {
        return Err(ApiError::BadRequest(format!(
            "size must be a positive number, got {}",
            request.size
        )));
    }

    let rewrite = svg::resize(&request.svg, request.size);
    Ok(Json(RewriteResponse {
        applied: rewrite.is_applied(),
        svg: rewrite.into_svg(),
    }))
}

async fn background_svg(Json(request): Json<BackgroundRequest>) -> Json<RewriteResponse> {
    let rewrite = svg::add_background(&request.svg, &request.color);
    Json(RewriteResponse {
        applied: rewrite.is_applied(),
        svg: rewrite.into_svg(),
    })
}

async fn preview_svg(Json(request): Json<PreviewRequest>) -> Result<Json<PreviewResponse>, ApiError> {
    let response = match resolve(&request.svg)? {
        Resolved::Remote(url) => PreviewResponse {
            svg: url,
            outcome: "remote",
        },
        Resolved::Markup(markup) => {
            let preview = svg::build_preview(&markup, &request.background_color);
            PreviewResponse {
                svg: preview.svg,
                outcome: preview.outcome.as_str(),
            }
        }
    };

    Ok(Json(response))
}

async fn extract_colors(Json(request): Json<SvgRequest>) -> Result<Json<ColorsResponse>, ApiError> {
    let colors = match resolve(&request.svg)? {
        Resolved::Remote(_) => Vec::new(),
        Resolved::Markup(markup) => svg::extract_colors(&markup),
    };

    Ok(Json(ColorsResponse { colors }))
}

async fn data_url(Json(request): Json<SvgRequest>) -> Result<Json<DataUrlResponse>, ApiError> {
    let markup = match resolve(&request.svg)? {
        Resolved::Markup(markup) => markup,
        Resolved::Remote(_) => {
            return Err(ApiError::BadRequest(
                "hosted images cannot be embedded as SVG data URLs".to_string(),
            ))
        }
    };

    let data_url = svg::to_data_url(&markup).ok_or_else(|| {
        ApiError::Unprocessable("SVG content is empty after normalization".to_string())
    })?;

    Ok(Json(DataUrlResponse { data_url }))
}

async fn placeholder_svg(Query(query): Query<PlaceholderQuery>) -> Result<impl IntoResponse, ApiError> {
    let width = query.width.unwrap_or(svg::DEFAULT_PLACEHOLDER_SIZE);
    let height = query.height.unwrap_or(svg::DEFAULT_PLACEHOLDER_SIZE);

    if width == 0 || height == 0 || width > MAX_PLACEHOLDER_SIZE || height > MAX_PLACEHOLDER_SIZE {
        return Err(ApiError::BadRequest(format!(
            "placeholder size must be between 1 and {MAX_PLACEHOLDER_SIZE}"
        )));
    }

    let label = query
        .label
        .as_deref()
        .unwrap_or(svg::DEFAULT_PLACEHOLDER_LABEL);

    Ok((
        [(header::CONTENT_TYPE, "image/svg+xml")],
        svg::placeholder(width, height, label),
    ))
}

async fn logo_styles() -> impl IntoResponse {
    Json(LOGO_STYLES.as_slice())
}

async fn color_schemes() -> impl IntoResponse {
    Json(COLOR_SCHEMES.as_slice())
}

async fn logo_prompt(Json(config): Json<LogoConfig>) -> Result<Json<PromptResponse>, ApiError> {
    let validation = logo::validate_logo_config(&config);
    if !validation.is_valid {
        return Err(ApiError::Invalid {
            message: "Invalid logo configuration".to_string(),
            details: validation.errors,
        });
    }

    info!(
        "Building prompt: company={}, style={}, scheme={}",
        config.company_name, config.style, config.color_scheme
    );

    Ok(Json(PromptResponse {
        prompt: logo::generate_logo_prompt(&config),
    }))
}

async fn provider_prompt(Json(request): Json<ProviderRequest>) -> Result<Json<PromptResponse>, ApiError> {
    logo::check_provider_request(&request).map_err(|msg| ApiError::BadRequest(msg.to_string()))?;

    Ok(Json(PromptResponse {
        prompt: logo::provider_prompt(&request),
    }))
}

async fn logo_filename(Json(request): Json<FilenameRequest>) -> Result<Json<FilenameResponse>, ApiError> {
    if request.company_name.trim().is_empty() {
        return Err(ApiError::BadRequest("companyName is required".to_string()));
    }

    let today = chrono::Utc::now().date_naive();
    Ok(Json(FilenameResponse {
        filename: logo::generate_filename(&request.company_name, &request.format, today),
    }))
}
