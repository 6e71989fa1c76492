//! HTTP tests driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use logoforge_core::{build_router, svg, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(&ServerConfig::default())
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, _, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_inspect_uses_camel_case() {
    let (status, body) = post_json(
        "/svg/inspect",
        json!({ "svg": r#"<svg width="64" height="32" viewBox="0 0 64 32"></svg>"# }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "width": 64.0, "height": 32.0, "viewBox": "0 0 64 32", "isValid": true })
    );
}

#[tokio::test]
async fn test_inspect_empty() {
    let (_, body) = post_json("/svg/inspect", json!({ "svg": "" })).await;
    assert_eq!(
        body,
        json!({ "width": 0.0, "height": 0.0, "viewBox": null, "isValid": false })
    );
}

#[tokio::test]
async fn test_validate() {
    let (status, body) = post_json("/svg/validate", json!({ "svg": "<svg>x</svg>" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "isValid": false, "errors": ["Missing XML namespace"] })
    );
}

#[tokio::test]
async fn test_normalize() {
    let (_, body) = post_json(
        "/svg/normalize",
        json!({ "svg": "<?xml version=\"1.0\"?>\n<svg width=\"100\" height=\"100\">\n</svg>" }),
    )
    .await;
    assert_eq!(
        body["svg"],
        r#"<svg viewBox="0 0 100 100" width="100" height="100"> </svg>"#
    );
}

#[tokio::test]
async fn test_resize_and_passthrough_flag() {
    let (_, body) = post_json(
        "/svg/resize",
        json!({ "svg": r#"<svg width="10" height="10"></svg>"#, "size": 50 }),
    )
    .await;
    assert_eq!(body["svg"], r#"<svg width="50" height="50"></svg>"#);
    assert_eq!(body["applied"], true);

    let (_, body) = post_json("/svg/resize", json!({ "svg": "<svg></svg>", "size": 50 })).await;
    assert_eq!(body["applied"], false);

    let (status, _) = post_json("/svg/resize", json!({ "svg": "<svg></svg>", "size": -1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_background() {
    let (_, body) = post_json(
        "/svg/background",
        json!({ "svg": "<svg><g/></svg>", "color": "#abcdef" }),
    )
    .await;
    assert_eq!(
        body["svg"],
        r##"<svg><rect width="100%" height="100%" fill="#abcdef"/><g/></svg>"##
    );
    assert_eq!(body["applied"], true);
}

#[tokio::test]
async fn test_preview_outcomes() {
    let (_, body) = post_json("/svg/preview", json!({ "svg": "garbage" })).await;
    assert_eq!(body["outcome"], "invalid-input");
    assert_eq!(body["svg"], svg::placeholder(200, 200, "Invalid SVG"));

    let (_, body) = post_json(
        "/svg/preview",
        json!({
            "svg": r#"<svg width="20" height="20" xmlns="http://www.w3.org/2000/svg"></svg>"#,
            "backgroundColor": "white"
        }),
    )
    .await;
    assert_eq!(body["outcome"], "rendered");
    assert_eq!(
        body["svg"],
        r#"<svg viewBox="0 0 200 200" width="200" height="200" xmlns="http://www.w3.org/2000/svg"><rect width="100%" height="100%" fill="white"/></svg>"#
    );
}

#[tokio::test]
async fn test_preview_remote_and_data_url() {
    let url = "https://images.example.com/logo.png";
    let (_, body) = post_json("/svg/preview", json!({ "svg": url })).await;
    assert_eq!(body["outcome"], "remote");
    assert_eq!(body["svg"], url);

    let (_, body) = post_json(
        "/svg/preview",
        json!({ "svg": "data:image/svg+xml,%3Csvg%20width%3D%228%22%20height%3D%228%22%3E%3C%2Fsvg%3E" }),
    )
    .await;
    assert_eq!(body["outcome"], "rendered");
    assert_eq!(
        body["svg"],
        r#"<svg viewBox="0 0 200 200" width="200" height="200"></svg>"#
    );

    let (status, body) = post_json("/svg/preview", json!({ "svg": "data:nothing" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid data URL format");
}

#[tokio::test]
async fn test_colors() {
    let (_, body) = post_json(
        "/svg/colors",
        json!({ "svg": r##"<svg><rect fill="#FF0000"/><rect fill="#000000"/><rect fill="rgb(0,255,0)"/></svg>"## }),
    )
    .await;
    assert_eq!(body["colors"], json!(["#FF0000", "#00FF00"]));

    let (_, body) = post_json("/svg/colors", json!({ "svg": "https://x.test/a.png" })).await;
    assert_eq!(body["colors"], json!([]));
}

#[tokio::test]
async fn test_data_url() {
    let (status, body) = post_json("/svg/data-url", json!({ "svg": "<svg></svg>" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["dataUrl"],
        "data:image/svg+xml;charset=UTF-8,%3Csvg%3E%3C%2Fsvg%3E"
    );

    let (status, _) = post_json("/svg/data-url", json!({ "svg": "   " })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_placeholder() {
    let (status, content_type, body) = get("/svg/placeholder?width=120&height=60&label=Acme").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    assert_eq!(body, svg::placeholder(120, 60, "Acme"));

    let (_, _, body) = get("/svg/placeholder").await;
    assert_eq!(body, svg::placeholder(200, 200, "Logo"));

    let (status, _, _) = get("/svg/placeholder?width=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_placeholder_size_bounds() {
    let (status, _, body) = get("/svg/placeholder?width=4096&height=4096").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, svg::placeholder(4096, 4096, "Logo"));

    let (status, _, _) = get("/svg/placeholder?width=4097").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _, _) = get("/svg/placeholder?height=4097").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_body_limit_from_config() {
    let config = ServerConfig {
        max_body_bytes: 32,
        ..ServerConfig::default()
    };
    let body = json!({ "svg": format!("<svg>{}</svg>", "x".repeat(100)) });
    let request = Request::builder()
        .method("POST")
        .uri("/svg/inspect")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = build_router(&config).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    // Same request fits under the default limit
    let (status, _) = post_json("/svg/inspect", body).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_catalogs() {
    let (_, _, body) = get("/logo/styles").await;
    let styles: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(styles.as_array().map(Vec::len), Some(6));
    assert_eq!(styles[0]["value"], "minimalist");
    assert!(styles[0].get("providerDescription").is_none());

    let (_, _, body) = get("/logo/color-schemes").await;
    let schemes: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(schemes[1]["colors"], json!(["#1E40AF", "#3B82F6", "#DBEAFE"]));
}

#[tokio::test]
async fn test_logo_prompt() {
    let (status, body) = post_json(
        "/logo/prompt",
        json!({
            "companyName": "Northwind",
            "description": "Freight forwarding",
            "industry": "Logistics",
            "style": "corporate",
            "colorScheme": "blue-professional"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let prompt = body["prompt"].as_str().unwrap();
    assert!(prompt.contains(r#"logo design for "Northwind""#));
    assert!(prompt.contains("- Industry: Logistics"));

    let (status, body) = post_json("/logo/prompt", json!({ "companyName": "Northwind" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid logo configuration");
    assert_eq!(
        body["details"],
        json!([
            "Company description is required",
            "Logo style is required",
            "Color scheme is required"
        ])
    );
}

#[tokio::test]
async fn test_provider_prompt() {
    let (status, body) = post_json(
        "/logo/provider-prompt",
        json!({ "prompt": "A compass", "companyName": "Northwind", "style": "vintage", "colorScheme": "monochrome" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["prompt"]
        .as_str()
        .unwrap()
        .contains("Style: vintage (classic, retro, timeless with traditional elements)"));

    let (status, body) = post_json("/logo/provider-prompt", json!({ "prompt": "A compass" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields: prompt and companyName");
}

#[tokio::test]
async fn test_filename() {
    let (status, body) = post_json(
        "/logo/filename",
        json!({ "companyName": "Northwind Traders", "format": "png-128" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let filename = body["filename"].as_str().unwrap();
    assert!(filename.starts_with("northwind-traders-logo-"));
    assert!(filename.ends_with(".png"));
    // slug + "-logo-" + YYYY-MM-DD + ".png"
    assert_eq!(filename.len(), "northwind-traders-logo-".len() + 10 + 4);

    let (status, _) = post_json("/logo/filename", json!({ "companyName": " ", "format": "svg" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
