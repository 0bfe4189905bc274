use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use tiptap_normalizer::config::NormalizerConfig;
use tiptap_normalizer::normalizer::ContentNormalizer;
use tiptap_normalizer::server::{AppState, create_router};

fn router_with(config: NormalizerConfig, max_body_bytes: usize) -> Router {
    let state = Arc::new(AppState::new(ContentNormalizer::new(config)));
    create_router(state, max_body_bytes)
}

fn router() -> Router {
    router_with(NormalizerConfig::default(), 1024 * 1024)
}

fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("valid request")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("infallible service");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_convert_uses_requested_platform() {
    let body = json!({
        "content": r#"<figure class="kg-card kg-bookmark-card"><a href="https://ex.com">x</a></figure><h5 class="t">Sub</h5>"#,
        "title": "Hello",
        "platform": "ghost",
    });
    let (status, value) = send(router(), post_json("/api/convert", body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        value,
        json!({
            "success": true,
            "title": "Hello",
            "content": r#"<p><a href="https://ex.com">https://ex.com</a></p><h3>Sub</h3>"#,
        })
    );
}

#[tokio::test]
async fn test_convert_defaults_to_medium_and_empty_title() {
    let body = json!({ "content": r#"<p>Body</p><img src="https://medium.com/stat/px">"# });
    let (status, value) = send(router(), post_json("/api/convert", body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["title"], "");
    assert_eq!(value["content"], "<p>Body</p>");
}

#[tokio::test]
async fn test_convert_medium_ignores_platform_field() {
    let body = json!({
        "content": r#"<figure><img src="https://x/y.png"></figure>"#,
        "platform": "generic",
    });
    let (status, value) =
        send(router(), post_json("/api/convert-medium", body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["content"], r#"<img src="https://x/y.png" />"#);
}

#[tokio::test]
async fn test_missing_content_is_bad_request() {
    for body in [json!({ "title": "t" }), json!({ "content": "" }), json!({ "content": "  " })] {
        let (status, value) = send(router(), post_json("/api/convert", body.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "Missing required field: content");
        assert!(value.get("content").is_none());
    }
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (status, value) = send(router(), post_json("/api/convert", "{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["success"], false);
    assert!(value["error"].is_string());
}

#[tokio::test]
async fn test_oversized_html_is_rejected() -> anyhow::Result<()> {
    let config = NormalizerConfig::builder().max_html_size(32).build()?;
    let app = router_with(config, 1024 * 1024);
    let body = json!({ "content": format!("<p>{}</p>", "a".repeat(64)) });

    let (status, value) = send(app, post_json("/api/convert", body.to_string())).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(value["success"], false);
    Ok(())
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = router_with(NormalizerConfig::default(), 256);
    let body = json!({ "content": format!("<p>{}</p>", "a".repeat(1024)) });

    let (status, value) = send(app, post_json("/api/convert", body.to_string())).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(value["success"], false);
}

#[tokio::test]
async fn test_list_platforms() {
    let request = Request::builder()
        .uri("/api/platforms")
        .body(Body::empty())
        .expect("valid request");
    let (status, value) = send(router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["default"], "medium");
    assert_eq!(
        value["platforms"],
        json!(["medium", "substack", "blogger", "hashnode", "wordpress", "ghost", "devto", "generic"])
    );
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("valid request");
    let response = router().oneshot(request).await.expect("infallible service");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    assert_eq!(&bytes[..], b"ok");
}
