use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use lipi::domain::config::ApiConfig;
use lipi_server::Server;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(config: ApiConfig) -> axum::Router {
    Server::new(config).unwrap().into_router()
}

#[tokio::test]
async fn health_and_welcome_are_mounted() {
    let response = app(ApiConfig::default())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app(ApiConfig::default())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn normalize_through_the_full_stack() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/normalize")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"text": "Hello, world!", "language": "en"}).to_string()))
        .unwrap();

    let response = app(ApiConfig::default()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["normalizedText"], "hello world");
}

#[tokio::test]
async fn oversized_bodies_are_rejected() {
    let mut config = ApiConfig::default();
    config.server.body_limit_bytes = 16;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/normalize")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"text": "a".repeat(64), "language": "en"}).to_string()))
        .unwrap();

    let response = app(config).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn api_docs_describe_every_route() {
    let response = app(ApiConfig::default())
        .oneshot(Request::builder().uri("/api").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8_lossy(&bytes);
    for path in ["/normalize", "/options/validate", "/languages", "/nasals-modes", "/health"] {
        assert!(html.contains(&format!("\"{path}\"")), "missing {path}");
    }
}
