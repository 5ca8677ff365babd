#![cfg(feature = "server")]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use lipi_kernel::domain::config::ApiConfig;
use lipi_kernel::prelude::*;
use lipi_kernel::server::router::system_router;
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_up_without_caching() {
    let state = ApiState::builder().config(ApiConfig::default()).build().unwrap();
    let (router, _) = system_router::<ApiState>().split_for_parts();
    let app = router.with_state(state);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CACHE_CONTROL],
        "no-store, no-cache, must-revalidate"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "up");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn state_requires_config() {
    assert!(ApiState::builder().build().is_err());

    let state = ApiState::builder().config(ApiConfig::default()).build().unwrap();
    assert_eq!(state.config.normalizer.max_text_chars, 100_000);
}
