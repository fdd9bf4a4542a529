//! Test utilities for integration tests
use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde::de::DeserializeOwned;
use tower::util::ServiceExt;

use careermate::api::AppState;
use careermate::api::app;
use careermate::core::AppConfig;

pub const RESPONSE_DELAY: Duration = Duration::from_millis(1500);

/// Creates a test application router with a fresh, empty session
/// registry.
pub fn test_app() -> Router {
    let app_config = AppConfig {
        response_delay: RESPONSE_DELAY,
        student_name: String::from("Alex"),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn get_json<T: DeserializeOwned>(app: &Router, uri: &str) -> (StatusCode, T) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = body_to_string(response.into_body()).await;
    (status, serde_json::from_str(&body).unwrap())
}

pub async fn post_json<T: DeserializeOwned>(
    app: &Router,
    uri: &str,
    payload: serde_json::Value,
) -> (StatusCode, T) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = body_to_string(response.into_body()).await;
    (status, serde_json::from_str(&body).unwrap())
}
