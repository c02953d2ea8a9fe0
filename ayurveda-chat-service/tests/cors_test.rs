//! Cross-origin behaviour for the browser front end.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use ayurveda_chat_service::services::providers::mock::MockTextProvider;
use common::{question_request, test_router, CHAT_PATH};
use std::sync::Arc;
use tower::util::ServiceExt;

const FRONTEND_ORIGIN: &str = "http://localhost:5173";

fn preflight(path: &str, method: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri(path)
        .header(header::ORIGIN, FRONTEND_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn chat_preflight_allows_any_origin() {
    let app = test_router(Arc::new(MockTextProvider::answering("unused")));

    let response = app.oneshot(preflight(CHAT_PATH, "POST")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_HEADERS));
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn health_preflight_allows_any_origin() {
    let app = test_router(Arc::new(MockTextProvider::answering("unused")));

    let response = app.oneshot(preflight("/health", "GET")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn cross_origin_chat_response_carries_cors_header() {
    let app = test_router(Arc::new(MockTextProvider::answering("ok")));

    let mut request = question_request("What is Ojas?");
    request
        .headers_mut()
        .insert(header::ORIGIN, FRONTEND_ORIGIN.parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn cross_origin_health_response_carries_cors_header() {
    let app = test_router(Arc::new(MockTextProvider::answering("unused")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "https://some-other-site.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn error_responses_also_carry_cors_header() {
    let app = test_router(Arc::new(MockTextProvider::failing("down")));

    let mut request = question_request("What is Ama?");
    request
        .headers_mut()
        .insert(header::ORIGIN, FRONTEND_ORIGIN.parse().unwrap());

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
