#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use ayurveda_chat_service::config::{
    ChatConfig, GoogleConfig, ModelConfig, DEFAULT_GEMINI_API_BASE,
};
use ayurveda_chat_service::services::TextProvider;
use ayurveda_chat_service::startup::{build_router, AppState};
use http_body_util::BodyExt;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub const CHAT_PATH: &str = "/api/ayurveda-chat";

pub fn test_config() -> ChatConfig {
    // Use random port for testing (port 0)
    ChatConfig {
        common: CoreConfig { port: 0 },
        models: ModelConfig {
            text_model: "gemini-1.5-flash".to_string(),
        },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            timeout_secs: 5,
        },
    }
}

pub fn test_router(provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState {
        text_provider: provider,
    })
}

pub fn chat_request(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(CHAT_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn question_request(question: &str) -> Request<Body> {
    chat_request(serde_json::json!({ "question": question }).to_string())
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
