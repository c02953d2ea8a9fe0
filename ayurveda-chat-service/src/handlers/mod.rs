//! HTTP handlers for ayurveda-chat-service.

pub mod chat;
pub mod health;
pub mod metrics;

pub use chat::ayurveda_chat;
pub use health::health_check;
pub use metrics::metrics_endpoint;

use service_core::error::AppError;

pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Route not found"))
}
