use axum::Json;

use crate::models::HealthResponse;

/// Liveness probe. Does not touch the text provider.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
