use axum::Json;

use crate::app::dto::HealthResponse;

/// Liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
