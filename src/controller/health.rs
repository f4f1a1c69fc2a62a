use axum::{response::IntoResponse, Json};
use serde_json::json;

/// GET /api/health
/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}
