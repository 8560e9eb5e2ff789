use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe for Docker/K8s.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "jokes-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe. The service has no external dependencies, so ready
/// means the listener is up.
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}
