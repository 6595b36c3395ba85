use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::SERVICE_NAME;

/// Root endpoint reporting overall service status.
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "service": SERVICE_NAME,
        "status": "operational"
    }))
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME
    }))
}

/// Readiness check endpoint for K8s readiness probes.
///
/// The service has no downstream dependencies, so readiness mirrors liveness.
pub async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
