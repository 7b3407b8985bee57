//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,
    pub model: ModelHealth,
}

/// Model artifact availability.
#[derive(Debug, Serialize, ToSchema)]
pub struct ModelHealth {
    pub path: String,
    /// `available` or `missing`
    pub status: String,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies the model artifact is on disk.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Service",
    responses(
        (status = 200, description = "Service and model artifact available", body = HealthResponse),
        (status = 503, description = "Model artifact missing", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Response {
    let model = &state.settings.model;
    let available = tokio::fs::metadata(model.path())
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false);

    if !available {
        tracing::warn!("Model artifact not found at {}", model.path().display());
    }

    let response = HealthResponse {
        status: if available { "healthy" } else { "degraded" }.to_string(),
        model: ModelHealth {
            path: model.path().display().to_string(),
            status: if available { "available" } else { "missing" }.to_string(),
        },
    };

    if available {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}
