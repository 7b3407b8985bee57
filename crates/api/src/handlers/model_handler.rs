//! Model artifact handler.

use axum::{extract::State, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Where the model artifact lives and how large it is.
#[derive(Debug, Serialize, ToSchema)]
pub struct ModelInfo {
    #[schema(example = "/app/ml_models/combined.joblib")]
    pub path: String,
    pub base_dir: String,
    pub size_bytes: u64,
}

/// Get model artifact details
#[utoipa::path(
    get,
    path = "/model",
    tag = "Service",
    responses(
        (status = 200, description = "Model artifact details", body = ModelInfo),
        (status = 503, description = "Model artifact missing")
    )
)]
pub async fn model_info(State(state): State<AppState>) -> AppResult<Json<ModelInfo>> {
    let model = &state.settings.model;

    let metadata = tokio::fs::metadata(model.path()).await.map_err(|e| {
        tracing::warn!("Cannot stat model artifact {}: {}", model.path().display(), e);
        AppError::service_unavailable("model artifact")
    })?;

    if !metadata.is_file() {
        return Err(AppError::service_unavailable("model artifact"));
    }

    Ok(Json(ModelInfo {
        path: model.path().display().to_string(),
        base_dir: model.base_dir.display().to_string(),
        size_bytes: metadata.len(),
    }))
}
