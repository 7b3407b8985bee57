//! API metadata handler.

use axum::{extract::State, response::Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Title, version and description of the running API.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfo {
    #[schema(example = "Weather Prediction API")]
    pub title: String,
    #[schema(example = "2.0.0")]
    pub version: String,
    pub description: String,
}

/// Describe the API
#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    responses(
        (status = 200, description = "API metadata", body = ApiInfo)
    )
)]
pub async fn api_info(State(state): State<AppState>) -> Json<ApiInfo> {
    let api = &state.settings.api;
    Json(ApiInfo {
        title: api.title.clone(),
        version: api.version.clone(),
        description: api.description.clone(),
    })
}
