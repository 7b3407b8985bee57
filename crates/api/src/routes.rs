//! Route configuration.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::AppError;
use crate::handlers::{health_routes, info_handler, model_handler};
use crate::middleware::cors_layer;
use crate::openapi;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let doc = openapi::document(&state.settings.api);
    let cors = cors_layer(&state.settings.cors);

    Router::new()
        .route("/", get(info_handler::api_info))
        .nest("/health", health_routes())
        .route("/model", get(model_handler::model_info))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
