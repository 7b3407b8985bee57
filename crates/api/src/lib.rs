//! Weather Prediction API server.
//!
//! Loads [`settings::Settings`] once and serves the API metadata, health and
//! model endpoints with the configured CORS policy.

pub mod cli;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use settings::Settings;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server until it stops.
pub async fn run_server(settings: Settings) -> AppResult<()> {
    let addr = settings.server.addr();

    if !settings.model.exists() {
        tracing::warn!(
            "Model artifact {} does not exist yet",
            settings.model.path().display()
        );
    }

    // Build router
    let app = create_router(AppState::new(settings));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
