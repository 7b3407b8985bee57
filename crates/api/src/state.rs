//! Application state for dependency injection.

use std::sync::Arc;

use settings::Settings;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create new app state.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}
