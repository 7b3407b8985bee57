//! Serve command - Starts the HTTP server.

use settings::Settings;

use crate::cli::args::ServeArgs;
use crate::error::AppResult;

/// Execute the serve command
pub async fn execute(args: ServeArgs, settings: Settings) -> AppResult<()> {
    tracing::info!("Starting server...");
    crate::run_server(apply_overrides(args, settings)).await
}

/// CLI flags win over HOST/PORT from the environment.
fn apply_overrides(args: ServeArgs, mut settings: Settings) -> Settings {
    if let Some(host) = args.host {
        settings.server.host = host;
    }
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_settings() {
        let args = ServeArgs {
            host: Some("127.0.0.1".to_string()),
            port: None,
        };
        let settings = apply_overrides(args, Settings::default());
        assert_eq!(settings.server.addr(), "127.0.0.1:8000");
    }
}
