//! Weather Prediction API - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_lib::{
    cli::{Cli, Commands},
    commands,
    error::AppResult,
};
use settings::Settings;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Handle errors
    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Load settings once and dispatch to the selected command.
async fn run(cli: Cli) -> AppResult<()> {
    let settings = Settings::load()?;
    tracing::debug!("Configuration loaded: {:?}", settings);

    match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, settings).await,
        Commands::Config(args) => commands::config::execute(args, &settings),
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
