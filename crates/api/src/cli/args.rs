//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

/// Weather Prediction API
#[derive(Parser, Debug)]
#[command(name = "weather-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Inspect the effective configuration
    Config(ConfigArgs),
}

/// Arguments for the serve command. Unset values come from HOST/PORT.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration inspection actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective settings as JSON (secrets redacted)
    Show,
    /// List recognised environment variables and their defaults
    Env,
    /// Print the resolved model artifact path
    ModelPath,
}
