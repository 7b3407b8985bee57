//! Config command - Prints the effective configuration.

use settings::{EnvVar, Settings, ENV_VARS};
use settings::constants::REDACTED;

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::error::{AppError, AppResult};

/// Execute the config command
pub fn execute(args: ConfigArgs, settings: &Settings) -> AppResult<()> {
    let output = render(&args.action, settings)?;
    println!("{}", output);
    Ok(())
}

fn render(action: &ConfigAction, settings: &Settings) -> AppResult<String> {
    match action {
        ConfigAction::Show => serde_json::to_string_pretty(settings)
            .map_err(|e| AppError::internal(format!("Failed to serialize settings: {}", e))),
        ConfigAction::Env => Ok(env_table(ENV_VARS)),
        ConfigAction::ModelPath => Ok(settings.model.path().display().to_string()),
    }
}

fn env_table(vars: &[EnvVar]) -> String {
    let header = format!("{:<20} {:<30} DESCRIPTION", "NAME", "DEFAULT");

    let rows = vars.iter().map(|var| {
        let default = match var.default {
            None => "(none)",
            Some("") => "(empty)",
            Some(_) if var.secret => REDACTED,
            Some(value) => value,
        };
        format!("{:<20} {:<30} {}", var.name, default, var.description)
    });

    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}
