//! Configuration errors.

use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Errors raised while loading settings from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("APP_BASE_DIR must be an absolute path, got {}", .0.display())]
    RelativeBaseDir(PathBuf),

    #[error("Invalid settings: {0}")]
    Validation(String),
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, value: impl Into<String>, reason: impl Display) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();
        flatten_validation(&errors, String::new(), &mut messages);
        messages.sort();
        ConfigError::Validation(messages.join("; "))
    }
}

/// Collect `section.field: code` pairs from nested validation errors.
fn flatten_validation(errors: &ValidationErrors, prefix: String, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());
                    out.push(format!("{}: {}", path, message));
                }
            }
            ValidationErrorsKind::Struct(nested) => flatten_validation(nested, path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    flatten_validation(nested, format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
