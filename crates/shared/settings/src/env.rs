//! Environment variable table and typed readers.
//!
//! Every recognised variable is declared once as an [`EnvVar`]; the loader in
//! [`crate::config`] reads them through [`EnvReader`], and the CLI lists
//! them from [`ENV_VARS`].

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::*;
use crate::error::{ConfigError, ConfigResult};

/// Source of raw environment values.
#[cfg_attr(test, mockall::automock)]
pub trait EnvSource {
    /// Raw value for `key`, `None` when unset.
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values count as unset
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// Declaration of one environment variable.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EnvVar {
    pub name: &'static str,
    /// Textual default, parsed the same way as a real value
    pub default: Option<&'static str>,
    pub description: &'static str,
    /// Value must never be printed
    pub secret: bool,
}

impl EnvVar {
    const fn new(name: &'static str, default: &'static str, description: &'static str) -> Self {
        Self {
            name,
            default: Some(default),
            description,
            secret: false,
        }
    }

    const fn secret(self) -> Self {
        Self {
            secret: true,
            ..self
        }
    }

    const fn without_default(self) -> Self {
        Self {
            default: None,
            ..self
        }
    }
}

// =============================================================================
// Variable Table
// =============================================================================

pub const API_TITLE: EnvVar = EnvVar::new("API_TITLE", DEFAULT_API_TITLE, "API title shown in docs");
pub const API_VERSION: EnvVar = EnvVar::new("API_VERSION", DEFAULT_API_VERSION, "API version string");
pub const API_DESCRIPTION: EnvVar =
    EnvVar::new("API_DESCRIPTION", DEFAULT_API_DESCRIPTION, "API description shown in docs");

pub const HOST: EnvVar = EnvVar::new("HOST", DEFAULT_SERVER_HOST, "Address the HTTP server binds");
pub const PORT: EnvVar = EnvVar::new("PORT", "8000", "Port the HTTP server listens on");

pub const DB_HOST: EnvVar = EnvVar::new("DB_HOST", DEFAULT_DB_HOST, "MySQL host");
pub const DB_USER: EnvVar = EnvVar::new("DB_USER", DEFAULT_DB_USER, "MySQL user");
pub const DB_PASSWORD: EnvVar =
    EnvVar::new("DB_PASSWORD", DEFAULT_DB_PASSWORD, "MySQL password").secret();
pub const DB_NAME: EnvVar = EnvVar::new("DB_NAME", DEFAULT_DB_NAME, "MySQL database name");
pub const DB_PORT: EnvVar = EnvVar::new("DB_PORT", "3306", "MySQL port");

pub const EMAIL_HOST: EnvVar = EnvVar::new("EMAIL_HOST", DEFAULT_EMAIL_HOST, "SMTP server host");
pub const EMAIL_PORT: EnvVar = EnvVar::new("EMAIL_PORT", "587", "SMTP server port");
pub const EMAIL_USERNAME: EnvVar =
    EnvVar::new("EMAIL_USERNAME", "", "SMTP login, usually the sender address").without_default();
pub const EMAIL_PASSWORD: EnvVar = EnvVar::new("EMAIL_PASSWORD", "", "SMTP password")
    .without_default()
    .secret();

pub const OTP_EXPIRY_SECONDS: EnvVar =
    EnvVar::new("OTP_EXPIRY_SECONDS", "300", "One-time password lifetime in seconds");

pub const APP_BASE_DIR: EnvVar = EnvVar::new(
    "APP_BASE_DIR",
    "",
    "Absolute directory relative model paths resolve against (defaults to the build root)",
)
.without_default();
pub const MODEL_PATH: EnvVar = EnvVar::new(
    "MODEL_PATH",
    DEFAULT_MODEL_SUBPATH,
    "Model artifact, absolute or relative to the base directory",
);

pub const CORS_ORIGINS: EnvVar =
    EnvVar::new("CORS_ORIGINS", DEFAULT_CORS_ORIGINS, "Comma-separated allowed origins");
pub const CORS_CREDENTIALS: EnvVar =
    EnvVar::new("CORS_CREDENTIALS", "true", "Allow credentialed cross-origin requests");
pub const CORS_METHODS: EnvVar =
    EnvVar::new("CORS_METHODS", DEFAULT_CORS_METHODS, "Comma-separated allowed methods");
pub const CORS_HEADERS: EnvVar =
    EnvVar::new("CORS_HEADERS", DEFAULT_CORS_HEADERS, "Comma-separated allowed request headers");

/// Every variable the settings loader reads, in load order.
pub const ENV_VARS: &[EnvVar] = &[
    API_TITLE,
    API_VERSION,
    API_DESCRIPTION,
    HOST,
    PORT,
    DB_HOST,
    DB_USER,
    DB_PASSWORD,
    DB_NAME,
    DB_PORT,
    EMAIL_HOST,
    EMAIL_PORT,
    EMAIL_USERNAME,
    EMAIL_PASSWORD,
    OTP_EXPIRY_SECONDS,
    APP_BASE_DIR,
    MODEL_PATH,
    CORS_ORIGINS,
    CORS_CREDENTIALS,
    CORS_METHODS,
    CORS_HEADERS,
];

// =============================================================================
// Typed Readers
// =============================================================================

/// Typed access to an [`EnvSource`] keyed by [`EnvVar`] declarations.
pub struct EnvReader<'a> {
    source: &'a dyn EnvSource,
}

impl<'a> EnvReader<'a> {
    pub fn new(source: &'a dyn EnvSource) -> Self {
        Self { source }
    }

    /// Raw value, without falling back to the default.
    pub fn raw(&self, var: &EnvVar) -> Option<String> {
        self.source.get(var.name)
    }

    /// Value as-is, or the default. Present-but-empty stays empty.
    pub fn string(&self, var: &EnvVar) -> String {
        self.raw(var)
            .or_else(|| var.default.map(str::to_string))
            .unwrap_or_default()
    }

    /// Value when set and non-empty. Defaults are ignored.
    pub fn optional(&self, var: &EnvVar) -> Option<String> {
        self.raw(var).filter(|value| !value.is_empty())
    }

    /// Parse the value (or the default) with [`FromStr`].
    pub fn parsed<T>(&self, var: &EnvVar) -> ConfigResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let value = self.string(var);
        value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(var.name, &value, e))
    }

    /// Comma-separated list; items are trimmed and empty items dropped.
    pub fn list(&self, var: &EnvVar) -> Vec<String> {
        split_list(&self.string(var))
    }

    /// Boolean flag accepting `true/false`, `1/0`, `yes/no` and `on/off`.
    pub fn flag(&self, var: &EnvVar) -> ConfigResult<bool> {
        let value = self.string(var);
        parse_flag(&value).ok_or_else(|| ConfigError::invalid(var.name, &value, "expected a boolean"))
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_string_falls_back_to_default() {
        let env = source(&[]);
        let reader = EnvReader::new(&env);
        assert_eq!(reader.string(&DB_HOST), "127.0.0.1");
        assert_eq!(reader.string(&EMAIL_USERNAME), "");
    }

    #[test]
    fn test_string_keeps_empty_value() {
        let env = source(&[("DB_HOST", "")]);
        assert_eq!(EnvReader::new(&env).string(&DB_HOST), "");
    }

    #[test]
    fn test_optional_ignores_empty_and_default() {
        let env = source(&[("EMAIL_USERNAME", "")]);
        let reader = EnvReader::new(&env);
        assert_eq!(reader.optional(&EMAIL_USERNAME), None);
        assert_eq!(reader.optional(&MODEL_PATH), None);
    }

    #[test]
    fn test_parsed_reads_value_and_default() {
        let env = source(&[("DB_PORT", " 3307 ")]);
        let reader = EnvReader::new(&env);
        assert_eq!(reader.parsed::<u16>(&DB_PORT).unwrap(), 3307);
        assert_eq!(reader.parsed::<u16>(&PORT).unwrap(), DEFAULT_SERVER_PORT);
    }

    #[test]
    fn test_parsed_rejects_garbage() {
        let env = source(&[("DB_PORT", "abc")]);
        let err = EnvReader::new(&env).parsed::<u16>(&DB_PORT).unwrap_err();
        match err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(key, "DB_PORT");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_list_trims_and_drops_empty_items() {
        let env = source(&[("CORS_METHODS", " GET , ,POST,")]);
        assert_eq!(EnvReader::new(&env).list(&CORS_METHODS), vec!["GET", "POST"]);
    }

    #[test]
    fn test_flag_variants() {
        for (raw, expected) in [("TRUE", true), ("0", false), ("yes", true), ("off", false)] {
            let env = source(&[("CORS_CREDENTIALS", raw)]);
            assert_eq!(EnvReader::new(&env).flag(&CORS_CREDENTIALS).unwrap(), expected);
        }

        let env = source(&[("CORS_CREDENTIALS", "maybe")]);
        assert!(EnvReader::new(&env).flag(&CORS_CREDENTIALS).is_err());
    }

    #[test]
    fn test_reader_queries_source_by_name() {
        let mut mock = MockEnvSource::new();
        mock.expect_get().returning(|key| match key {
            "MODEL_PATH" => Some("models/v2.joblib".to_string()),
            _ => None,
        });

        let reader = EnvReader::new(&mock);
        assert_eq!(reader.optional(&MODEL_PATH).as_deref(), Some("models/v2.joblib"));
        assert_eq!(reader.optional(&APP_BASE_DIR), None);
    }

    #[test]
    fn test_numeric_defaults_match_constants() {
        let env = source(&[]);
        let reader = EnvReader::new(&env);
        assert_eq!(reader.parsed::<u16>(&DB_PORT).unwrap(), DEFAULT_DB_PORT);
        assert_eq!(reader.parsed::<u16>(&EMAIL_PORT).unwrap(), DEFAULT_EMAIL_PORT);
        assert_eq!(
            reader.parsed::<u64>(&OTP_EXPIRY_SECONDS).unwrap(),
            DEFAULT_OTP_EXPIRY_SECONDS
        );
        assert_eq!(reader.flag(&CORS_CREDENTIALS).unwrap(), DEFAULT_CORS_CREDENTIALS);
    }

    #[test]
    fn test_table_names_are_unique() {
        let mut names: Vec<_> = ENV_VARS.iter().map(|var| var.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ENV_VARS.len());
    }

    #[test]
    fn test_credentials_have_no_default() {
        assert!(EMAIL_USERNAME.default.is_none());
        assert!(EMAIL_PASSWORD.default.is_none());
        assert!(EMAIL_PASSWORD.secret);
    }
}
