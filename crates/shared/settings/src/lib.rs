//! Settings shared by every component of the weather prediction service.
//!
//! This crate provides:
//! - The immutable [`Settings`] value, read once from the environment
//! - The environment variable table and typed readers
//! - Model artifact path resolution
//! - Configuration errors

pub mod config;
pub mod constants;
pub mod env;
pub mod error;
pub mod paths;

pub use config::{
    ApiSettings, CorsSettings, DatabaseSettings, DbConnectionParams, EmailSettings,
    ModelSettings, SecuritySettings, ServerSettings, Settings,
};
pub use env::{EnvReader, EnvSource, EnvVar, ProcessEnv, ENV_VARS};
pub use error::{ConfigError, ConfigResult};
pub use paths::{normalize_lexically, resolve_model_path};
