//! Default values for every setting.
//!
//! Centralized location for magic values; the env table in [`crate::env`]
//! refers back to these.

// =============================================================================
// API Metadata
// =============================================================================

pub const DEFAULT_API_TITLE: &str = "Weather Prediction API";

pub const DEFAULT_API_VERSION: &str = "2.0.0";

pub const DEFAULT_API_DESCRIPTION: &str = "API for weather prediction using AI/ML models";

// =============================================================================
// Server Configuration
// =============================================================================

/// Listen on all interfaces
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

pub const DEFAULT_SERVER_PORT: u16 = 8000;

// =============================================================================
// Database (MySQL)
// =============================================================================

pub const DEFAULT_DB_HOST: &str = "127.0.0.1";

pub const DEFAULT_DB_USER: &str = "root";

pub const DEFAULT_DB_PASSWORD: &str = "";

pub const DEFAULT_DB_NAME: &str = "weather_app_bd";

pub const DEFAULT_DB_PORT: u16 = 3306;

// =============================================================================
// Email (SMTP)
// =============================================================================

pub const DEFAULT_EMAIL_HOST: &str = "smtp.gmail.com";

/// STARTTLS submission port
pub const DEFAULT_EMAIL_PORT: u16 = 587;

// =============================================================================
// Security
// =============================================================================

/// One-time password lifetime (5 minutes)
pub const DEFAULT_OTP_EXPIRY_SECONDS: u64 = 300;

// =============================================================================
// Model Artifact
// =============================================================================

/// Model location relative to the base directory
pub const DEFAULT_MODEL_SUBPATH: &str = "ml_models/combined.joblib";

// =============================================================================
// CORS
// =============================================================================

/// Wildcard entry for origin and header lists
pub const CORS_WILDCARD: &str = "*";

pub const DEFAULT_CORS_ORIGINS: &str = "*";

pub const DEFAULT_CORS_CREDENTIALS: bool = true;

pub const DEFAULT_CORS_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

pub const DEFAULT_CORS_HEADERS: &str = "*";

// =============================================================================
// Redaction
// =============================================================================

/// Placeholder printed instead of secret values
pub const REDACTED: &str = "[REDACTED]";
