//! Application settings loaded from environment variables.
//!
//! [`Settings`] is built once at startup and handed to whatever needs it
//! (HTTP server, database client, email client). Nothing here is global.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Serialize, Serializer};
use validator::Validate;

use crate::constants::*;
use crate::env::{self, EnvReader, EnvSource, ProcessEnv};
use crate::error::{ConfigError, ConfigResult};
use crate::paths::{default_base_dir, default_model_path, normalize_lexically, resolve_model_path};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub api: ApiSettings,
    #[validate(nested)]
    pub server: ServerSettings,
    #[validate(nested)]
    pub database: DatabaseSettings,
    #[validate(nested)]
    pub email: EmailSettings,
    pub security: SecuritySettings,
    pub model: ModelSettings,
    pub cors: CorsSettings,
}

impl Settings {
    /// Load `.env` (if any) and read settings from the process environment.
    pub fn load() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }

        Self::from_source(&ProcessEnv)
    }

    /// Read settings from an arbitrary environment source.
    pub fn from_source(source: &dyn EnvSource) -> ConfigResult<Self> {
        let reader = EnvReader::new(source);

        let settings = Self {
            api: ApiSettings {
                title: reader.string(&env::API_TITLE),
                version: reader.string(&env::API_VERSION),
                description: reader.string(&env::API_DESCRIPTION),
            },
            server: ServerSettings {
                host: reader.string(&env::HOST),
                port: reader.parsed(&env::PORT)?,
            },
            database: DatabaseSettings {
                host: reader.string(&env::DB_HOST),
                user: reader.string(&env::DB_USER),
                password: reader.string(&env::DB_PASSWORD),
                name: reader.string(&env::DB_NAME),
                port: reader.parsed(&env::DB_PORT)?,
            },
            email: EmailSettings {
                host: reader.string(&env::EMAIL_HOST),
                port: reader.parsed(&env::EMAIL_PORT)?,
                username: reader.optional(&env::EMAIL_USERNAME),
                password: reader.optional(&env::EMAIL_PASSWORD),
            },
            security: SecuritySettings {
                otp_expiry_seconds: reader.parsed(&env::OTP_EXPIRY_SECONDS)?,
            },
            model: ModelSettings::from_reader(&reader)?,
            cors: CorsSettings::from_reader(&reader)?,
        };

        settings.validate()?;

        if !settings.email.is_configured() {
            tracing::warn!("EMAIL_USERNAME/EMAIL_PASSWORD not set, email delivery is disabled");
        }
        tracing::debug!("Model artifact path: {}", settings.model.path.display());

        Ok(settings)
    }
}

// =============================================================================
// API Metadata
// =============================================================================

/// Title, version and description published in the API docs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct ApiSettings {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub version: String,
    pub description: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_API_TITLE.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            description: DEFAULT_API_DESCRIPTION.to_string(),
        }
    }
}

// =============================================================================
// Server
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct ServerSettings {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
}

impl ServerSettings {
    /// Get the full server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

// =============================================================================
// Database
// =============================================================================

/// MySQL connection settings.
#[derive(Clone, PartialEq, Eq, Serialize, Validate)]
pub struct DatabaseSettings {
    #[validate(length(min = 1))]
    pub host: String,
    pub user: String,
    #[serde(serialize_with = "redact")]
    pub password: String,
    pub name: String,
    #[validate(range(min = 1))]
    pub port: u16,
}

/// Keyword arguments for a MySQL driver connect call.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct DbConnectionParams {
    pub host: String,
    pub user: String,
    pub passwd: String,
    pub db: String,
    pub port: u16,
}

impl DatabaseSettings {
    /// Shape the settings into driver connect parameters.
    pub fn connection_params(&self) -> DbConnectionParams {
        DbConnectionParams {
            host: self.host.clone(),
            user: self.user.clone(),
            passwd: self.password.clone(),
            db: self.name.clone(),
            port: self.port,
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            user: DEFAULT_DB_USER.to_string(),
            password: DEFAULT_DB_PASSWORD.to_string(),
            name: DEFAULT_DB_NAME.to_string(),
            port: DEFAULT_DB_PORT,
        }
    }
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &REDACTED)
            .field("name", &self.name)
            .field("port", &self.port)
            .finish()
    }
}

impl fmt::Debug for DbConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConnectionParams")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("passwd", &REDACTED)
            .field("db", &self.db)
            .field("port", &self.port)
            .finish()
    }
}

// =============================================================================
// Email
// =============================================================================

/// SMTP settings. Credentials have no built-in default.
#[derive(Clone, PartialEq, Eq, Serialize, Validate)]
pub struct EmailSettings {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    pub username: Option<String>,
    #[serde(serialize_with = "redact_optional")]
    pub password: Option<String>,
}

impl EmailSettings {
    /// Username and password, only when both are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    pub fn smtp_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_EMAIL_HOST.to_string(),
            port: DEFAULT_EMAIL_PORT,
            username: None,
            password: None,
        }
    }
}

impl fmt::Debug for EmailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .finish()
    }
}

// =============================================================================
// Security
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecuritySettings {
    pub otp_expiry_seconds: u64,
}

impl SecuritySettings {
    pub fn otp_expiry(&self) -> Duration {
        Duration::from_secs(self.otp_expiry_seconds)
    }
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            otp_expiry_seconds: DEFAULT_OTP_EXPIRY_SECONDS,
        }
    }
}

// =============================================================================
// Model Artifact
// =============================================================================

/// Location of the serialized model. `path` is always absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelSettings {
    pub base_dir: PathBuf,
    pub path: PathBuf,
}

impl ModelSettings {
    fn from_reader(reader: &EnvReader<'_>) -> ConfigResult<Self> {
        let base_dir = match reader.optional(&env::APP_BASE_DIR) {
            Some(dir) => {
                let dir = PathBuf::from(dir);
                if !dir.is_absolute() {
                    return Err(ConfigError::RelativeBaseDir(dir));
                }
                normalize_lexically(&dir)
            }
            None => default_base_dir(),
        };

        let override_value = reader.raw(&env::MODEL_PATH);
        let path = resolve_model_path(
            &base_dir,
            Path::new(DEFAULT_MODEL_SUBPATH),
            override_value.as_deref(),
        );

        Ok(Self { base_dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the artifact is currently present on disk.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        let base_dir = default_base_dir();
        let path = default_model_path(&base_dir);
        Self { base_dir, path }
    }
}

// =============================================================================
// CORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorsSettings {
    pub origins: Vec<String>,
    pub allow_credentials: bool,
    /// Upper-cased HTTP method names, or `*`
    pub methods: Vec<String>,
    pub headers: Vec<String>,
}

impl CorsSettings {
    fn from_reader(reader: &EnvReader<'_>) -> ConfigResult<Self> {
        let methods = reader
            .list(&env::CORS_METHODS)
            .into_iter()
            .map(|method| method.to_ascii_uppercase())
            .collect();

        Ok(Self {
            origins: reader.list(&env::CORS_ORIGINS),
            allow_credentials: reader.flag(&env::CORS_CREDENTIALS)?,
            methods,
            headers: reader.list(&env::CORS_HEADERS),
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.origins.iter().any(|origin| origin == CORS_WILDCARD)
    }

    pub fn allows_any_method(&self) -> bool {
        self.methods.iter().any(|method| method == CORS_WILDCARD)
    }

    pub fn allows_any_header(&self) -> bool {
        self.headers.iter().any(|header| header == CORS_WILDCARD)
    }
}

impl Default for CorsSettings {
    fn default() -> Self {
        let list = |value: &str| value.split(',').map(str::to_string).collect::<Vec<_>>();
        Self {
            origins: list(DEFAULT_CORS_ORIGINS),
            allow_credentials: DEFAULT_CORS_CREDENTIALS,
            methods: list(DEFAULT_CORS_METHODS),
            headers: list(DEFAULT_CORS_HEADERS),
        }
    }
}

// =============================================================================
// Redaction
// =============================================================================

fn redact<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str(REDACTED)
    }
}

fn redact_optional<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(_) => serializer.serialize_str(REDACTED),
        None => serializer.serialize_none(),
    }
}
