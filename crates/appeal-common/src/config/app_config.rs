//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub fallback: FallbackStoreConfig,
    pub webhook: WebhookConfig,
    pub admin: AdminConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(()),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    /// Upper bound on handling one request, after which it answers 503
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Primary store (PostgreSQL) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    #[must_use]
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

/// Local fallback store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackStoreConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

/// Outbound chat webhook configuration
///
/// A missing URL is a supported state: notifications are disabled.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_webhook_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_webhook_timeout_secs(),
        }
    }
}

impl WebhookConfig {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Administrative API access
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AdminConfig {
    /// Bearer token for the admin routes; admin routes are closed when unset
    #[serde(default)]
    pub token: Option<String>,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: default_requests_per_second(),
            burst: default_burst(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "appeal-server".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    0
}

fn default_acquire_timeout_secs() -> u64 {
    5
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_storage_key() -> String {
    "zcraft_appeals".to_string()
}

fn default_webhook_timeout_secs() -> u64 {
    10
}

fn default_requests_per_second() -> u32 {
    5
}

fn default_burst() -> u32 {
    20
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value fails to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let webhook_url = get("APPEAL_WEBHOOK_URL").or_else(|| get("VITE_APPEAL_WEBHOOK_URL"));
        if let Some(url) = &webhook_url {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::InvalidValue(
                    "APPEAL_WEBHOOK_URL",
                    "must be an http(s) URL".to_string(),
                ));
            }
        }

        let config = Self {
            app: AppSettings {
                name: get("APP_NAME").unwrap_or_else(default_app_name),
                env: get("APP_ENV")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: get("API_HOST").unwrap_or_else(default_host),
                port: parse_or(&get, "API_PORT", default_port)?,
                request_timeout_secs: parse_or(
                    &get,
                    "REQUEST_TIMEOUT_SECS",
                    default_request_timeout_secs,
                )?,
            },
            database: DatabaseConfig {
                url: get("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(&get, "DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: parse_or(&get, "DATABASE_MIN_CONNECTIONS", default_min_connections)?,
                acquire_timeout_secs: parse_or(
                    &get,
                    "DATABASE_ACQUIRE_TIMEOUT_SECS",
                    default_acquire_timeout_secs,
                )?,
            },
            fallback: FallbackStoreConfig {
                data_dir: get("FALLBACK_DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(default_data_dir),
                storage_key: get("FALLBACK_STORAGE_KEY").unwrap_or_else(default_storage_key),
            },
            webhook: WebhookConfig {
                url: webhook_url,
                timeout_secs: parse_or(&get, "WEBHOOK_TIMEOUT_SECS", default_webhook_timeout_secs)?,
            },
            admin: AdminConfig {
                token: get("ADMIN_TOKEN"),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_or(
                    &get,
                    "RATE_LIMIT_REQUESTS_PER_SECOND",
                    default_requests_per_second,
                )?,
                burst: parse_or(&get, "RATE_LIMIT_BURST", default_burst)?,
            },
            cors: CorsConfig {
                allowed_origins: get("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        };

        config.check_submission_fits_request_timeout()?;
        Ok(config)
    }

    /// A submission may wait on a database connection and then on the
    /// webhook before it answers. Both together must end before the request
    /// timeout, or a stored appeal is reported to the submitter as a failure.
    fn check_submission_fits_request_timeout(&self) -> Result<(), ConfigError> {
        if !self.webhook.is_enabled() {
            return Ok(());
        }

        let worst_case = self
            .database
            .acquire_timeout_secs
            .saturating_add(self.webhook.timeout_secs);
        if worst_case >= self.api.request_timeout_secs {
            return Err(ConfigError::InvalidValue(
                "WEBHOOK_TIMEOUT_SECS",
                format!(
                    "{}s webhook plus {}s database acquire must stay below the {}s request timeout",
                    self.webhook.timeout_secs,
                    self.database.acquire_timeout_secs,
                    self.api.request_timeout_secs
                ),
            ));
        }
        Ok(())
    }
}

/// Parse an optional variable, falling back to a default when unset
fn parse_or<G, T, D>(get: &G, key: &'static str, default: D) -> Result<T, ConfigError>
where
    G: Fn(&str) -> Option<String>,
    T: FromStr,
    D: FnOnce() -> T,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
