//! Configuration structs

mod app_config;

pub use app_config::{
    AdminConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    FallbackStoreConfig, RateLimitConfig, ServerConfig, WebhookConfig,
};
