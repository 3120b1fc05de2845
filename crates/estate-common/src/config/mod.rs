//! Application configuration loaded from environment variables

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CookieConfig, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, RateLimitConfig, ServerConfig, SmtpConfig, SnowflakeConfig, StorageConfig,
};
