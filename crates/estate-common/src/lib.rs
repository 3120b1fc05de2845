//! # estate-common
//!
//! Shared utilities including configuration, error handling, authentication,
//! outbound mail, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod mail;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    hash_password, validate_password_strength, verify_password, Claims, JwtService, TokenPair,
    TokenType,
};
pub use config::{
    AppConfig, AppSettings, ConfigError, CookieConfig, CorsConfig, DatabaseConfig, Environment,
    JwtConfig, RateLimitConfig, ServerConfig, SmtpConfig, SnowflakeConfig, StorageConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use mail::Mailer;
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
