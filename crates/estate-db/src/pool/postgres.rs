//! PostgreSQL connection pool management

use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

pub use sqlx::PgPool;

use estate_common::config::DatabaseConfig;

/// Create a new PostgreSQL connection pool
///
/// # Errors
/// Returns an error if the database is unreachable
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.url)
        .await
}

/// Apply pending migrations from the workspace `migrations/` directory
///
/// # Errors
/// Returns an error if a migration fails to apply
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
