//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use estate_common::{AppConfig, AppError, JwtService, Mailer};
use estate_core::SnowflakeGenerator;
use estate_db::{
    create_pool, run_migrations, PgBookingRepository, PgContactRepository, PgPropertyRepository,
    PgUserRepository,
};
use estate_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;
use crate::storage::ImageStore;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let api = apply_middleware(
        create_router(state.image_store().request_body_limit()),
        &state.config().rate_limit,
        &state.config().cors,
        state.config().app.env.is_production(),
    );

    let router = api
        .merge(health_routes())
        .nest_service("/uploads", ServeDir::new(state.image_store().dir()));

    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool and apply migrations
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create JWT service with distinct access/refresh secrets
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.access_secret,
        &config.jwt.refresh_secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    // Create outbound mailer
    let mailer = Mailer::from_config(&config.smtp)?;

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create image store
    let image_store = ImageStore::new(&config.storage);
    image_store
        .ensure_dir()
        .await
        .map_err(|e| AppError::Config(e.to_string()))?;

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let property_repo = Arc::new(PgPropertyRepository::new(pool.clone()));
    let contact_repo = Arc::new(PgContactRepository::new(pool.clone()));
    let booking_repo = Arc::new(PgBookingRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .property_repo(property_repo)
        .contact_repo(contact_repo)
        .booking_repo(booking_repo)
        .jwt_service(jwt_service)
        .mailer(mailer)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, image_store, pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
