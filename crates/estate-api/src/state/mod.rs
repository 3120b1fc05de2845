//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, configuration, image store, and database pool.

use std::sync::Arc;

use estate_common::AppConfig;
use estate_db::PgPool;
use estate_service::ServiceContext;

use crate::storage::ImageStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Listing image storage
    image_store: ImageStore,
    /// Database pool, used directly only by the readiness probe
    db_pool: PgPool,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        image_store: ImageStore,
        db_pool: PgPool,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            image_store,
            db_pool,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the image store
    pub fn image_store(&self) -> &ImageStore {
        &self.image_store
    }

    /// Get the database pool
    pub fn db_pool(&self) -> &PgPool {
        &self.db_pool
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .finish()
    }
}
