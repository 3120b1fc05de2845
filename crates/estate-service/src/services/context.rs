//! Service context - dependency container for services
//!
//! Holds the repositories, JWT service, mailer, and ID generator that
//! services need. Repositories are held as trait objects so tests can swap
//! in in-memory fakes; nothing here touches a concrete database type.

use std::sync::Arc;

use estate_common::auth::JwtService;
use estate_common::mail::Mailer;
use estate_core::traits::{
    BookingRepository, ContactRepository, PropertyRepository, UserRepository,
};
use estate_core::SnowflakeGenerator;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    property_repo: Arc<dyn PropertyRepository>,
    contact_repo: Arc<dyn ContactRepository>,
    booking_repo: Arc<dyn BookingRepository>,

    jwt_service: Arc<JwtService>,
    mailer: Mailer,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        property_repo: Arc<dyn PropertyRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        jwt_service: Arc<JwtService>,
        mailer: Mailer,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            property_repo,
            contact_repo,
            booking_repo,
            jwt_service,
            mailer,
            snowflake_generator,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the property repository
    pub fn property_repo(&self) -> &dyn PropertyRepository {
        self.property_repo.as_ref()
    }

    /// Get the contact repository
    pub fn contact_repo(&self) -> &dyn ContactRepository {
        self.contact_repo.as_ref()
    }

    /// Get the booking repository
    pub fn booking_repo(&self) -> &dyn BookingRepository {
        self.booking_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the mailer
    pub fn mailer(&self) -> &Mailer {
        &self.mailer
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> estate_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("mailer", &self.mailer)
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    property_repo: Option<Arc<dyn PropertyRepository>>,
    contact_repo: Option<Arc<dyn ContactRepository>>,
    booking_repo: Option<Arc<dyn BookingRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    mailer: Option<Mailer>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            property_repo: None,
            contact_repo: None,
            booking_repo: None,
            jwt_service: None,
            mailer: None,
            snowflake_generator: None,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn property_repo(mut self, repo: Arc<dyn PropertyRepository>) -> Self {
        self.property_repo = Some(repo);
        self
    }

    pub fn contact_repo(mut self, repo: Arc<dyn ContactRepository>) -> Self {
        self.contact_repo = Some(repo);
        self
    }

    pub fn booking_repo(mut self, repo: Arc<dyn BookingRepository>) -> Self {
        self.booking_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn mailer(mut self, mailer: Mailer) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.property_repo
                .ok_or_else(|| ServiceError::validation("property_repo is required"))?,
            self.contact_repo
                .ok_or_else(|| ServiceError::validation("contact_repo is required"))?,
            self.booking_repo
                .ok_or_else(|| ServiceError::validation("booking_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.mailer
                .ok_or_else(|| ServiceError::validation("mailer is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
