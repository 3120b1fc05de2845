//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("User not found")]
    UserNotFoundByIdentifier,

    #[error("Property not found: {0}")]
    PropertyNotFound(Snowflake),

    #[error("Contact message not found: {0}")]
    ContactNotFound(Snowflake),

    #[error("Booking not found: {0}")]
    BookingNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Invalid role stored for user: {0}")]
    InvalidStoredRole(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the listing owner")]
    NotListingOwner,

    #[error("Admin access required")]
    AdminRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists")]
    UserAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) | Self::UserNotFoundByIdentifier => "UNKNOWN_USER",
            Self::PropertyNotFound(_) => "UNKNOWN_PROPERTY",
            Self::ContactNotFound(_) => "UNKNOWN_CONTACT",
            Self::BookingNotFound(_) => "UNKNOWN_BOOKING",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidStoredRole(_) => "INVALID_ROLE",

            // Authorization
            Self::NotListingOwner => "NOT_LISTING_OWNER",
            Self::AdminRequired => "ADMIN_REQUIRED",

            // Conflict
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::UserNotFoundByIdentifier
                | Self::PropertyNotFound(_)
                | Self::ContactNotFound(_)
                | Self::BookingNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidEmail | Self::WeakPassword(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotListingOwner | Self::AdminRequired)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UserAlreadyExists)
    }
}
