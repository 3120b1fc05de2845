//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs and the infrastructure layer
//! provides the implementation. The refresh-token methods on
//! `UserRepository` carry the session-rotation semantics: the stored value
//! is the single source of truth for refresh-token validity, and rotation is
//! a compare-and-swap so that two concurrent refreshes presenting the same
//! token can never both succeed.

use async_trait::async_trait;

use crate::entities::{Booking, ContactMessage, Property, User};
use crate::error::DomainError;
use crate::value_objects::{ListingType, Role, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user whose username or email equals the identifier
    ///
    /// Usernames are compared against the lowercased identifier.
    async fn find_by_identifier(&self, identifier: &str) -> RepoResult<Option<User>>;

    /// Check if the username or email is already taken
    async fn identifier_exists(&self, username: &str, email: &str) -> RepoResult<bool>;

    /// Persist a new user with its password hash
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Fetch the stored password hash
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Overwrite the stored refresh token unconditionally (login)
    async fn set_refresh_token(&self, id: Snowflake, token: &str) -> RepoResult<()>;

    /// Compare-and-swap the stored refresh token (rotation)
    ///
    /// Replaces the stored token with `new` only if the stored value equals
    /// `current`, as a single atomic write. Returns `false` when the stored
    /// value did not match (the token was already rotated or revoked).
    async fn rotate_refresh_token(
        &self,
        id: Snowflake,
        current: &str,
        new: &str,
    ) -> RepoResult<bool>;

    /// Clear the stored refresh token (logout)
    async fn clear_refresh_token(&self, id: Snowflake) -> RepoResult<()>;

    /// Update the account role
    async fn set_role(&self, id: Snowflake, role: Role) -> RepoResult<()>;
}

// ============================================================================
// Property Repository
// ============================================================================

/// Field set for a property update; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct PropertyUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub listing_type: Option<ListingType>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub floor_area: Option<i32>,
    pub total_floors: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub price: Option<f64>,
    pub discounted_price: Option<f64>,
    /// Full replacement image list (existing URLs kept by the caller plus new uploads)
    pub images: Option<Vec<String>>,
}

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Find listing by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Property>>;

    /// List all listings, newest first
    async fn list_all(&self) -> RepoResult<Vec<Property>>;

    /// Persist a new listing
    async fn create(&self, property: &Property) -> RepoResult<()>;

    /// Apply a partial update, returning the updated listing
    async fn update(&self, id: Snowflake, update: &PropertyUpdate) -> RepoResult<Property>;

    /// Delete a listing
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Contact Repository
// ============================================================================

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a contact form submission
    async fn create(&self, contact: &ContactMessage) -> RepoResult<()>;

    /// List all submissions, newest first
    async fn list_all(&self) -> RepoResult<Vec<ContactMessage>>;

    /// Delete a submission
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Booking Repository
// ============================================================================

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a booking
    async fn create(&self, booking: &Booking) -> RepoResult<()>;

    /// Find booking by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Booking>>;
}
