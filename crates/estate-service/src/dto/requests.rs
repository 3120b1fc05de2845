//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 5, max = 32, message = "Phone must be 5-32 characters"))]
    pub phone: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// User login request
///
/// Either `email` or `username` identifies the account; at least one must be
/// present, which the service checks since `validator` cannot express it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub username: Option<String>,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

impl LoginRequest {
    /// The login identifier: email when given, username otherwise
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.email
            .as_deref()
            .or(self.username.as_deref())
            .filter(|s| !s.is_empty())
    }
}

/// Token refresh request (body fallback when the cookie is absent)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Promote an account to admin
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MakeAdminRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

// ============================================================================
// Property Requests
// ============================================================================

/// Create property request (assembled from multipart fields)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePropertyRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    /// "sale" or "rent"
    pub listing_type: String,

    #[validate(range(min = 0, message = "Bedrooms must not be negative"))]
    pub bedrooms: i32,

    #[validate(range(min = 0, message = "Bathrooms must not be negative"))]
    pub bathrooms: i32,

    #[validate(range(min = 0, message = "Floor area must not be negative"))]
    pub floor_area: i32,

    #[validate(range(min = 0, message = "Total floors must not be negative"))]
    pub total_floors: i32,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[validate(length(min = 1, message = "Address must not be empty"))]
    pub address: String,

    #[validate(length(min = 1, message = "City must not be empty"))]
    pub city: String,

    #[validate(length(min = 1, message = "State must not be empty"))]
    pub state: String,

    #[validate(length(min = 1, message = "Country must not be empty"))]
    pub country: String,

    #[validate(length(min = 1, message = "Contact name must not be empty"))]
    pub contact_name: String,

    #[validate(email(message = "Invalid contact email format"))]
    pub contact_email: String,

    #[validate(length(min = 5, max = 32, message = "Contact phone must be 5-32 characters"))]
    pub contact_phone: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub discounted_price: Option<f64>,
}

/// Update property request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePropertyRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    /// "sale" or "rent"
    pub listing_type: Option<String>,

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

    #[validate(email(message = "Invalid contact email format"))]
    pub contact_email: Option<String>,

    pub contact_phone: Option<String>,
    pub price: Option<f64>,
    pub discounted_price: Option<f64>,

    /// Image URLs the client wants to keep; newly uploaded files are appended
    pub existing_images: Option<Vec<String>>,
}

// ============================================================================
// Contact Requests
// ============================================================================

/// Public contact form submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 255, message = "Subject must be 1-255 characters"))]
    pub subject: String,

    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub message: String,
}

/// Relay a visitor message to a property owner by email
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactOwnerRequest {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub message: String,

    #[validate(email(message = "Invalid owner email format"))]
    pub owner_email: String,
}

// ============================================================================
// Booking Requests
// ============================================================================

/// Record a booking (payment placeholder)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// Snowflake as string
    pub user_id: String,

    /// Snowflake as string
    pub property_id: String,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,
}
