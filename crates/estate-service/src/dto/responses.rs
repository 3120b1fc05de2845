//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.
//! Password hashes and refresh tokens never appear in any response type.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Sanitized user response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Property Responses
// ============================================================================

/// Property listing response
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub listing_type: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub floor_area: i32,
    pub total_floors: i32,
    pub amenities: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<f64>,
    pub images: Vec<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Contact Responses
// ============================================================================

/// Contact form submission response
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Booking Responses
// ============================================================================

/// Booking response
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub user_id: String,
    pub property_id: String,
    pub amount: f64,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
}
