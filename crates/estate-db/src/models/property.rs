//! Property database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for properties table
#[derive(Debug, Clone, FromRow)]
pub struct PropertyModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// "sale" or "rent"; parsed into `ListingType` by the mapper
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
    pub discounted_price: Option<f64>,
    pub images: Vec<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
