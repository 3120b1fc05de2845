//! Property entity - a real-estate listing

use chrono::{DateTime, Utc};

use crate::value_objects::{ListingType, Snowflake};

/// Real-estate listing
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: Snowflake,
    pub name: String,
    pub description: String,
    pub listing_type: ListingType,
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
    /// URLs of stored images
    pub images: Vec<String>,
    pub created_by: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Check whether the given user may mutate this listing
    ///
    /// Mutation is allowed for the creator and for admins.
    pub fn can_be_mutated_by(&self, user_id: Snowflake, is_admin: bool) -> bool {
        is_admin || self.created_by == user_id
    }
}
