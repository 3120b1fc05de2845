//! Booking database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for bookings table
#[derive(Debug, Clone, FromRow)]
pub struct BookingModel {
    pub id: i64,
    pub user_id: i64,
    pub property_id: i64,
    pub amount: f64,
    /// "pending" or "completed"; parsed into `PaymentStatus` by the mapper
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
}
