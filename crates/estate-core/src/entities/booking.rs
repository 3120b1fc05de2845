//! Booking entity
//!
//! Payment is a placeholder: bookings are recorded as `Completed` without any
//! card processing. No card data is ever accepted or stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::value_objects::Snowflake;

/// Payment status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
}

impl PaymentStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(format!("unknown payment status: {other}")),
        }
    }
}

/// Property booking
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub property_id: Snowflake,
    pub amount: f64,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(id: Snowflake, user_id: Snowflake, property_id: Snowflake, amount: f64) -> Self {
        Self {
            id,
            user_id,
            property_id,
            amount,
            payment_status: PaymentStatus::Completed,
            created_at: Utc::now(),
        }
    }
}
