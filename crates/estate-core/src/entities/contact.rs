//! Contact message entity - a message submitted through the public contact form

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Contact form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: Snowflake,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(id: Snowflake, name: String, email: String, subject: String, message: String) -> Self {
        Self {
            id,
            name,
            email,
            subject,
            message,
            created_at: Utc::now(),
        }
    }
}
