//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    /// Stored role name; parsed into `Role` by the mapper
    pub role: String,
    /// The only valid refresh token for this account, NULL when logged out
    pub current_refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
