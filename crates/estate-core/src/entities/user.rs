//! User entity - a platform account
//!
//! Password hashes and the current refresh token never appear here; they are
//! read and written only through dedicated repository methods so that no
//! serialization path can leak them.

use chrono::{DateTime, Utc};

use crate::value_objects::{Role, Snowflake};

/// User account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    /// Stored lowercased; uniqueness is enforced on the normalized form
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with the default role
    pub fn new(id: Snowflake, username: String, email: String, phone: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: username.to_lowercase(),
            email,
            phone,
            role: Role::default(),
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Promote the account to admin
    pub fn promote_to_admin(&mut self) {
        self.role = Role::Admin;
        self.updated_at = Utc::now();
    }
}
