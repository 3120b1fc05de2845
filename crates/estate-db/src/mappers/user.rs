//! User entity <-> model mapper

use estate_core::entities::User;
use estate_core::error::DomainError;
use estate_core::value_objects::{Role, Snowflake};

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// Fails when the stored role string is not a known role; such rows are
/// surfaced as errors rather than silently downgraded.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role = model
            .role
            .parse::<Role>()
            .map_err(|e| DomainError::InvalidStoredRole(e.0))?;

        Ok(User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            phone: model.phone,
            role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
