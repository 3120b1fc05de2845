//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use estate_core::Snowflake;

use crate::response::ApiError;

/// Extracts a single Snowflake ID path parameter
///
/// IDs travel as strings in URLs; anything that does not parse as an i64
/// is a 400, not a 404.
#[derive(Debug, Clone, Copy)]
pub struct SnowflakePath(pub Snowflake);

#[async_trait]
impl<S> FromRequestParts<S> for SnowflakePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.to_string()))?;

        raw.parse::<i64>()
            .map(|id| SnowflakePath(Snowflake::new(id)))
            .map_err(|_| ApiError::invalid_body(format!("Invalid ID: {raw}")))
    }
}
