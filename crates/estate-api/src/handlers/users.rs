//! User handlers

use axum::Json;

use estate_service::dto::{ApiResponse, UserResponse};

use crate::extractors::AuthUser;
use crate::response::ApiResult;

/// Get the current sanitized user
///
/// GET /users/me
pub async fn me(auth: AuthUser) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    Ok(Json(ApiResponse::new(UserResponse::from(&auth.0))))
}
