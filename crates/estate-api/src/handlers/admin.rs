//! Admin handlers

use axum::{extract::State, Json};

use estate_service::dto::{ApiResponse, MakeAdminRequest, UserResponse};
use estate_service::AdminService;

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Promote an account to admin by email
///
/// POST /admin/make-admin
///
/// Idempotent: promoting an existing admin returns 200 with the same body.
pub async fn make_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<MakeAdminRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let service = AdminService::new(state.service_context());
    let user = service.make_admin(request).await?;
    Ok(Json(ApiResponse::new(user)))
}
