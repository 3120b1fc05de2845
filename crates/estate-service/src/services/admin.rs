//! Admin service - account promotion

use tracing::{info, instrument};

use estate_core::value_objects::Role;

use crate::dto::{MakeAdminRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Promote the account with the given email to admin
    ///
    /// Idempotent: promoting an existing admin succeeds without a write.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn make_admin(&self, request: MakeAdminRequest) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", request.email.clone()))?;

        if !user.is_admin() {
            self.ctx.user_repo().set_role(user.id, Role::Admin).await?;
            user.promote_to_admin();
            info!(user_id = %user.id, "User promoted to admin");
        }

        Ok(UserResponse::from(&user))
    }
}
