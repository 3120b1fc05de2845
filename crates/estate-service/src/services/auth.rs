//! Authentication service
//!
//! Handles signup, login, token refresh, and logout. The stored
//! `current_refresh_token` is the single source of truth for refresh
//! validity: issuing tokens persists the refresh token before anything is
//! returned, and rotation replaces it with a conditional write so that two
//! concurrent refreshes presenting the same token can never both succeed.

use estate_common::auth::{hash_password, validate_password_strength, verify_password, TokenPair};
use estate_common::AppError;
use estate_core::entities::User;
use estate_core::Snowflake;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, SignupRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// An authenticated session: the issued tokens plus the sanitized user
///
/// Not serializable on purpose; the API layer decides which parts reach the
/// response body and which travel as cookies.
#[derive(Debug)]
pub struct AuthSession {
    pub tokens: TokenPair,
    pub user: UserResponse,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    ///
    /// Signup does not log the user in; the client follows with a login call.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<UserResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        let username = request.username.to_lowercase();
        if self
            .ctx
            .user_repo()
            .identifier_exists(&username, &request.email)
            .await?
        {
            return Err(ServiceError::conflict("Username or email already taken"));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = User::new(
            self.ctx.generate_id(),
            request.username,
            request.email,
            request.phone,
        );

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User signed up");

        Ok(UserResponse::from(&user))
    }

    /// Login with username or email
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthSession> {
        let identifier = request
            .identifier()
            .ok_or_else(|| ServiceError::validation("Username or email is required"))?;

        if request.password.is_empty() {
            return Err(ServiceError::validation("Password is required"));
        }

        // Unknown identifier is a 404; a wrong password stays a generic 401
        let user = self
            .ctx
            .user_repo()
            .find_by_identifier(identifier)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown identifier");
                ServiceError::not_found("User", identifier)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let tokens = self.issue_tokens(user.id).await?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthSession {
            tokens,
            user: UserResponse::from(&user),
        })
    }

    /// Rotate the refresh token and issue a new pair
    ///
    /// `presented` comes from the refresh cookie or the request body. A token
    /// that no longer equals the stored value - already rotated, or revoked by
    /// logout - fails with a 401 regardless of its signature.
    #[instrument(skip(self, presented))]
    pub async fn refresh(&self, presented: &str) -> ServiceResult<AuthSession> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(presented)
            .map_err(ServiceError::from)?;
        let user_id = claims.user_id().map_err(ServiceError::from)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        let tokens = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        // Conditional write: with two concurrent refreshes of the same token
        // exactly one matches the stored value; the loser gets a 401.
        let rotated = self
            .ctx
            .user_repo()
            .rotate_refresh_token(user.id, presented, &tokens.refresh_token)
            .await?;

        if !rotated {
            warn!(user_id = %user.id, "Refresh rejected: token already rotated or revoked");
            return Err(ServiceError::App(AppError::RefreshTokenReused));
        }

        info!(user_id = %user.id, "Tokens refreshed");

        Ok(AuthSession {
            tokens,
            user: UserResponse::from(&user),
        })
    }

    /// Logout by revoking the stored refresh token
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: Snowflake) -> ServiceResult<()> {
        self.ctx.user_repo().clear_refresh_token(user_id).await?;
        info!(user_id = %user_id, "User logged out");
        Ok(())
    }

    /// Validate an access token and return the user ID
    #[instrument(skip(self, token))]
    pub fn validate_token(&self, token: &str) -> ServiceResult<Snowflake> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(token)
            .map_err(ServiceError::from)?;

        claims.user_id().map_err(ServiceError::from)
    }

    /// Resolve the account behind an access token
    #[instrument(skip(self, token))]
    pub async fn get_user_from_token(&self, token: &str) -> ServiceResult<User> {
        let user_id = self.validate_token(token)?;

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Generate a token pair and persist the refresh token
    ///
    /// The refresh token is stored before the pair is returned; a persistence
    /// failure aborts the whole operation.
    async fn issue_tokens(&self, user_id: Snowflake) -> ServiceResult<TokenPair> {
        let tokens = self
            .ctx
            .jwt_service()
            .generate_token_pair(user_id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .user_repo()
            .set_refresh_token(user_id, &tokens.refresh_token)
            .await?;

        Ok(tokens)
    }
}
