//! Authentication handlers
//!
//! Signup, login, token refresh, and logout. Login and refresh set the token
//! cookies; the refresh token never appears in a response body, only the
//! access token does (for non-browser clients using `Authorization: Bearer`).

use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use serde::Serialize;

use estate_common::AppError;
use estate_service::dto::{
    ApiResponse, LoginRequest, RefreshTokenRequest, SignupRequest, UserResponse,
};
use estate_service::{AuthService, AuthSession};

use crate::cookies::{with_session_cookies, without_session_cookies, REFRESH_TOKEN_COOKIE};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, MessageBody};
use crate::state::AppState;

/// Session body returned by login and refresh
///
/// Deliberately has no refresh token field; that one travels only in the
/// `refreshToken` cookie.
#[derive(Debug, Serialize)]
pub struct SessionBody {
    pub user: UserResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<AuthSession> for SessionBody {
    fn from(session: AuthSession) -> Self {
        Self {
            user: session.user,
            access_token: session.tokens.access_token,
            token_type: session.tokens.token_type,
            expires_in: session.tokens.expires_in,
        }
    }
}

/// Register a new account
///
/// POST /users/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<Json<ApiResponse<UserResponse>>>> {
    let service = AuthService::new(state.service_context());
    let user = service.signup(request).await?;
    Ok(Created(Json(ApiResponse::new(user))))
}

/// Login with username or email
///
/// POST /users/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<SessionBody>>)> {
    let service = AuthService::new(state.service_context());
    let session = service.login(request).await?;

    let jar = with_session_cookies(jar, &session.tokens, state.config());
    Ok((jar, Json(ApiResponse::new(SessionBody::from(session)))))
}

/// Rotate the refresh token and issue a new pair
///
/// POST /users/refresh-token
///
/// The presented token comes from the `refreshToken` cookie or, failing
/// that, the request body.
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Option<Json<RefreshTokenRequest>>,
) -> ApiResult<(CookieJar, Json<ApiResponse<SessionBody>>)> {
    let presented = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .or_else(|| body.and_then(|b| b.0.refresh_token))
        .ok_or(AppError::MissingToken)?;

    let service = AuthService::new(state.service_context());
    let session = service.refresh(&presented).await?;

    let jar = with_session_cookies(jar, &session.tokens, state.config());
    Ok((jar, Json(ApiResponse::new(SessionBody::from(session)))))
}

/// Logout by revoking the stored refresh token and expiring both cookies
///
/// POST /users/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<ApiResponse<MessageBody>>)> {
    let service = AuthService::new(state.service_context());
    service.logout(auth.0.id).await?;

    let jar = without_session_cookies(jar, state.config());
    Ok((jar, Json(ApiResponse::new(MessageBody::new("Logged out")))))
}
