//! Authentication extractors
//!
//! [`AuthUser`] resolves the caller from the `accessToken` cookie or, failing
//! that, the `Authorization: Bearer` header; the cookie wins when both are
//! present. Claims are always resolved against the store, so a token for a
//! deleted account fails even while its signature is valid. [`AdminUser`]
//! layers a pure role check on top.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    RequestPartsExt,
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use estate_common::AppError;
use estate_core::entities::User;
use estate_service::AuthService;

use crate::cookies::ACCESS_TOKEN_COOKIE;
use crate::response::ApiError;
use crate::state::AppState;

/// Extractor for the authenticated user
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let token = access_token(parts)
            .await
            .ok_or(ApiError::App(AppError::MissingToken))?;

        let user = AuthService::new(state.service_context())
            .get_user_from_token(&token)
            .await?;

        Ok(AuthUser(user))
    }
}

/// Extractor for an authenticated admin
///
/// Missing identity fails with 401 before the role is ever looked at;
/// a non-admin identity fails with 403.
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;

        if !user.is_admin() {
            return Err(ApiError::App(AppError::InsufficientRole));
        }

        Ok(AdminUser(user))
    }
}

/// Access token from the cookie, falling back to the Authorization header
async fn access_token(parts: &mut Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) {
        return Some(cookie.value().to_string());
    }

    match parts
        .extract::<Option<TypedHeader<Authorization<Bearer>>>>()
        .await
    {
        Ok(Some(TypedHeader(Authorization(bearer)))) => Some(bearer.token().to_string()),
        _ => None,
    }
}
