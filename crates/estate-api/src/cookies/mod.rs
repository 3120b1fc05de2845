//! Token cookie builders
//!
//! Both tokens travel as httpOnly cookies on `/`. Production cookies are
//! Secure + SameSite=Strict; development relaxes to SameSite=Lax so that a
//! local frontend on another port can talk to the API. The refresh token is
//! carried by its cookie only and never appears in a response body.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use estate_common::auth::TokenPair;
use estate_common::AppConfig;

/// Cookie carrying the access token
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Cookie carrying the refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// Add both token cookies to the jar
pub fn with_session_cookies(jar: CookieJar, tokens: &TokenPair, config: &AppConfig) -> CookieJar {
    jar.add(token_cookie(
        ACCESS_TOKEN_COOKIE,
        tokens.access_token.clone(),
        config,
        config.jwt.access_token_expiry,
    ))
    .add(token_cookie(
        REFRESH_TOKEN_COOKIE,
        tokens.refresh_token.clone(),
        config,
        config.jwt.refresh_token_expiry,
    ))
}

/// Expire both token cookies
pub fn without_session_cookies(jar: CookieJar, config: &AppConfig) -> CookieJar {
    jar.remove(removal_cookie(ACCESS_TOKEN_COOKIE, config))
        .remove(removal_cookie(REFRESH_TOKEN_COOKIE, config))
}

fn token_cookie(
    name: &'static str,
    value: String,
    config: &AppConfig,
    max_age_secs: i64,
) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_max_age(time::Duration::seconds(max_age_secs));

    if config.app.env.is_production() {
        cookie.set_secure(true);
        cookie.set_same_site(SameSite::Strict);
    } else {
        cookie.set_same_site(SameSite::Lax);
    }

    if !config.cookie.domain.is_empty() {
        cookie.set_domain(config.cookie.domain.clone());
    }

    cookie
}

/// Removal must match path and domain of the original cookie
fn removal_cookie(name: &'static str, config: &AppConfig) -> Cookie<'static> {
    let mut cookie = Cookie::from(name);
    cookie.set_path("/");
    if !config.cookie.domain.is_empty() {
        cookie.set_domain(config.cookie.domain.clone());
    }
    cookie
}
