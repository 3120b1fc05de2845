//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{admin, auth, bookings, contacts, health, properties, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
///
/// `upload_body_limit` raises the framework's default request-body cap on the
/// routes that take multipart image uploads; every other route keeps the
/// default.
pub fn create_router(upload_body_limit: usize) -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes(upload_body_limit))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes(upload_body_limit: usize) -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(admin_routes())
        .merge(property_routes(upload_body_limit))
        .merge(contact_routes())
        .merge(booking_routes())
}

/// User and session routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/signup", post(auth::signup))
        .route("/users/login", post(auth::login))
        .route("/users/refresh-token", post(auth::refresh_token))
        .route("/users/logout", post(auth::logout))
        .route("/users/me", get(users::me))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new().route("/admin/make-admin", post(admin::make_admin))
}

/// Property routes
fn property_routes(upload_body_limit: usize) -> Router<AppState> {
    Router::new()
        .route("/properties", post(properties::create_property))
        .route("/properties", get(properties::list_properties))
        .route("/properties/:id", get(properties::get_property))
        .route("/properties/:id", put(properties::update_property))
        .route("/properties/:id", delete(properties::delete_property))
        .layer(DefaultBodyLimit::max(upload_body_limit))
}

/// Contact routes
fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", post(contacts::create_contact))
        .route("/contacts", get(contacts::list_contacts))
        .route("/contacts/:id", delete(contacts::delete_contact))
        .route("/contact-owner", post(contacts::contact_owner))
}

/// Booking routes
fn booking_routes() -> Router<AppState> {
    Router::new().route("/bookings/payment", post(bookings::payment))
}
