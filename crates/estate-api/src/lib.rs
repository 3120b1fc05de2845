//! # estate-api
//!
//! REST API server built with Axum framework.

pub mod cookies;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod storage;

pub use server::run;
