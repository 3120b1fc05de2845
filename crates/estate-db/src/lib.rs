//! # estate-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `estate-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! The refresh-token column on `users` is the single source of truth for
//! session validity; rotation is a conditional UPDATE so that concurrent
//! refreshes presenting the same token cannot both succeed.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{
    PgBookingRepository, PgContactRepository, PgPropertyRepository, PgUserRepository,
};
