//! HTTP request handlers organized by domain

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod contacts;
pub mod health;
pub mod properties;
pub mod users;
