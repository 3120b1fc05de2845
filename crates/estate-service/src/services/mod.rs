//! Business services

mod admin;
mod auth;
mod booking;
mod contact;
mod context;
mod error;
mod property;

#[cfg(test)]
pub(crate) mod test_support;

pub use admin::AdminService;
pub use auth::{AuthService, AuthSession};
pub use booking::BookingService;
pub use contact::ContactService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use property::PropertyService;
