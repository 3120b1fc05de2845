//! PostgreSQL repository implementations

mod booking;
mod contact;
mod error;
mod property;
mod user;

pub use booking::PgBookingRepository;
pub use contact::PgContactRepository;
pub use property::PgPropertyRepository;
pub use user::PgUserRepository;
