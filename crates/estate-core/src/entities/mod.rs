//! Domain entities

mod booking;
mod contact;
mod property;
mod user;

pub use booking::{Booking, PaymentStatus};
pub use contact::ContactMessage;
pub use property::Property;
pub use user::User;
