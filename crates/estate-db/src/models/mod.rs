//! Database models with SQLx `FromRow` derives

mod booking;
mod contact;
mod property;
mod user;

pub use booking::BookingModel;
pub use contact::ContactModel;
pub use property::PropertyModel;
pub use user::UserModel;
