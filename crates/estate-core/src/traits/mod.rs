//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BookingRepository, ContactRepository, PropertyRepository, PropertyUpdate, RepoResult,
    UserRepository,
};
