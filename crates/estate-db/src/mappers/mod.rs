//! Entity <-> model mappers

mod booking;
mod contact;
mod property;
mod user;
