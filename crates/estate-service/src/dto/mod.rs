//! Data transfer objects for the API surface

mod mappers;
mod requests;
mod responses;

pub use requests::{
    ContactOwnerRequest, CreateBookingRequest, CreateContactRequest, CreatePropertyRequest,
    LoginRequest, MakeAdminRequest, RefreshTokenRequest, SignupRequest, UpdatePropertyRequest,
};
pub use responses::{
    ApiResponse, BookingResponse, ContactResponse, PropertyResponse, UserResponse,
};
