//! # estate-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AdminService, AuthService, AuthSession, BookingService, ContactService, PropertyService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
