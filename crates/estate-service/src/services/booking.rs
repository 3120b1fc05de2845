//! Booking service
//!
//! Payment is a placeholder: the booking is recorded with status
//! `completed` and no card data is ever accepted.

use tracing::{info, instrument};

use estate_core::entities::Booking;
use estate_core::value_objects::Snowflake;
use estate_core::DomainError;

use crate::dto::{BookingResponse, CreateBookingRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Booking service
pub struct BookingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookingService<'a> {
    /// Create a new BookingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a booking for a property
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateBookingRequest) -> ServiceResult<BookingResponse> {
        let user_id = parse_snowflake(&request.user_id, "user_id")?;
        let property_id = parse_snowflake(&request.property_id, "property_id")?;

        // Both references must exist before the row is written
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        self.ctx
            .property_repo()
            .find_by_id(property_id)
            .await?
            .ok_or(DomainError::PropertyNotFound(property_id))?;

        let booking = Booking::new(self.ctx.generate_id(), user_id, property_id, request.amount);

        self.ctx.booking_repo().create(&booking).await?;

        info!(booking_id = %booking.id, "Booking recorded");

        Ok(BookingResponse::from(&booking))
    }
}

fn parse_snowflake(s: &str, field: &str) -> ServiceResult<Snowflake> {
    s.parse::<i64>()
        .map(Snowflake::new)
        .map_err(|_| ServiceError::validation(format!("Invalid {field}")))
}
