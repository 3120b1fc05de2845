//! Booking entity <-> model mapper

use estate_core::entities::{Booking, PaymentStatus};
use estate_core::error::DomainError;
use estate_core::value_objects::Snowflake;

use crate::models::BookingModel;

impl TryFrom<BookingModel> for Booking {
    type Error = DomainError;

    fn try_from(model: BookingModel) -> Result<Self, Self::Error> {
        let payment_status = model
            .payment_status
            .parse::<PaymentStatus>()
            .map_err(DomainError::InternalError)?;

        Ok(Booking {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            property_id: Snowflake::new(model.property_id),
            amount: model.amount,
            payment_status,
            created_at: model.created_at,
        })
    }
}
