//! PostgreSQL implementation of BookingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use estate_core::entities::Booking;
use estate_core::traits::{BookingRepository, RepoResult};
use estate_core::value_objects::Snowflake;

use crate::models::BookingModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BookingRepository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new PgBookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    #[instrument(skip(self, booking))]
    async fn create(&self, booking: &Booking) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO bookings (id, user_id, property_id, amount, payment_status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(booking.id.into_inner())
        .bind(booking.user_id.into_inner())
        .bind(booking.property_id.into_inner())
        .bind(booking.amount)
        .bind(booking.payment_status.as_str())
        .bind(booking.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Booking>> {
        let result = sqlx::query_as::<_, BookingModel>(
            r"
            SELECT id, user_id, property_id, amount, payment_status, created_at
            FROM bookings
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Booking::try_from).transpose()
    }
}
