//! Booking handlers
//!
//! Payment is a placeholder; the endpoint records a `completed` booking and
//! no card data is ever accepted.

use axum::{extract::State, Json};

use estate_service::dto::{ApiResponse, BookingResponse, CreateBookingRequest};
use estate_service::BookingService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Record a booking for a property
///
/// POST /bookings/payment
pub async fn payment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> ApiResult<Created<Json<ApiResponse<BookingResponse>>>> {
    let service = BookingService::new(state.service_context());
    let booking = service.create(request).await?;
    Ok(Created(Json(ApiResponse::new(booking))))
}
