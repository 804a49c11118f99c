//! # REST API for Bookings

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::BookingRequest;
use tracing::{error, info};

use crate::io::rest::error::{read_json, ApiError};
use crate::io::rest::mappers::BookingMapper;
use crate::AppState;

const BOOKING_FAILED: &str = "Failed to confirm booking";

/// Confirm a booking with a server-side quote
pub async fn confirm_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match read_json(payload, BOOKING_FAILED) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };
    info!("POST /api/booking - request: {:?}", request);

    let command = BookingMapper::to_command(request);
    match state.booking_service.confirm(command).await {
        Ok(result) => (StatusCode::OK, Json(BookingMapper::to_response(result))).into_response(),
        Err(e) => {
            error!("Booking API error: {:?}", e);
            ApiError::from_domain(&e, BOOKING_FAILED).into_response()
        }
    }
}
