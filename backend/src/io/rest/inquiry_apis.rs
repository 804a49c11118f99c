//! # REST API for Inquiries

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::InquiryRequest;
use tracing::{error, info};

use crate::io::rest::error::{read_json, ApiError};
use crate::io::rest::mappers::InquiryMapper;
use crate::AppState;

const INQUIRY_FAILED: &str = "Failed to process inquiry";

/// Accept a booking inquiry
pub async fn submit_inquiry(
    State(state): State<AppState>,
    payload: Result<Json<InquiryRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match read_json(payload, INQUIRY_FAILED) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };
    info!("POST /api/inquiry - guest: {}", request.guest_name);

    let command = InquiryMapper::to_command(request);
    match state.inquiry_service.submit(command) {
        Ok(result) => (StatusCode::OK, Json(InquiryMapper::to_response(result))).into_response(),
        Err(e) => {
            error!("Inquiry API error: {:?}", e);
            ApiError::from_domain(&e, INQUIRY_FAILED).into_response()
        }
    }
}
