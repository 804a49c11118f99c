//! # REST API for Pricing
//!
//! Indicative nightly pricing for a stay.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::PricingRequest;
use tracing::{error, info};

use crate::io::rest::error::{read_json, ApiError};
use crate::io::rest::mappers::PricingMapper;
use crate::AppState;

const PRICING_FAILED: &str = "Failed to calculate pricing";

/// Quote a stay
pub async fn calculate_pricing(
    State(state): State<AppState>,
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match read_json(payload, PRICING_FAILED) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };
    info!("POST /api/pricing - request: {:?}", request);

    let command = PricingMapper::to_quote_command(request);
    match state.pricing_service.quote(command) {
        Ok(quote) => (StatusCode::OK, Json(PricingMapper::to_dto(quote))).into_response(),
        Err(e) => {
            error!("Pricing API error: {:?}", e);
            ApiError::from_domain(&e, PRICING_FAILED).into_response()
        }
    }
}
