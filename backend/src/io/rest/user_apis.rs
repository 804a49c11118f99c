//! # REST API for Guest Recognition
//!
//! Endpoints for looking up, registering and logging visits of returning
//! guests, plus their loyalty benefits.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::{UserLookupRequest, UserRegistrationRequest, VisitRequest, VisitResponse};
use tracing::{error, info};

use crate::io::rest::error::{read_json, ApiError};
use crate::io::rest::mappers::UserMapper;
use crate::AppState;

const LOOKUP_FAILED: &str = "Failed to lookup user";
const REGISTER_FAILED: &str = "Failed to register user";
const VISIT_FAILED: &str = "Failed to log visit";
const BENEFITS_FAILED: &str = "Failed to load benefits";

/// Match a visitor against known profiles by email or phone
pub async fn lookup_user(
    State(state): State<AppState>,
    payload: Result<Json<UserLookupRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match read_json(payload, LOOKUP_FAILED) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };
    info!(
        "POST /api/users/lookup - session: {}, device: {}",
        request.session_id, request.device_id
    );

    let command = UserMapper::to_lookup_command(request);
    match state.user_service.lookup(command).await {
        Ok(result) => {
            (StatusCode::OK, Json(UserMapper::to_lookup_response(result))).into_response()
        }
        Err(e) => {
            error!("User lookup error: {:?}", e);
            ApiError::from_domain(&e, LOOKUP_FAILED).into_response()
        }
    }
}

/// Register a new guest or refresh an existing profile
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<UserRegistrationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match read_json(payload, REGISTER_FAILED) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };
    info!(
        "POST /api/users/register - session: {}, device: {}",
        request.session_id, request.device_id
    );

    let command = UserMapper::to_register_command(request);
    match state.user_service.register(command).await {
        Ok(result) => {
            (StatusCode::OK, Json(UserMapper::to_register_response(result))).into_response()
        }
        Err(e) => {
            error!("User registration error: {:?}", e);
            ApiError::from_domain(&e, REGISTER_FAILED).into_response()
        }
    }
}

/// Acknowledge a visit; always succeeds for well-formed requests
pub async fn log_visit(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<VisitRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match read_json(payload, VISIT_FAILED) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };
    info!("POST /api/users/{}/visit", user_id);

    let command = UserMapper::to_visit_command(user_id, request);
    match state.user_service.record_visit(command).await {
        Ok(()) => (
            StatusCode::OK,
            Json(VisitResponse {
                success: true,
                message: "Visit logged successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Visit logging error: {:?}", e);
            ApiError::from_domain(&e, VISIT_FAILED).into_response()
        }
    }
}

/// Loyalty tier, discount and recommendations for a guest
pub async fn get_benefits(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/users/{}/benefits", user_id);

    match state.user_service.benefits(&user_id).await {
        Ok(result) => {
            (StatusCode::OK, Json(UserMapper::to_benefits_response(result))).into_response()
        }
        Err(e) => {
            error!("Failed to load benefits: {:?}", e);
            ApiError::from_domain(&e, BENEFITS_FAILED).into_response()
        }
    }
}
