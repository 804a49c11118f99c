//! HTTP error responses.
//!
//! Validation failures surface their message with a 400; anything else is
//! logged server-side and answered with the endpoint's generic message.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared::ErrorResponse;
use thiserror::Error;
use tracing::error;

use crate::domain::ValidationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// Classify a service error, using `fallback` for unexpected failures
    pub fn from_domain(err: &anyhow::Error, fallback: &str) -> Self {
        match err.downcast_ref::<ValidationError>() {
            Some(validation) => Self::Validation(validation.to_string()),
            None => Self::Unexpected(fallback.to_string()),
        }
    }

    /// Unreadable bodies are unexpected failures: the reason is logged, the
    /// client only sees `fallback`
    pub fn from_rejection(rejection: &JsonRejection, fallback: &str) -> Self {
        error!("Rejected request body ({}): {}", rejection.status(), rejection.body_text());
        Self::Unexpected(fallback.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Unwrap a JSON body extracted as `Result`, answering rejections with
/// `fallback` in the usual error shape
pub fn read_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    fallback: &str,
) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::from_rejection(&rejection, fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let err = anyhow::Error::from(ValidationError::MissingContact);
        let api_error = ApiError::from_domain(&err, "Failed to lookup user");

        assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(api_error.to_string(), "Email or phone number is required");
    }

    #[test]
    fn test_other_errors_hide_details() {
        let err = anyhow::anyhow!("storage exploded: disk /dev/sda1");
        let api_error = ApiError::from_domain(&err, "Failed to register user");

        assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.to_string(), "Failed to register user");
    }

    #[test]
    fn test_context_wrapped_validation_error_is_still_found() {
        let err = anyhow::Error::from(ValidationError::NonPositiveStay)
            .context("while confirming booking");
        let api_error = ApiError::from_domain(&err, "Failed to confirm booking");

        assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);
    }
}
