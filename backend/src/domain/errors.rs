//! Validation failures raised by domain services.
//!
//! Anything that is not a `ValidationError` is treated as unexpected by the
//! REST layer and reported with a generic message.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email or phone number is required")]
    MissingContact,
    #[error("Email and full name are required")]
    MissingRegistrationFields,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid {field} date: '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("Check-out date must be after check-in date")]
    NonPositiveStay,
    #[error("User not found: {0}")]
    UnknownProfile(String),
}
