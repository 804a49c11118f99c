//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the lodge backend.
//! This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Error translation from domain to HTTP status codes
//! - Request logging
//!
//! Handlers stay free of business logic: each one maps the shared DTO to a
//! domain command, calls a service and maps the result back.

pub mod booking_apis;
pub mod error;
pub mod inquiry_apis;
pub mod mappers;
pub mod pricing_apis;
pub mod user_apis;
