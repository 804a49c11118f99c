//! # Domain Module
//!
//! Contains all business logic for the lodge booking backend.
//!
//! This module encapsulates pricing rules, guest recognition and loyalty
//! classification. It operates independently of the HTTP layer and of the
//! concrete profile store.
//!
//! ## Module Organization
//!
//! - **policy**: fixed nightly rate table and season calendar
//! - **pricing_service**: night counting and quote computation
//! - **loyalty**: tier classification and recommendations
//! - **user_service**: lookup, registration, visit logging and benefits
//! - **inquiry_service**: booking inquiry intake
//! - **booking_service**: booking confirmation against a server-side quote
//!
//! ## Business Rules
//!
//! - A quote is base rate x season multiplier x nights; returning guests get
//!   a flat 10% off; totals are rounded to cents
//! - The season is decided by the check-in month alone
//! - Stays must be at least one night
//! - Profiles are keyed by lowercased email; phone is a fallback match
//! - Lookup and registration are the only operations that count a visit

pub mod booking_service;
pub mod commands;
pub mod errors;
pub mod inquiry_service;
pub mod loyalty;
pub mod models;
pub mod policy;
pub mod pricing_service;
pub mod user_service;

pub use booking_service::BookingService;
pub use errors::ValidationError;
pub use inquiry_service::InquiryService;
pub use pricing_service::PricingService;
pub use user_service::UserService;
