//! # IO Module
//!
//! The interface layer between HTTP clients and the domain logic.
//!
//! ## Supported Operations
//!
//! - **POST /api/pricing**: quote a stay
//! - **POST /api/users/lookup**: recognise a returning guest
//! - **POST /api/users/register**: register or refresh a guest profile
//! - **POST /api/users/:id/visit**: acknowledge a visit (logging only)
//! - **GET /api/users/:id/benefits**: loyalty tier and recommendations
//! - **POST /api/inquiry**: accept a booking inquiry
//! - **POST /api/booking**: confirm a booking

pub mod rest;
