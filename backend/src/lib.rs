//! # Lodge Backend
//!
//! Pricing and returning-guest recognition service for the lodge booking site.
//!
//! The crate brings together:
//! - **Domain**: pricing rules, guest recognition and loyalty classification
//! - **Storage**: the profile store behind an injectable trait
//! - **IO**: the REST interface consumed by the booking frontend
//!
//! ## Architecture
//!
//! ```text
//! Booking frontend
//!     ↓
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (services, policy)
//!     ↓
//! Storage Layer (profile store)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use crate::config::{AppConfig, CorsConfig};
use crate::domain::{BookingService, InquiryService, PricingService, UserService};
use crate::io::rest::{booking_apis, inquiry_apis, pricing_apis, user_apis};
use crate::storage::InMemoryProfileRepository;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub pricing_service: PricingService,
    pub user_service: UserService<InMemoryProfileRepository>,
    pub inquiry_service: InquiryService,
    pub booking_service: BookingService<InMemoryProfileRepository>,
}

impl AppState {
    /// Wire the services around a profile store
    pub fn new(store: Arc<InMemoryProfileRepository>) -> Self {
        let pricing_service = PricingService::new();
        let user_service = UserService::new(store);
        let booking_service = BookingService::new(pricing_service.clone(), user_service.clone());

        Self {
            pricing_service,
            user_service,
            inquiry_service: InquiryService::new(),
            booking_service,
        }
    }

    /// State over an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProfileRepository::new()))
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up profile store");
    let store = Arc::new(InMemoryProfileRepository::new());

    if config.seed_demo_profiles {
        storage::seed::seed_demo_profiles(store.as_ref())
            .await
            .context("Failed to seed demo profiles")?;
    }

    info!("Setting up application state");
    Ok(AppState::new(store))
}

/// Route table without the `/api` prefix
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/pricing", post(pricing_apis::calculate_pricing))
        .route("/users/lookup", post(user_apis::lookup_user))
        .route("/users/register", post(user_apis::register_user))
        .route("/users/:id/visit", post(user_apis::log_visit))
        .route("/users/:id/benefits", get(user_apis::get_benefits))
        .route("/inquiry", post(inquiry_apis::submit_inquiry))
        .route("/booking", post(booking_apis::confirm_booking))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_config: &CorsConfig) -> Result<Router> {
    let origins = cors_config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{}'", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Ok(Router::new()
        .nest("/api", api_routes())
        .layer(cors)
        .with_state(app_state))
}
