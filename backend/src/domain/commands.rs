//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod pricing {
    /// Input for quoting a stay.
    #[derive(Debug, Clone, Default)]
    pub struct QuoteCommand {
        pub room_id: String,
        pub check_in: String,
        pub check_out: String,
        pub guests: Option<u32>,
        pub is_returning: bool,
    }
}

pub mod users {
    use crate::domain::loyalty::Recommendations;
    use crate::domain::models::user::{PreferencesUpdate, UserProfile};
    use shared::LoyaltyTier;

    /// Input for resolving a visitor against known profiles.
    #[derive(Debug, Clone, Default)]
    pub struct LookupCommand {
        pub email: Option<String>,
        pub phone: Option<String>,
        pub session_id: String,
        pub device_id: String,
    }

    /// Result of a lookup; `profile` is `None` when nobody matched.
    #[derive(Debug, Clone)]
    pub struct LookupResult {
        pub profile: Option<UserProfile>,
        pub message: String,
    }

    /// Input for registering or refreshing a profile.
    #[derive(Debug, Clone, Default)]
    pub struct RegisterCommand {
        pub email: Option<String>,
        pub phone: Option<String>,
        pub full_name: Option<String>,
        pub session_id: String,
        pub device_id: String,
        pub preferences: Option<PreferencesUpdate>,
    }

    /// Result of a registration.
    #[derive(Debug, Clone)]
    pub struct RegisterResult {
        pub profile: UserProfile,
        pub created: bool,
        pub success_message: String,
    }

    /// Input for the visit-logging acknowledgement.
    #[derive(Debug, Clone, Default)]
    pub struct VisitCommand {
        pub user_id: String,
        pub session_id: Option<String>,
        pub device_id: Option<String>,
        pub timestamp: Option<String>,
    }

    /// Loyalty standing of a profile (or of an unknown visitor).
    #[derive(Debug, Clone)]
    pub struct BenefitsResult {
        pub user_id: String,
        pub completed_bookings: u32,
        pub tier: LoyaltyTier,
        pub discount_percentage: u32,
        pub recommendations: Option<Recommendations>,
    }
}

pub mod inquiries {
    /// Input for a booking inquiry. Only logged.
    #[derive(Debug, Clone, Default)]
    pub struct InquiryCommand {
        pub guest_name: String,
        pub phone: String,
        pub email: String,
        pub lodge: Option<String>,
        pub preferred_room: String,
        pub check_in: String,
        pub check_out: String,
        pub guests: Option<u32>,
        pub special_requests: Option<String>,
        pub visitor_id: Option<String>,
        pub user_id: Option<String>,
        pub is_returning: bool,
    }

    /// Result of submitting an inquiry.
    #[derive(Debug, Clone)]
    pub struct InquiryResult {
        pub inquiry_id: String,
        pub success_message: String,
    }
}

pub mod bookings {
    use crate::domain::models::quote::PriceQuote;

    /// Input for confirming a booking.
    #[derive(Debug, Clone, Default)]
    pub struct ConfirmBookingCommand {
        pub user_id: Option<String>,
        pub lodge_id: Option<String>,
        pub room_id: String,
        pub check_in: String,
        pub check_out: String,
        pub guests: Option<u32>,
        pub is_returning: bool,
        pub session_id: Option<String>,
        pub device_id: Option<String>,
    }

    /// Result of confirming a booking.
    #[derive(Debug, Clone)]
    pub struct ConfirmBookingResult {
        pub booking_id: String,
        pub quote: PriceQuote,
        pub success_message: String,
    }
}
