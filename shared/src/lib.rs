use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse pricing period derived from the check-in month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonType {
    Normal,
    Busy,
    Slow,
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeasonType::Normal => "normal",
            SeasonType::Busy => "busy",
            SeasonType::Slow => "slow",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    #[serde(default)]
    pub room_id: String,
    /// ISO date (YYYY-MM-DD) or RFC 3339 timestamp
    #[serde(default)]
    pub check_in: String,
    /// ISO date (YYYY-MM-DD) or RFC 3339 timestamp
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub visitor_id: Option<String>,
    #[serde(default)]
    pub is_returning: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResponse {
    pub room_id: String,
    pub base_price: f64,
    pub total_price: f64,
    pub nights: i64,
    pub season_type: SeasonType,
    /// Percentage off, only present for returning guests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunicationPreference {
    #[default]
    Email,
    Phone,
    Whatsapp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_lodge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_room_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dietary_requirements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility_needs: Option<Vec<String>>,
    #[serde(default)]
    pub communication_preference: CommunicationPreference,
    #[serde(default)]
    pub marketing_consent: bool,
}

/// Partial preferences sent on registration; only supplied fields are merged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    #[serde(default)]
    pub preferred_lodge: Option<String>,
    #[serde(default)]
    pub preferred_room_type: Option<String>,
    #[serde(default)]
    pub dietary_requirements: Option<Vec<String>>,
    #[serde(default)]
    pub accessibility_needs: Option<Vec<String>>,
    #[serde(default)]
    pub communication_preference: Option<CommunicationPreference>,
    #[serde(default)]
    pub marketing_consent: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub lodge_id: String,
    pub room_id: String,
    /// ISO date (YYYY-MM-DD)
    pub check_in: String,
    /// ISO date (YYYY-MM-DD)
    pub check_out: String,
    pub guests: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
    /// RFC 3339 timestamp
    pub booking_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub full_name: String,
    pub visit_count: u32,
    /// RFC 3339 timestamp
    pub first_visit: String,
    /// RFC 3339 timestamp
    pub last_visit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
    pub booking_history: Vec<BookingRecord>,
    pub status: ProfileStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLookupRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub device_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLookupResponse {
    /// `null` when no profile matched
    pub user: Option<UserProfile>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistrationRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub preferences: Option<PreferencesUpdate>,
}

/// The registered profile with a status message alongside its fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRegistrationResponse {
    #[serde(flatten)]
    pub user: UserProfile,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyTier {
    Visitor,
    Member,
    Silver,
    Gold,
    Vip,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub preferred_lodge: Option<String>,
    pub preferred_room_type: Option<String>,
    pub suggested_services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitsResponse {
    pub user_id: String,
    pub completed_bookings: u32,
    pub loyalty_tier: LoyaltyTier,
    pub discount_percentage: u32,
    pub recommendations: Option<Recommendations>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
    #[serde(default)]
    pub guest_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub lodge: Option<String>,
    #[serde(default)]
    pub preferred_room: String,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub visitor_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub is_returning: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryResponse {
    pub success: bool,
    pub message: String,
    pub inquiry_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    /// Inquiry forms send the lodge slug as `lodge`
    #[serde(default, alias = "lodge")]
    pub lodge_id: Option<String>,
    /// Inquiry forms send the room as `preferredRoom`
    #[serde(default, alias = "preferredRoom")]
    pub room_id: String,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub is_returning: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    /// Quote the client displayed before confirming
    #[serde(default)]
    pub pricing_data: Option<ClientQuote>,
}

/// The parts of a client-held quote the server looks at
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientQuote {
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub discount: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    pub booking_id: String,
    pub message: String,
    pub quote: PricingResponse,
}

/// Body returned with every 4xx/5xx answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
