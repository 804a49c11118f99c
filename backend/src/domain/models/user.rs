//! Domain model for a known guest profile.
use chrono::{DateTime, Utc};
use shared::{CommunicationPreference, ProfileStatus};
use uuid::Uuid;

use super::booking::BookingRecord;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserPreferences {
    pub preferred_lodge: Option<String>,
    pub preferred_room_type: Option<String>,
    pub dietary_requirements: Option<Vec<String>>,
    pub accessibility_needs: Option<Vec<String>>,
    pub communication_preference: CommunicationPreference,
    pub marketing_consent: bool,
}

/// Partial preferences; `None` fields leave the stored value untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreferencesUpdate {
    pub preferred_lodge: Option<String>,
    pub preferred_room_type: Option<String>,
    pub dietary_requirements: Option<Vec<String>>,
    pub accessibility_needs: Option<Vec<String>>,
    pub communication_preference: Option<CommunicationPreference>,
    pub marketing_consent: Option<bool>,
}

impl UserPreferences {
    /// Shallow merge: supplied fields overwrite, the rest are retained.
    pub fn apply(&mut self, update: &PreferencesUpdate) {
        if let Some(lodge) = &update.preferred_lodge {
            self.preferred_lodge = Some(lodge.clone());
        }
        if let Some(room_type) = &update.preferred_room_type {
            self.preferred_room_type = Some(room_type.clone());
        }
        if let Some(dietary) = &update.dietary_requirements {
            self.dietary_requirements = Some(dietary.clone());
        }
        if let Some(accessibility) = &update.accessibility_needs {
            self.accessibility_needs = Some(accessibility.clone());
        }
        if let Some(channel) = update.communication_preference {
            self.communication_preference = channel;
        }
        if let Some(consent) = update.marketing_consent {
            self.marketing_consent = consent;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub id: String,
    /// Lowercased; doubles as the storage key
    pub email: String,
    pub phone: Option<String>,
    pub full_name: String,
    pub visit_count: u32,
    pub first_visit: DateTime<Utc>,
    pub last_visit: DateTime<Utc>,
    pub preferences: Option<UserPreferences>,
    pub booking_history: Vec<BookingRecord>,
    pub status: ProfileStatus,
}

impl UserProfile {
    /// Generate a profile ID from the creation time plus a random suffix
    pub fn generate_id(now_millis: i64) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!("user_{}_{}", now_millis, &suffix[..9])
    }

    /// A freshly registered guest: one visit, default preferences, no history
    pub fn new_registration(
        email: String,
        full_name: String,
        phone: Option<String>,
        preferences: Option<&PreferencesUpdate>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut defaults = UserPreferences::default();
        if let Some(update) = preferences {
            defaults.apply(update);
        }

        Self {
            id: Self::generate_id(now.timestamp_millis()),
            email: normalize_email(&email),
            phone,
            full_name,
            visit_count: 1,
            first_visit: now,
            last_visit: now,
            preferences: Some(defaults),
            booking_history: Vec::new(),
            status: ProfileStatus::Active,
        }
    }

    /// The single place a visit is counted.
    pub fn record_visit(&mut self, now: DateTime<Utc>) {
        self.visit_count = self.visit_count.saturating_add(1);
        self.last_visit = now;
    }

    pub fn merge_preferences(&mut self, update: &PreferencesUpdate) {
        self.preferences
            .get_or_insert_with(UserPreferences::default)
            .apply(update);
    }

    pub fn completed_bookings(&self) -> u32 {
        let completed = self
            .booking_history
            .iter()
            .filter(|booking| booking.is_completed())
            .count();
        u32::try_from(completed).unwrap_or(u32::MAX)
    }

    pub fn matches_phone(&self, phone: &str) -> bool {
        self.phone.as_deref() == Some(phone)
    }
}

/// Emails are matched case-insensitively by storing them lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
