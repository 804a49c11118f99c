//! Demo guests preloaded when `seed_demo_profiles` is enabled.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use shared::{BookingStatus, CommunicationPreference, ProfileStatus};
use tracing::info;

use crate::domain::models::booking::BookingRecord;
use crate::domain::models::user::{UserPreferences, UserProfile};
use crate::storage::traits::ProfileStorage;

pub async fn seed_demo_profiles<S: ProfileStorage + ?Sized>(store: &S) -> Result<usize> {
    let profiles = demo_profiles()?;
    let count = profiles.len();
    for profile in profiles {
        let key = profile.email.clone();
        store.put(&key, profile).await?;
    }
    info!("Seeded {} demo profiles", count);
    Ok(count)
}

pub fn demo_profiles() -> Result<Vec<UserProfile>> {
    Ok(vec![
        UserProfile {
            id: "user_001".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: Some("+263123456789".to_string()),
            full_name: "John Doe".to_string(),
            visit_count: 5,
            first_visit: timestamp("2023-01-15T10:00:00Z")?,
            last_visit: timestamp("2024-08-01T14:30:00Z")?,
            preferences: Some(UserPreferences {
                preferred_lodge: Some("harris-lodge-harare".to_string()),
                preferred_room_type: Some("executive".to_string()),
                dietary_requirements: None,
                accessibility_needs: None,
                communication_preference: CommunicationPreference::Email,
                marketing_consent: true,
            }),
            booking_history: vec![BookingRecord {
                id: "booking_001".to_string(),
                lodge_id: "harris-lodge-harare".to_string(),
                room_id: "executive-suite-harare".to_string(),
                check_in: date("2024-07-15")?,
                check_out: date("2024-07-18")?,
                guests: 2,
                total_amount: 450.0,
                status: BookingStatus::Completed,
                booking_date: timestamp("2024-07-01T09:00:00Z")?,
            }],
            status: ProfileStatus::Active,
        },
        UserProfile {
            id: "user_002".to_string(),
            email: "sarah.smith@example.com".to_string(),
            phone: Some("+263987654321".to_string()),
            full_name: "Sarah Smith".to_string(),
            visit_count: 12,
            first_visit: timestamp("2022-05-20T08:00:00Z")?,
            last_visit: timestamp("2024-07-25T16:45:00Z")?,
            preferences: Some(UserPreferences {
                preferred_lodge: Some("harris-lodge-victoria-falls".to_string()),
                preferred_room_type: Some("suite".to_string()),
                dietary_requirements: Some(vec!["vegetarian".to_string()]),
                accessibility_needs: None,
                communication_preference: CommunicationPreference::Whatsapp,
                marketing_consent: true,
            }),
            booking_history: vec![BookingRecord {
                id: "booking_002".to_string(),
                lodge_id: "harris-lodge-victoria-falls".to_string(),
                room_id: "falls-view-suite-vf".to_string(),
                check_in: date("2024-07-20")?,
                check_out: date("2024-07-25")?,
                guests: 2,
                total_amount: 1250.0,
                status: BookingStatus::Completed,
                booking_date: timestamp("2024-06-15T11:30:00Z")?,
            }],
            status: ProfileStatus::Active,
        },
    ])
}

fn timestamp(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid seed timestamp '{}'", value))?;
    Ok(parsed.with_timezone(&Utc))
}

fn date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid seed date '{}'", value))
}
