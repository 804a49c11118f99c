//! # Loyalty Classification
//!
//! Maps a guest's count of completed bookings to a loyalty tier and the
//! discount percentage that tier is advertised with.
//!
//! | Completed bookings | Tier     | Discount |
//! |--------------------|----------|----------|
//! | not registered     | visitor  | 0%       |
//! | 0                  | member   | 5%       |
//! | 1-4                | silver   | 10%      |
//! | 5-9                | gold     | 15%      |
//! | 10+                | vip      | 20%      |
//!
//! The percentage is informational: quotes only ever carry the flat
//! returning-guest discount from [`crate::domain::policy`].

use std::collections::BTreeMap;

use shared::LoyaltyTier;

use crate::domain::models::user::UserProfile;

/// Services offered to guests who have booked before
pub const SUGGESTED_SERVICES: [&str; 2] = ["Airport Pickup", "Late Checkout"];

/// Classify a guest; `None` means the visitor has no profile.
pub fn classify(completed_bookings: Option<u32>) -> LoyaltyTier {
    match completed_bookings {
        None => LoyaltyTier::Visitor,
        Some(count) if count >= 10 => LoyaltyTier::Vip,
        Some(count) if count >= 5 => LoyaltyTier::Gold,
        Some(count) if count >= 1 => LoyaltyTier::Silver,
        Some(_) => LoyaltyTier::Member,
    }
}

pub fn discount_percentage(tier: LoyaltyTier) -> u32 {
    match tier {
        LoyaltyTier::Visitor => 0,
        LoyaltyTier::Member => 5,
        LoyaltyTier::Silver => 10,
        LoyaltyTier::Gold => 15,
        LoyaltyTier::Vip => 20,
    }
}

/// Personalised suggestions derived from preferences and booking history
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recommendations {
    pub preferred_lodge: Option<String>,
    pub preferred_room_type: Option<String>,
    pub suggested_services: Vec<String>,
}

pub fn recommendations_for(profile: &UserProfile) -> Recommendations {
    let preferences = profile.preferences.as_ref();

    let preferred_lodge = preferences
        .and_then(|p| p.preferred_lodge.clone())
        .or_else(|| most_booked_lodge(profile));

    let suggested_services = if profile.booking_history.is_empty() {
        Vec::new()
    } else {
        SUGGESTED_SERVICES.iter().map(|s| s.to_string()).collect()
    };

    Recommendations {
        preferred_lodge,
        preferred_room_type: preferences.and_then(|p| p.preferred_room_type.clone()),
        suggested_services,
    }
}

// Ties resolve to the lexicographically first lodge id.
fn most_booked_lodge(profile: &UserProfile) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for booking in &profile.booking_history {
        *counts.entry(booking.lodge_id.as_str()).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (lodge, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((lodge, count));
        }
    }
    best.map(|(lodge, _)| lodge.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::booking::BookingRecord;
    use crate::domain::models::user::{PreferencesUpdate, UserProfile};
    use chrono::{NaiveDate, TimeZone, Utc};
    use shared::BookingStatus;

    fn profile_with_lodges(lodges: &[&str]) -> UserProfile {
        let now = Utc.with_ymd_and_hms(2024, 8, 1, 10, 0, 0).unwrap();
        let mut profile = UserProfile::new_registration(
            "guest@example.com".to_string(),
            "Guest".to_string(),
            None,
            None,
            now,
        );
        profile.booking_history = lodges
            .iter()
            .enumerate()
            .map(|(i, lodge)| BookingRecord {
                id: format!("booking_{}", i),
                lodge_id: lodge.to_string(),
                room_id: "deluxe-room".to_string(),
                check_in: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
                check_out: NaiveDate::from_ymd_opt(2024, 7, 18).unwrap(),
                guests: 2,
                total_amount: 300.0,
                status: BookingStatus::Completed,
                booking_date: now,
            })
            .collect();
        profile
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(classify(None), LoyaltyTier::Visitor);
        assert_eq!(classify(Some(0)), LoyaltyTier::Member);
        assert_eq!(classify(Some(1)), LoyaltyTier::Silver);
        assert_eq!(classify(Some(4)), LoyaltyTier::Silver);
        assert_eq!(classify(Some(5)), LoyaltyTier::Gold);
        assert_eq!(classify(Some(9)), LoyaltyTier::Gold);
        assert_eq!(classify(Some(10)), LoyaltyTier::Vip);
        assert_eq!(classify(Some(42)), LoyaltyTier::Vip);
    }

    #[test]
    fn test_discount_percentages() {
        assert_eq!(discount_percentage(classify(None)), 0);
        assert_eq!(discount_percentage(classify(Some(0))), 5);
        assert_eq!(discount_percentage(classify(Some(1))), 10);
        assert_eq!(discount_percentage(classify(Some(5))), 15);
        assert_eq!(discount_percentage(classify(Some(10))), 20);
    }

    #[test]
    fn test_recommendations_without_history() {
        let profile = profile_with_lodges(&[]);
        let recommendations = recommendations_for(&profile);

        assert_eq!(recommendations.preferred_lodge, None);
        assert!(recommendations.suggested_services.is_empty());
    }

    #[test]
    fn test_recommendations_pick_most_booked_lodge() {
        let profile = profile_with_lodges(&[
            "harris-lodge-victoria-falls",
            "harris-lodge-harare",
            "harris-lodge-victoria-falls",
        ]);
        let recommendations = recommendations_for(&profile);

        assert_eq!(
            recommendations.preferred_lodge.as_deref(),
            Some("harris-lodge-victoria-falls")
        );
        assert_eq!(recommendations.suggested_services, vec!["Airport Pickup", "Late Checkout"]);
    }

    #[test]
    fn test_stated_preference_wins_over_history() {
        let mut profile = profile_with_lodges(&["harris-lodge-harare"]);
        profile.merge_preferences(&PreferencesUpdate {
            preferred_lodge: Some("harris-lodge-bulawayo".to_string()),
            preferred_room_type: Some("suite".to_string()),
            ..Default::default()
        });

        let recommendations = recommendations_for(&profile);
        assert_eq!(recommendations.preferred_lodge.as_deref(), Some("harris-lodge-bulawayo"));
        assert_eq!(recommendations.preferred_room_type.as_deref(), Some("suite"));
    }

    #[test]
    fn test_most_booked_lodge_tie_breaks_alphabetically() {
        let profile = profile_with_lodges(&["harris-lodge-harare", "harris-lodge-bulawayo"]);
        assert_eq!(most_booked_lodge(&profile).as_deref(), Some("harris-lodge-bulawayo"));
    }
}
