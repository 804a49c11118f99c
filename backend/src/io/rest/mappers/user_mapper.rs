//! Mapper between shared user DTOs and domain profile models.

use crate::domain::commands::users::{
    BenefitsResult, LookupCommand, LookupResult, RegisterCommand, RegisterResult, VisitCommand,
};
use crate::domain::loyalty::Recommendations as DomainRecommendations;
use crate::domain::models::booking::BookingRecord as DomainBookingRecord;
use crate::domain::models::user::{
    PreferencesUpdate as DomainPreferencesUpdate, UserPreferences as DomainUserPreferences,
    UserProfile as DomainUserProfile,
};
use shared::{
    BenefitsResponse, BookingRecord as SharedBookingRecord,
    PreferencesUpdate as SharedPreferencesUpdate, Recommendations as SharedRecommendations,
    UserLookupRequest, UserLookupResponse, UserPreferences as SharedUserPreferences,
    UserProfile as SharedUserProfile, UserRegistrationRequest, UserRegistrationResponse,
    VisitRequest,
};

pub struct UserMapper;

impl UserMapper {
    pub fn to_dto(domain: DomainUserProfile) -> SharedUserProfile {
        SharedUserProfile {
            id: domain.id,
            email: domain.email,
            phone: domain.phone,
            full_name: domain.full_name,
            visit_count: domain.visit_count,
            first_visit: domain.first_visit.to_rfc3339(),
            last_visit: domain.last_visit.to_rfc3339(),
            preferences: domain.preferences.map(Self::preferences_to_dto),
            booking_history: domain
                .booking_history
                .into_iter()
                .map(Self::booking_to_dto)
                .collect(),
            status: domain.status,
        }
    }

    pub fn preferences_to_dto(domain: DomainUserPreferences) -> SharedUserPreferences {
        SharedUserPreferences {
            preferred_lodge: domain.preferred_lodge,
            preferred_room_type: domain.preferred_room_type,
            dietary_requirements: domain.dietary_requirements,
            accessibility_needs: domain.accessibility_needs,
            communication_preference: domain.communication_preference,
            marketing_consent: domain.marketing_consent,
        }
    }

    pub fn preferences_update_to_domain(dto: SharedPreferencesUpdate) -> DomainPreferencesUpdate {
        DomainPreferencesUpdate {
            preferred_lodge: dto.preferred_lodge,
            preferred_room_type: dto.preferred_room_type,
            dietary_requirements: dto.dietary_requirements,
            accessibility_needs: dto.accessibility_needs,
            communication_preference: dto.communication_preference,
            marketing_consent: dto.marketing_consent,
        }
    }

    pub fn booking_to_dto(domain: DomainBookingRecord) -> SharedBookingRecord {
        SharedBookingRecord {
            id: domain.id,
            lodge_id: domain.lodge_id,
            room_id: domain.room_id,
            check_in: domain.check_in.format("%Y-%m-%d").to_string(),
            check_out: domain.check_out.format("%Y-%m-%d").to_string(),
            guests: domain.guests,
            total_amount: domain.total_amount,
            status: domain.status,
            booking_date: domain.booking_date.to_rfc3339(),
        }
    }

    pub fn to_lookup_command(request: UserLookupRequest) -> LookupCommand {
        LookupCommand {
            email: request.email,
            phone: request.phone,
            session_id: request.session_id,
            device_id: request.device_id,
        }
    }

    pub fn to_lookup_response(result: LookupResult) -> UserLookupResponse {
        UserLookupResponse {
            user: result.profile.map(Self::to_dto),
            message: result.message,
        }
    }

    pub fn to_register_command(request: UserRegistrationRequest) -> RegisterCommand {
        RegisterCommand {
            email: request.email,
            phone: request.phone,
            full_name: request.full_name,
            session_id: request.session_id,
            device_id: request.device_id,
            preferences: request.preferences.map(Self::preferences_update_to_domain),
        }
    }

    pub fn to_register_response(result: RegisterResult) -> UserRegistrationResponse {
        UserRegistrationResponse {
            user: Self::to_dto(result.profile),
            message: result.success_message,
        }
    }

    pub fn to_visit_command(user_id: String, request: VisitRequest) -> VisitCommand {
        VisitCommand {
            user_id,
            session_id: request.session_id,
            device_id: request.device_id,
            timestamp: request.timestamp,
        }
    }

    pub fn to_benefits_response(result: BenefitsResult) -> BenefitsResponse {
        BenefitsResponse {
            user_id: result.user_id,
            completed_bookings: result.completed_bookings,
            loyalty_tier: result.tier,
            discount_percentage: result.discount_percentage,
            recommendations: result.recommendations.map(Self::recommendations_to_dto),
        }
    }

    fn recommendations_to_dto(domain: DomainRecommendations) -> SharedRecommendations {
        SharedRecommendations {
            preferred_lodge: domain.preferred_lodge,
            preferred_room_type: domain.preferred_room_type,
            suggested_services: domain.suggested_services,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use shared::BookingStatus;

    #[test]
    fn test_profile_to_dto_formats_dates() {
        let now = Utc.with_ymd_and_hms(2024, 8, 1, 14, 30, 0).unwrap();
        let mut profile = DomainUserProfile::new_registration(
            "guest@example.com".to_string(),
            "Guest".to_string(),
            Some("+263123".to_string()),
            None,
            now,
        );
        profile.booking_history.push(DomainBookingRecord {
            id: "booking_1".to_string(),
            lodge_id: "harris-lodge-harare".to_string(),
            room_id: "deluxe-room".to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 7, 18).unwrap(),
            guests: 2,
            total_amount: 390.0,
            status: BookingStatus::Completed,
            booking_date: now,
        });

        let dto = UserMapper::to_dto(profile);

        assert_eq!(dto.first_visit, "2024-08-01T14:30:00+00:00");
        assert_eq!(dto.booking_history[0].check_in, "2024-07-15");
        assert_eq!(dto.booking_history[0].check_out, "2024-07-18");
        assert_eq!(dto.phone.as_deref(), Some("+263123"));
        assert!(dto.preferences.is_some());
    }
}
