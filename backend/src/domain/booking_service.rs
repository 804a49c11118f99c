use anyhow::Result;
use chrono::Utc;
use shared::BookingStatus;
use tracing::info;

use crate::domain::commands::bookings::{ConfirmBookingCommand, ConfirmBookingResult};
use crate::domain::commands::pricing::QuoteCommand;
use crate::domain::models::booking::BookingRecord;
use crate::domain::pricing_service::PricingService;
use crate::domain::user_service::UserService;
use crate::storage::ProfileStorage;

/// Service confirming bookings against a server-side quote
pub struct BookingService<S: ProfileStorage> {
    pricing_service: PricingService,
    user_service: UserService<S>,
}

impl<S: ProfileStorage> Clone for BookingService<S> {
    fn clone(&self) -> Self {
        Self {
            pricing_service: self.pricing_service.clone(),
            user_service: self.user_service.clone(),
        }
    }
}

impl<S: ProfileStorage> BookingService<S> {
    pub fn new(pricing_service: PricingService, user_service: UserService<S>) -> Self {
        Self {
            pricing_service,
            user_service,
        }
    }

    /// Re-quote the stay and, for a known guest, record it in their history.
    pub async fn confirm(&self, command: ConfirmBookingCommand) -> Result<ConfirmBookingResult> {
        info!(
            "Confirming booking of '{}' for user {:?} (session: {:?}, device: {:?})",
            command.room_id, command.user_id, command.session_id, command.device_id
        );

        let quote = self.pricing_service.quote(QuoteCommand {
            room_id: command.room_id.clone(),
            check_in: command.check_in.clone(),
            check_out: command.check_out.clone(),
            guests: command.guests,
            is_returning: command.is_returning,
        })?;

        let now = Utc::now();
        let booking_id = BookingRecord::generate_id(now.timestamp_millis());

        let user_id = command
            .user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty());

        if let Some(user_id) = user_id {
            let record = BookingRecord {
                id: booking_id.clone(),
                lodge_id: command.lodge_id.clone().unwrap_or_default(),
                room_id: quote.room_id.clone(),
                check_in: quote.check_in,
                check_out: quote.check_out,
                guests: command.guests.unwrap_or(1),
                total_amount: quote.total_price,
                status: BookingStatus::Confirmed,
                booking_date: now,
            };
            self.user_service.append_booking(user_id, record).await?;
        }

        info!("Booking {} confirmed at {:.2}", booking_id, quote.total_price);

        Ok(ConfirmBookingResult {
            booking_id,
            quote,
            success_message: "Booking confirmed successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::users::RegisterCommand;
    use crate::domain::errors::ValidationError;
    use crate::storage::InMemoryProfileRepository;
    use std::sync::Arc;

    fn setup_test() -> (
        BookingService<InMemoryProfileRepository>,
        UserService<InMemoryProfileRepository>,
    ) {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let users = UserService::new(repo);
        (BookingService::new(PricingService::new(), users.clone()), users)
    }

    fn booking_command(user_id: Option<String>) -> ConfirmBookingCommand {
        ConfirmBookingCommand {
            user_id,
            lodge_id: Some("harris-lodge-harare".to_string()),
            room_id: "deluxe-room".to_string(),
            check_in: "2024-05-10".to_string(),
            check_out: "2024-05-12".to_string(),
            guests: Some(2),
            is_returning: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_confirm_records_booking_for_known_guest() {
        let (bookings, users) = setup_test();
        let registered = users
            .register(RegisterCommand {
                email: Some("guest@example.com".to_string()),
                full_name: Some("Guest".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let result = bookings
            .confirm(booking_command(Some(registered.profile.id.clone())))
            .await
            .unwrap();

        assert!(result.booking_id.starts_with("booking_"));
        assert_eq!(result.quote.total_price, 180.0);

        let profile = users.find_by_id(&registered.profile.id).await.unwrap().unwrap();
        assert_eq!(profile.booking_history.len(), 1);
        let record = &profile.booking_history[0];
        assert_eq!(record.id, result.booking_id);
        assert_eq!(record.status, BookingStatus::Confirmed);
        assert_eq!(record.total_amount, 180.0);
        assert_eq!(record.lodge_id, "harris-lodge-harare");
        // Confirmed bookings do not count towards loyalty until completed
        assert_eq!(profile.completed_bookings(), 0);
    }

    #[tokio::test]
    async fn test_confirm_without_user_only_quotes() {
        let (bookings, _) = setup_test();
        let result = bookings.confirm(booking_command(None)).await.unwrap();
        assert_eq!(result.quote.nights, 2);
    }

    #[tokio::test]
    async fn test_confirm_rejects_unknown_user_and_bad_stay() {
        let (bookings, _) = setup_test();

        let err = bookings
            .confirm(booking_command(Some("user_missing".to_string())))
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<ValidationError>().is_some());

        let mut reversed = booking_command(None);
        reversed.check_out = "2024-05-01".to_string();
        let err = bookings.confirm(reversed).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::NonPositiveStay)
        );
    }
}
