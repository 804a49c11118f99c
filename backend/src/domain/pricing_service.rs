use anyhow::Result;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime};
use tracing::info;

use crate::domain::commands::pricing::QuoteCommand;
use crate::domain::errors::ValidationError;
use crate::domain::models::quote::PriceQuote;
use crate::domain::policy::{
    base_price_for, season_for_month, season_multiplier, RETURNING_GUEST_DISCOUNT_PERCENT,
};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Check-in/check-out pair that has passed validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stay {
    pub check_in: DateTime<FixedOffset>,
    pub check_out: DateTime<FixedOffset>,
    pub nights: i64,
}

/// Service computing indicative nightly pricing
#[derive(Clone, Default)]
pub struct PricingService;

impl PricingService {
    pub fn new() -> Self {
        Self
    }

    /// Quote a stay: base rate x season multiplier x nights, less the
    /// returning-guest discount, rounded to cents.
    pub fn quote(&self, command: QuoteCommand) -> Result<PriceQuote> {
        info!(
            "Quoting room '{}' from {} to {} (returning: {})",
            command.room_id, command.check_in, command.check_out, command.is_returning
        );

        if command.room_id.trim().is_empty() {
            return Err(ValidationError::MissingField("roomId").into());
        }

        let stay = self.parse_stay(&command.check_in, &command.check_out)?;
        let base_price = base_price_for(command.room_id.trim());
        let season = season_for_month(stay.check_in.month());

        let mut total = base_price * season_multiplier(season) * stay.nights as f64;
        let discount = if command.is_returning {
            total = total * f64::from(100 - RETURNING_GUEST_DISCOUNT_PERCENT) / 100.0;
            Some(RETURNING_GUEST_DISCOUNT_PERCENT)
        } else {
            None
        };

        let quote = PriceQuote {
            room_id: command.room_id,
            base_price,
            total_price: round_to_cents(total),
            nights: stay.nights,
            season,
            discount,
            check_in: stay.check_in.date_naive(),
            check_out: stay.check_out.date_naive(),
        };

        info!(
            "Quoted {} nights of '{}' in {} season: {:.2}",
            quote.nights, quote.room_id, quote.season, quote.total_price
        );
        Ok(quote)
    }

    /// Parse and validate a check-in/check-out pair.
    pub fn parse_stay(&self, check_in: &str, check_out: &str) -> Result<Stay> {
        let check_in = parse_stay_date("checkIn", check_in)?;
        let check_out = parse_stay_date("checkOut", check_out)?;
        let nights = nights_between(check_in, check_out);

        if nights <= 0 {
            return Err(ValidationError::NonPositiveStay.into());
        }

        Ok(Stay {
            check_in,
            check_out,
            nights,
        })
    }
}

/// Whole nights between two instants, rounding any partial day up.
pub fn nights_between(check_in: DateTime<FixedOffset>, check_out: DateTime<FixedOffset>) -> i64 {
    let seconds = (check_out - check_in).num_seconds();
    if seconds <= 0 {
        return 0;
    }
    (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

/// Accepts `YYYY-MM-DD` (taken as UTC midnight) or an RFC 3339 timestamp.
fn parse_stay_date(field: &'static str, value: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field).into());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }

    DateTime::parse_from_rfc3339(trimmed).map_err(|_| {
        ValidationError::InvalidDate {
            field,
            value: trimmed.to_string(),
        }
        .into()
    })
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::SeasonType;

    fn command(room_id: &str, check_in: &str, check_out: &str, is_returning: bool) -> QuoteCommand {
        QuoteCommand {
            room_id: room_id.to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            guests: Some(2),
            is_returning,
        }
    }

    fn validation_error(err: anyhow::Error) -> ValidationError {
        err.downcast::<ValidationError>()
            .expect("expected a validation error")
    }

    #[test]
    fn test_nights_for_three_night_stay() {
        let service = PricingService::new();
        let stay = service.parse_stay("2024-07-15", "2024-07-18").unwrap();
        assert_eq!(stay.nights, 3);
    }

    #[test]
    fn test_partial_days_round_up() {
        let service = PricingService::new();
        let stay = service
            .parse_stay("2024-05-10T14:00:00Z", "2024-05-12T11:00:00Z")
            .unwrap();
        assert_eq!(stay.nights, 2);
    }

    #[test]
    fn test_normal_season_quote() {
        let service = PricingService::new();
        let quote = service
            .quote(command("deluxe-room", "2024-05-10", "2024-05-12", false))
            .unwrap();

        assert_eq!(quote.base_price, 100.0);
        assert_eq!(quote.nights, 2);
        assert_eq!(quote.season, SeasonType::Normal);
        assert_eq!(quote.total_price, 200.0);
        assert_eq!(quote.discount, None);
    }

    #[test]
    fn test_returning_guest_discount() {
        let service = PricingService::new();
        let quote = service
            .quote(command("deluxe-room", "2024-05-10", "2024-05-12", true))
            .unwrap();

        assert_eq!(quote.total_price, 180.0);
        assert_eq!(quote.discount, Some(10));
    }

    #[test]
    fn test_busy_season_quote() {
        let service = PricingService::new();
        let quote = service
            .quote(command("deluxe-room", "2024-07-15", "2024-07-18", false))
            .unwrap();

        assert_eq!(quote.season, SeasonType::Busy);
        assert_eq!(quote.total_price, 390.0);
    }

    #[test]
    fn test_slow_season_quote_with_discount() {
        let service = PricingService::new();
        let quote = service
            .quote(command("executive-suite", "2024-03-01", "2024-03-04", true))
            .unwrap();

        // 150 * 0.8 * 3 = 360, less 10%
        assert_eq!(quote.season, SeasonType::Slow);
        assert_eq!(quote.total_price, 324.0);
    }

    #[test]
    fn test_season_follows_check_in_month_only() {
        let service = PricingService::new();
        let quote = service
            .quote(command("deluxe-room", "2024-05-30", "2024-06-02", false))
            .unwrap();

        assert_eq!(quote.season, SeasonType::Normal);
        assert_eq!(quote.total_price, 300.0);
    }

    #[test]
    fn test_unknown_room_uses_default_rate() {
        let service = PricingService::new();
        let quote = service
            .quote(command("treehouse", "2024-10-01", "2024-10-02", false))
            .unwrap();

        assert_eq!(quote.base_price, 80.0);
        assert_eq!(quote.total_price, 80.0);
    }

    #[test]
    fn test_rejects_non_positive_stays() {
        let service = PricingService::new();

        let same_day = service
            .quote(command("deluxe-room", "2024-05-10", "2024-05-10", false))
            .unwrap_err();
        assert_eq!(validation_error(same_day), ValidationError::NonPositiveStay);

        let reversed = service
            .quote(command("deluxe-room", "2024-05-12", "2024-05-10", false))
            .unwrap_err();
        assert_eq!(validation_error(reversed), ValidationError::NonPositiveStay);
    }

    #[test]
    fn test_rejects_bad_input() {
        let service = PricingService::new();

        let missing_room = service
            .quote(command(" ", "2024-05-10", "2024-05-12", false))
            .unwrap_err();
        assert_eq!(validation_error(missing_room), ValidationError::MissingField("roomId"));

        let garbage = service
            .quote(command("deluxe-room", "next tuesday", "2024-05-12", false))
            .unwrap_err();
        assert!(matches!(
            validation_error(garbage),
            ValidationError::InvalidDate { field: "checkIn", .. }
        ));

        let missing_checkout = service
            .quote(command("deluxe-room", "2024-05-10", "", false))
            .unwrap_err();
        assert_eq!(
            validation_error(missing_checkout),
            ValidationError::MissingField("checkOut")
        );
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(123.456), 123.46);
        assert_eq!(round_to_cents(0.1 + 0.2), 0.3);
    }
}
