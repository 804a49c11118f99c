//! Domain model for an indicative price quote. Never persisted.
use chrono::NaiveDate;
use shared::SeasonType;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub room_id: String,
    pub base_price: f64,
    pub total_price: f64,
    pub nights: i64,
    pub season: SeasonType,
    /// Percentage off; `Some` only when a discount was applied
    pub discount: Option<u32>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}
