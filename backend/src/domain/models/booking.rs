//! Domain model for a guest's booking history entry.
use chrono::{DateTime, NaiveDate, Utc};
use shared::BookingStatus;
use uuid::Uuid;

/// Immutable once created; only ever appended to a profile's history.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub id: String,
    pub lodge_id: String,
    pub room_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
}

impl BookingRecord {
    pub fn generate_id(now_millis: i64) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!("booking_{}_{}", now_millis, &suffix[..9])
    }

    pub fn is_completed(&self) -> bool {
        self.status == BookingStatus::Completed
    }
}
