//! # Pricing Policy Tables
//!
//! Fixed nightly rates per room and the month-based season calendar.
//! These are compile-time constants; nothing here changes at runtime.

use shared::SeasonType;

/// Nightly rate used when a room identifier is not in the rate table
pub const DEFAULT_BASE_PRICE: f64 = 80.0;

/// Flat percentage taken off a quote for returning guests
pub const RETURNING_GUEST_DISCOUNT_PERCENT: u32 = 10;

const ROOM_BASE_PRICES: &[(&str, f64)] = &[
    ("executive-suite", 150.0),
    ("deluxe-room", 100.0),
    ("standard-double", 80.0),
    ("standard-single", 60.0),
    ("family-room", 120.0),
    ("budget-single", 40.0),
];

// Calendar months, 1 = January
const BUSY_MONTHS: [u32; 4] = [12, 6, 7, 8];
const SLOW_MONTHS: [u32; 3] = [2, 3, 4];

/// Nightly base price for a room, falling back to the default rate
pub fn base_price_for(room_id: &str) -> f64 {
    ROOM_BASE_PRICES
        .iter()
        .find(|(id, _)| *id == room_id)
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_BASE_PRICE)
}

/// Season classification of a calendar month (1-12)
pub fn season_for_month(month: u32) -> SeasonType {
    if BUSY_MONTHS.contains(&month) {
        SeasonType::Busy
    } else if SLOW_MONTHS.contains(&month) {
        SeasonType::Slow
    } else {
        SeasonType::Normal
    }
}

pub fn season_multiplier(season: SeasonType) -> f64 {
    match season {
        SeasonType::Busy => 1.3,
        SeasonType::Slow => 0.8,
        SeasonType::Normal => 1.0,
    }
}
