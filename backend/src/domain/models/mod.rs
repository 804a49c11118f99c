pub mod booking;
pub mod quote;
pub mod user;
