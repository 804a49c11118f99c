pub mod booking_mapper;
pub mod inquiry_mapper;
pub mod pricing_mapper;
pub mod user_mapper;

pub use booking_mapper::BookingMapper;
pub use inquiry_mapper::InquiryMapper;
pub use pricing_mapper::PricingMapper;
pub use user_mapper::UserMapper;
