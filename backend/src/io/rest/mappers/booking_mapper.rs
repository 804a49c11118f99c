//! Mapper between booking DTOs and the confirmation command.

use crate::domain::commands::bookings::{ConfirmBookingCommand, ConfirmBookingResult};
use crate::io::rest::mappers::PricingMapper;
use shared::{BookingRequest, BookingResponse};

pub struct BookingMapper;

impl BookingMapper {
    /// The client's own quote is only used to tell whether it priced the stay
    /// as a returning guest; amounts are always recomputed.
    pub fn to_command(request: BookingRequest) -> ConfirmBookingCommand {
        let quoted_as_returning = request
            .pricing_data
            .as_ref()
            .is_some_and(|quote| quote.discount.is_some());

        ConfirmBookingCommand {
            user_id: request.user_id,
            lodge_id: request.lodge_id,
            room_id: request.room_id,
            check_in: request.check_in,
            check_out: request.check_out,
            guests: request.guests,
            is_returning: request.is_returning || quoted_as_returning,
            session_id: request.session_id,
            device_id: request.device_id,
        }
    }

    pub fn to_response(result: ConfirmBookingResult) -> BookingResponse {
        BookingResponse {
            success: true,
            booking_id: result.booking_id,
            message: result.success_message,
            quote: PricingMapper::to_dto(result.quote),
        }
    }
}
