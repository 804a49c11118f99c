use crate::domain::commands::inquiries::{InquiryCommand, InquiryResult};
use shared::{InquiryRequest, InquiryResponse};

pub struct InquiryMapper;

impl InquiryMapper {
    pub fn to_command(request: InquiryRequest) -> InquiryCommand {
        InquiryCommand {
            guest_name: request.guest_name,
            phone: request.phone,
            email: request.email,
            lodge: request.lodge,
            preferred_room: request.preferred_room,
            check_in: request.check_in,
            check_out: request.check_out,
            guests: request.guests,
            special_requests: request.special_requests,
            visitor_id: request.visitor_id,
            user_id: request.user_id,
            is_returning: request.is_returning,
        }
    }

    pub fn to_response(result: InquiryResult) -> InquiryResponse {
        InquiryResponse {
            success: true,
            message: result.success_message,
            inquiry_id: result.inquiry_id,
        }
    }
}
