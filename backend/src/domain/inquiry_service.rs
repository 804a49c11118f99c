use anyhow::Result;
use chrono::Utc;
use tracing::info;

use crate::domain::commands::inquiries::{InquiryCommand, InquiryResult};

/// Service accepting booking inquiries. Inquiries are logged, not stored.
#[derive(Clone, Default)]
pub struct InquiryService;

impl InquiryService {
    pub fn new() -> Self {
        Self
    }

    pub fn submit(&self, command: InquiryCommand) -> Result<InquiryResult> {
        let now = Utc::now();
        let inquiry_id = format!("INQ_{}", now.timestamp_millis());

        info!(
            inquiry_id = %inquiry_id,
            guest_name = %command.guest_name,
            email = %command.email,
            phone = %command.phone,
            lodge = ?command.lodge,
            preferred_room = %command.preferred_room,
            check_in = %command.check_in,
            check_out = %command.check_out,
            guests = ?command.guests,
            special_requests = ?command.special_requests,
            visitor_id = ?command.visitor_id,
            user_id = ?command.user_id,
            is_returning = command.is_returning,
            received_at = %now.to_rfc3339(),
            "New inquiry received"
        );

        Ok(InquiryResult {
            inquiry_id,
            success_message: "Inquiry received successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_returns_inquiry_id() {
        let service = InquiryService::new();
        let result = service
            .submit(InquiryCommand {
                guest_name: "Jane Guest".to_string(),
                email: "jane@example.com".to_string(),
                preferred_room: "deluxe-room".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert!(result.inquiry_id.starts_with("INQ_"));
        assert!(result.inquiry_id["INQ_".len()..].parse::<i64>().is_ok());
        assert_eq!(result.success_message, "Inquiry received successfully");
    }

    #[test]
    fn test_submit_accepts_empty_payload() {
        let service = InquiryService::new();
        assert!(service.submit(InquiryCommand::default()).is_ok());
    }
}
