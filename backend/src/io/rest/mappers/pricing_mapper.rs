//! Mapper between pricing DTOs and domain quote types.

use crate::domain::commands::pricing::QuoteCommand;
use crate::domain::models::quote::PriceQuote;
use shared::{PricingRequest, PricingResponse};

pub struct PricingMapper;

impl PricingMapper {
    pub fn to_quote_command(request: PricingRequest) -> QuoteCommand {
        QuoteCommand {
            room_id: request.room_id,
            check_in: request.check_in,
            check_out: request.check_out,
            guests: request.guests,
            is_returning: request.is_returning,
        }
    }

    pub fn to_dto(quote: PriceQuote) -> PricingResponse {
        PricingResponse {
            room_id: quote.room_id,
            base_price: quote.base_price,
            total_price: quote.total_price,
            nights: quote.nights,
            season_type: quote.season,
            discount: quote.discount,
        }
    }
}
