// Flattening of the provider response into simple flight offers

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::provider::SearchResponse;

// One candidate itinerary, reduced to the operating carrier of its first
// segment and the total sale price string as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub airline: String,
    pub price: String,
}

// Maps the provider response to a flat offer list, one entry per trip
// option, in provider order. No sorting, no deduplication, no currency
// conversion.
//
// A provider-reported error short-circuits the whole call; an absent or
// empty trip-option list is an empty result, not an error.
pub fn normalize(response: &SearchResponse) -> Result<Vec<FlightOffer>, ApiError> {
    if let Some(fault) = &response.error {
        return Err(ApiError::Provider {
            code: fault.code,
            message: fault.message.clone(),
        });
    }

    let trip_options = match &response.trips {
        Some(trips) => &trips.trip_option,
        None => return Ok(Vec::new()),
    };

    let mut offers = Vec::with_capacity(trip_options.len());
    for (index, option) in trip_options.iter().enumerate() {
        let airline = option
            .slice
            .first()
            .and_then(|slice| slice.segment.first())
            .and_then(|segment| segment.flight.as_ref())
            .and_then(|flight| flight.carrier.as_ref())
            .ok_or_else(|| {
                ApiError::MalformedResponse(format!(
                    "tripOption[{}].slice[0].segment[0].flight.carrier",
                    index
                ))
            })?;
        let price = option.sale_total.as_ref().ok_or_else(|| {
            ApiError::MalformedResponse(format!("tripOption[{}].saleTotal", index))
        })?;

        offers.push(FlightOffer {
            airline: airline.clone(),
            price: price.clone(),
        });
    }

    debug!(count = offers.len(), "normalized provider response");
    Ok(offers)
}
