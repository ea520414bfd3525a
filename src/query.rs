// Trip parameters and construction of the provider request body

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::provider::{Passengers, SearchRequestBody, SliceRequest, TripRequest};

pub const DEFAULT_ADULT_COUNT: u32 = 1;
pub const DEFAULT_SOLUTIONS: u32 = 500;

// Cabin classes accepted by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cabin {
    Coach,
    PremiumCoach,
    Business,
    First,
}

// Parameters for a one-way flight search.
//
// `origin`, `destination`, `date` and `max_price` are required and must be
// non-empty; `max_price` carries its currency prefix (e.g. "EUR200").
#[derive(Debug, Clone, PartialEq)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub max_price: String,
    pub adult_count: u32,
    pub solutions: u32,
    pub sale_country: Option<String>,
    pub preferred_cabins: Option<Cabin>,
}

impl FlightQuery {
    // Query with the required fields set and everything else defaulted.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: impl Into<String>,
        max_price: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            date: date.into(),
            max_price: max_price.into(),
            adult_count: DEFAULT_ADULT_COUNT,
            solutions: DEFAULT_SOLUTIONS,
            sale_country: None,
            preferred_cabins: None,
        }
    }
}

// Maps a validated query to the wire-format request body.
//
// Pure and deterministic: the same query always yields the same body, and
// nothing here touches the network or the disk.
pub fn build_request_body(query: &FlightQuery) -> Result<SearchRequestBody, ApiError> {
    validate(query)?;

    Ok(SearchRequestBody {
        request: TripRequest {
            passengers: Passengers {
                adult_count: query.adult_count,
            },
            max_price: query.max_price.clone(),
            solutions: query.solutions,
            slice: vec![SliceRequest {
                origin: query.origin.clone(),
                destination: query.destination.clone(),
                date: query.date.clone(),
                preferred_cabins: query.preferred_cabins,
            }],
            sale_country: query.sale_country.clone(),
        },
    })
}

// Required fields are checked at the boundary, before anything is built.
fn validate(query: &FlightQuery) -> Result<(), ApiError> {
    let required = [
        ("origin", &query.origin),
        ("destination", &query.destination),
        ("date", &query.date),
        ("maxPrice", &query.max_price),
    ];
    for (name, value) in required {
        if value.is_empty() {
            return Err(ApiError::Validation(format!("{} must not be empty", name)));
        }
    }

    if query.adult_count == 0 {
        return Err(ApiError::Validation(
            "adultCount must be at least 1".to_string(),
        ));
    }
    if query.solutions == 0 {
        return Err(ApiError::Validation(
            "solutions must be at least 1".to_string(),
        ));
    }

    Ok(())
}
