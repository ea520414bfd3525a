// Main library file for the QPX Express flight-search client

// Export one module per concern of a search call
pub mod backup;
pub mod client;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod query;
pub mod transport;

// Re-export key types for convenience
pub use backup::{write_backup, BackupRecord};
pub use client::{ClientOptions, QpxClient};
pub use error::ApiError;
pub use normalize::{normalize, FlightOffer};
pub use provider::{
    FlightLeg, Passengers, ProviderFault, SearchRequestBody, SearchResponse, SliceRequest,
    TripOption, TripRequest, TripSegment, TripSlice, Trips,
};
pub use query::{build_request_body, Cabin, FlightQuery};
pub use transport::{endpoint_url, HttpTransport, Transport, QPX_SEARCH_URL};
