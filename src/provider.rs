use serde::{Deserialize, Serialize};

use crate::query::Cabin;

// Data structures for the provider JSON wire format, request side.
// The search body nests everything under a single `request` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequestBody {
    pub request: TripRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub passengers: Passengers,
    pub max_price: String,
    pub solutions: u32,
    pub slice: Vec<SliceRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passengers {
    pub adult_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliceRequest {
    pub origin: String,
    pub destination: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_cabins: Option<Cabin>,
}

// Data structures for the provider JSON response. Fields the provider may
// omit are optional or defaulted so that shape problems surface in the
// normalizer rather than as deserialization failures. Everything also
// derives Serialize so the raw pair can be written back out by the backup
// writer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ProviderFault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trips: Option<Trips>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderFault {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Trips {
    pub trip_option: Vec<TripOption>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TripOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_total: Option<String>,
    pub slice: Vec<TripSlice>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TripSlice {
    pub segment: Vec<TripSegment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TripSegment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight: Option<FlightLeg>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightLeg {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}
