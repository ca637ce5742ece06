//! Wire types for the sky-scrapper endpoints: airport lookup records and the
//! flight search result set, deserialized verbatim from the upstream JSON.
//!
//! Field names mirror the upstream camelCase shapes; unknown upstream fields
//! are ignored.

use serde::Deserialize;

/// Maximum number of itineraries held in view state. The upstream
/// `totalResults` count is kept as-is, so it may exceed the rendered count.
pub const MAX_ITINERARIES: usize = 30;

// ---------------------------------------------------------------------------
// Airport lookup
// ---------------------------------------------------------------------------

/// One candidate airport from the lookup endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportSuggestion {
    pub entity_id: String,
    pub sky_id: String,
    pub suggestion_title: String,
}

/// Envelope of `/api/v1/flights/searchAirport`. `data` is absent on
/// malformed responses.
#[derive(Debug, Deserialize)]
pub struct AirportLookupResponse {
    #[serde(default)]
    pub data: Option<Vec<AirportRecord>>,
}

/// Raw lookup record; the presentation title is nested one level down.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportRecord {
    pub sky_id: String,
    pub entity_id: String,
    pub presentation: Presentation,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub suggestion_title: String,
}

impl From<AirportRecord> for AirportSuggestion {
    fn from(record: AirportRecord) -> Self {
        Self {
            entity_id: record.entity_id,
            sky_id: record.sky_id,
            suggestion_title: record.presentation.suggestion_title,
        }
    }
}

// ---------------------------------------------------------------------------
// Flight search
// ---------------------------------------------------------------------------

/// Envelope of `/api/v1/flights/searchFlights`. A missing or `null` `data`
/// payload is the "no flights found" condition.
#[derive(Debug, Deserialize)]
pub struct FlightSearchResponse {
    #[serde(default)]
    pub data: Option<FlightData>,
}

/// The search result set as held in view state.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightData {
    #[serde(default)]
    pub context: ResultsContext,
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
}

impl FlightData {
    /// Apply the display policy: keep at most [`MAX_ITINERARIES`] entries in
    /// upstream order. `context.total_results` is left untouched.
    pub fn truncate_itineraries(&mut self) {
        self.itineraries.truncate(MAX_ITINERARIES);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsContext {
    #[serde(default)]
    pub total_results: u64,
}

/// One priced flight option composed of one or more legs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub price: ItineraryPrice,
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPrice {
    #[serde(default)]
    pub formatted: String,
}

/// One origin-to-destination segment within an itinerary. Departure and
/// arrival are local ISO-8601 datetime strings as sent upstream.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    #[serde(default)]
    pub origin: LegPlace,
    #[serde(default)]
    pub destination: LegPlace,
    #[serde(default)]
    pub departure: String,
    #[serde(default)]
    pub arrival: String,
    #[serde(default)]
    pub carriers: Carriers,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegPlace {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carriers {
    #[serde(default)]
    pub marketing: Vec<MarketingCarrier>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingCarrier {
    #[serde(default)]
    pub name: String,
}
