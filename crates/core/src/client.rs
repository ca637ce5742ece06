//! Thin client over the two sky-scrapper endpoints. One shared
//! [`reqwest::Client`]; no retries, no caching, no request cancellation.

use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::form::SearchParams;
use crate::types::{
    AirportLookupResponse, AirportSuggestion, FlightData, FlightSearchResponse,
};

const API_HOST: &str = "sky-scrapper.p.rapidapi.com";
const AIRPORT_SEARCH_URL: &str =
    "https://sky-scrapper.p.rapidapi.com/api/v1/flights/searchAirport";
const FLIGHT_SEARCH_URL: &str =
    "https://sky-scrapper.p.rapidapi.com/api/v1/flights/searchFlights";

/// Handle to the remote flight-data API. Cheap to clone; clones share the
/// underlying connection pool.
#[derive(Clone)]
pub struct FlightApi {
    client: reqwest::Client,
    api_key: String,
}

impl FlightApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key,
        }
    }

    /// Look up airports matching free text. Callers gate on query length;
    /// no validation happens here.
    pub async fn search_airports(
        &self,
        query: &str,
    ) -> Result<Vec<AirportSuggestion>, ApiError> {
        debug!(query, "airport lookup");
        let response = self
            .client
            .get(AIRPORT_SEARCH_URL)
            .query(&[("query", query)])
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", API_HOST)
            .send()
            .await?
            .error_for_status()?;

        let body: AirportLookupResponse = response.json().await?;
        let records = body.data.ok_or(ApiError::BadShape)?;
        Ok(records.into_iter().map(AirportSuggestion::from).collect())
    }

    /// Run one flight search and truncate the result set for display.
    /// Upstream order is preserved; `totalResults` is not adjusted.
    pub async fn search_flights(
        &self,
        params: &SearchParams,
    ) -> Result<FlightData, ApiError> {
        info!(
            origin = %params.origin_sky_id,
            destination = %params.destination_sky_id,
            date = %params.date,
            "flight search"
        );
        let response = self
            .client
            .get(FLIGHT_SEARCH_URL)
            .query(&flight_query(params))
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", API_HOST)
            .send()
            .await?
            .error_for_status()?;

        let body: FlightSearchResponse = response.json().await?;
        let mut data = body.data.ok_or(ApiError::BadShape)?;
        data.truncate_itineraries();
        Ok(data)
    }
}

/// Query parameters for the search endpoint: the six form-derived values plus
/// the fixed currency/market/country trio.
fn flight_query(params: &SearchParams) -> Vec<(&'static str, String)> {
    vec![
        ("originSkyId", params.origin_sky_id.clone()),
        ("destinationSkyId", params.destination_sky_id.clone()),
        ("originEntityId", params.origin_entity_id.clone()),
        ("destinationEntityId", params.destination_entity_id.clone()),
        ("date", params.date.clone()),
        ("adults", params.adults.to_string()),
        ("cabinClass", params.cabin_class.as_param().to_string()),
        ("currency", "USD".to_string()),
        ("market", "en-US".to_string()),
        ("countryCode", "US".to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::CabinClass;

    #[test]
    fn flight_query_maps_every_parameter() {
        let params = SearchParams {
            origin_sky_id: "LOND".into(),
            destination_sky_id: "NYCA".into(),
            origin_entity_id: "27544008".into(),
            destination_entity_id: "27537542".into(),
            date: "2025-06-01".into(),
            adults: 2,
            cabin_class: CabinClass::Business,
        };
        let query = flight_query(&params);
        let get = |key: &str| {
            query
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
                .unwrap_or_else(|| panic!("missing {key}"))
        };

        assert_eq!(get("originSkyId"), "LOND");
        assert_eq!(get("destinationSkyId"), "NYCA");
        assert_eq!(get("originEntityId"), "27544008");
        assert_eq!(get("destinationEntityId"), "27537542");
        assert_eq!(get("date"), "2025-06-01");
        assert_eq!(get("adults"), "2");
        assert_eq!(get("cabinClass"), "business");
        assert_eq!(get("currency"), "USD");
        assert_eq!(get("market"), "en-US");
        assert_eq!(get("countryCode"), "US");
        assert_eq!(query.len(), 10);
    }

    #[test]
    fn unresolved_fields_submit_empty_entity_ids() {
        let params = SearchParams {
            origin_sky_id: "somewhere".into(),
            destination_sky_id: "elsewhere".into(),
            origin_entity_id: String::new(),
            destination_entity_id: String::new(),
            date: "2025-06-01".into(),
            adults: 1,
            cabin_class: CabinClass::Economy,
        };
        let query = flight_query(&params);
        assert!(query.iter().any(|(k, v)| *k == "originEntityId" && v.is_empty()));
        assert!(query.iter().any(|(k, v)| *k == "destinationEntityId" && v.is_empty()));
    }
}
