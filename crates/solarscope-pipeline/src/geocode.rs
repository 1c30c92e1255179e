//! Client for the geocoding endpoint.
//!
//! Turns a free-text address into coordinates plus the provider's canonical
//! formatted address. The provider reports most failures inside a `200 OK`
//! body via its `"status"` field, so the envelope is checked before the
//! results are read.

use reqwest::{Client, Url};
use solarscope_core::GeocodeResult;

use crate::error::{BuildError, PipelineError};
use crate::http::endpoint_url;
use crate::types::GeocodeResponse;

const GEOCODE_PATH: &str = "maps/api/geocode/json";
const CONTEXT: &str = "geocoding the address";

pub struct GeocodingClient {
    client: Client,
    api_key: Option<String>,
    endpoint: Url,
}

impl GeocodingClient {
    /// Creates a client against `base_url` (the maps host root).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn new(client: Client, base_url: &str, api_key: Option<&str>) -> Result<Self, BuildError> {
        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            endpoint: endpoint_url(base_url, GEOCODE_PATH)?,
        })
    }

    /// Resolves `address` to a single location.
    ///
    /// The address is sent as-is (URL-escaped) and the first result wins.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::NotFound`] when the provider reports `ZERO_RESULTS`
    ///   or returns `OK` with an empty result list.
    /// - [`PipelineError::Geocode`] for any other non-`OK` status, a non-2xx
    ///   HTTP response, or a body that is not a geocoding envelope.
    /// - [`PipelineError::Network`] / [`PipelineError::Timeout`] on transport
    ///   failure.
    pub async fn geocode(&self, address: &str) -> Result<GeocodeResult, PipelineError> {
        let url = self.build_url(address);
        tracing::debug!(endpoint = %self.endpoint, "sending geocode request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PipelineError::from_transport(CONTEXT, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::Geocode {
                status: format!("HTTP {}", status.as_u16()),
                message: status.canonical_reason().map(str::to_owned),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| PipelineError::from_transport(CONTEXT, e))?;
        let envelope: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| PipelineError::Geocode {
                status: "INVALID_RESPONSE".to_string(),
                message: Some(e.to_string()),
            })?;

        Self::interpret(envelope, address)
    }

    /// Maps a decoded envelope onto the result or the matching error.
    fn interpret(envelope: GeocodeResponse, address: &str) -> Result<GeocodeResult, PipelineError> {
        match envelope.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => {
                return Err(PipelineError::NotFound {
                    address: address.to_string(),
                })
            }
            _ => {
                return Err(PipelineError::Geocode {
                    status: envelope.status,
                    message: envelope.error_message,
                })
            }
        }

        let first = envelope
            .results
            .into_iter()
            .next()
            .ok_or_else(|| PipelineError::NotFound {
                address: address.to_string(),
            })?;

        Ok(GeocodeResult {
            latitude: first.geometry.location.lat,
            longitude: first.geometry.location.lng,
            formatted_address: first.formatted_address,
        })
    }

    fn build_url(&self, address: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("address", address);
            if let Some(key) = &self.api_key {
                pairs.append_pair("key", key);
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(api_key: Option<&str>) -> GeocodingClient {
        GeocodingClient::new(Client::new(), "https://maps.googleapis.com", api_key)
            .expect("client construction should not fail")
    }

    fn envelope(value: serde_json::Value) -> GeocodeResponse {
        serde_json::from_value(value).expect("valid geocode envelope")
    }

    #[test]
    fn build_url_encodes_address_and_appends_key() {
        let client = test_client(Some("test-key"));
        let url = client.build_url("1600 Amphitheatre Pkwy, Mountain View & Co");
        assert_eq!(
            url.as_str(),
            "https://maps.googleapis.com/maps/api/geocode/json?address=1600+Amphitheatre+Pkwy%2C+Mountain+View+%26+Co&key=test-key"
        );
    }

    #[test]
    fn build_url_omits_missing_key() {
        let client = test_client(None);
        let url = client.build_url("Main St");
        assert_eq!(
            url.as_str(),
            "https://maps.googleapis.com/maps/api/geocode/json?address=Main+St"
        );
    }

    #[test]
    fn interpret_ok_takes_first_result() {
        let body = envelope(serde_json::json!({
            "status": "OK",
            "results": [
                {
                    "formatted_address": "First Result",
                    "geometry": { "location": { "lat": 1.5, "lng": -2.5 } }
                },
                {
                    "formatted_address": "Second Result",
                    "geometry": { "location": { "lat": 9.0, "lng": 9.0 } }
                }
            ]
        }));
        let result = GeocodingClient::interpret(body, "query").unwrap();
        assert_eq!(result.formatted_address, "First Result");
        assert!((result.latitude - 1.5).abs() < f64::EPSILON);
        assert!((result.longitude + 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn interpret_zero_results_is_not_found() {
        let body = envelope(serde_json::json!({ "status": "ZERO_RESULTS", "results": [] }));
        let err = GeocodingClient::interpret(body, "nowhere").unwrap_err();
        assert!(
            matches!(err, PipelineError::NotFound { ref address } if address == "nowhere"),
            "expected NotFound, got: {err:?}"
        );
    }

    #[test]
    fn interpret_ok_with_no_results_is_not_found() {
        let body = envelope(serde_json::json!({ "status": "OK" }));
        let err = GeocodingClient::interpret(body, "ghost").unwrap_err();
        assert!(matches!(err, PipelineError::NotFound { .. }), "got: {err:?}");
    }

    #[test]
    fn interpret_other_status_carries_status_and_message() {
        let body = envelope(serde_json::json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        }));
        let err = GeocodingClient::interpret(body, "x").unwrap_err();
        match err {
            PipelineError::Geocode { status, message } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message.as_deref(), Some("The provided API key is invalid."));
            }
            other => panic!("expected Geocode, got: {other:?}"),
        }
    }
}
