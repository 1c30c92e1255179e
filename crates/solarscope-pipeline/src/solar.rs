//! Client for the solar building-insights endpoint.

use reqwest::{Client, RequestBuilder, Url};
use solarscope_core::Coordinates;

use crate::error::{BuildError, PipelineError, Provider};
use crate::http::{describe_error_response, endpoint_url};
use crate::types::{BuildingInsightsResponse, SolarLocation, SolarPotential, SolarRequest};

const INSIGHTS_PATH: &str = "v1/buildingInsights:findClosest";
const API_KEY_HEADER: &str = "X-Goog-Api-Key";

/// A location with known rooftop coverage, used only to check the key.
const PROBE_LOCATION: Coordinates = Coordinates {
    latitude: 37.422_000_1,
    longitude: -122.084_057_5,
};

pub struct SolarClient {
    client: Client,
    api_key: Option<String>,
    endpoint: Url,
}

impl SolarClient {
    /// Creates a client against `base_url` (the solar host root).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn new(client: Client, base_url: &str, api_key: Option<&str>) -> Result<Self, BuildError> {
        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            endpoint: endpoint_url(base_url, INSIGHTS_PATH)?,
        })
    }

    /// Fetches the solar potential of the building closest to `at`.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::SolarApi`] on a non-2xx response or a body without
    ///   a well-formed `solarPotential` object.
    /// - [`PipelineError::Network`] / [`PipelineError::Timeout`] on transport
    ///   failure.
    pub async fn building_insights(&self, at: Coordinates) -> Result<SolarPotential, PipelineError> {
        const CONTEXT: &str = "fetching solar insights";

        tracing::debug!(
            latitude = at.latitude,
            longitude = at.longitude,
            "requesting building insights"
        );
        let response = self
            .request(at)
            .send()
            .await
            .map_err(|e| PipelineError::from_transport(CONTEXT, e))?;

        if !response.status().is_success() {
            return Err(PipelineError::SolarApi(
                describe_error_response(response).await,
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| PipelineError::from_transport(CONTEXT, e))?;
        let insights: BuildingInsightsResponse = serde_json::from_str(&body)
            .map_err(|e| PipelineError::SolarApi(format!("malformed response: {e}")))?;

        Ok(insights.solar_potential)
    }

    /// Checks the solar key against a location with known coverage.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Credential`] if no key is configured (no request is
    ///   sent) or the endpoint answers with a non-2xx status.
    /// - [`PipelineError::Network`] / [`PipelineError::Timeout`] on transport
    ///   failure.
    pub async fn probe(&self) -> Result<(), PipelineError> {
        const CONTEXT: &str = "verifying the Solar API key";

        if self.api_key.is_none() {
            return Err(PipelineError::Credential {
                provider: Provider::Solar,
                message: "API key is not configured".to_string(),
            });
        }

        let response = self
            .request(PROBE_LOCATION)
            .send()
            .await
            .map_err(|e| PipelineError::from_transport(CONTEXT, e))?;

        if !response.status().is_success() {
            return Err(PipelineError::Credential {
                provider: Provider::Solar,
                message: describe_error_response(response).await,
            });
        }
        Ok(())
    }

    fn request(&self, at: Coordinates) -> RequestBuilder {
        let body = SolarRequest {
            location: SolarLocation {
                latitude: at.latitude,
                longitude: at.longitude,
            },
        };
        let mut request = self.client.post(self.endpoint.clone()).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }
        request
    }
}
