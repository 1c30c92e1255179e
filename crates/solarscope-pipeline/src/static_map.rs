//! Client for the static map tile endpoint.
//!
//! Only the HTTP status of a tile fetch is inspected. On success the tile URL
//! itself is handed back for display; the image bytes are discarded.

use reqwest::{Client, Url};
use solarscope_core::Coordinates;

use crate::error::{BuildError, PipelineError, Provider};
use crate::http::{describe_error_response, endpoint_url};

const STATIC_MAP_PATH: &str = "maps/api/staticmap";

/// Zoom level of the satellite tile (building scale).
pub const TILE_ZOOM: u8 = 18;
pub const TILE_WIDTH: u32 = 600;
pub const TILE_HEIGHT: u32 = 400;

pub struct StaticMapClient {
    client: Client,
    api_key: Option<String>,
    endpoint: Url,
}

impl StaticMapClient {
    /// Creates a client against `base_url` (the maps host root).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidBaseUrl`] if `base_url` is not a valid URL.
    pub fn new(client: Client, base_url: &str, api_key: Option<&str>) -> Result<Self, BuildError> {
        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            endpoint: endpoint_url(base_url, STATIC_MAP_PATH)?,
        })
    }

    /// URL of a 600×400 satellite tile at zoom 18 centred on `center`.
    #[must_use]
    pub fn tile_url(&self, center: Coordinates) -> Url {
        let center = format!("{},{}", center.latitude, center.longitude);
        let size = format!("{TILE_WIDTH}x{TILE_HEIGHT}");
        self.build_url(&center, &TILE_ZOOM.to_string(), &size, "satellite")
    }

    /// Fetches the tile for `center` and returns its URL once it loads.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::MapImage`] on a non-2xx response.
    /// - [`PipelineError::Network`] / [`PipelineError::Timeout`] on transport
    ///   failure.
    pub async fn fetch_tile(&self, center: Coordinates) -> Result<String, PipelineError> {
        const CONTEXT: &str = "loading the map image";

        let url = self.tile_url(center);
        tracing::debug!(
            latitude = center.latitude,
            longitude = center.longitude,
            "fetching satellite tile"
        );

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| PipelineError::from_transport(CONTEXT, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::MapImage {
                status: status.as_u16(),
            });
        }

        Ok(url.into())
    }

    /// Checks the maps key with the smallest tile the endpoint will serve.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Credential`] if no key is configured (no request is
    ///   sent) or the endpoint rejects the key.
    /// - [`PipelineError::Network`] / [`PipelineError::Timeout`] on transport
    ///   failure.
    pub async fn probe(&self) -> Result<(), PipelineError> {
        const CONTEXT: &str = "verifying the Maps API key";

        if self.api_key.is_none() {
            return Err(PipelineError::Credential {
                provider: Provider::Maps,
                message: "API key is not configured".to_string(),
            });
        }

        let url = self.build_url("0,0", "1", "1x1", "roadmap");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PipelineError::from_transport(CONTEXT, e))?;

        if !response.status().is_success() {
            return Err(PipelineError::Credential {
                provider: Provider::Maps,
                message: describe_error_response(response).await,
            });
        }
        Ok(())
    }

    fn build_url(&self, center: &str, zoom: &str, size: &str, maptype: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("center", center);
            pairs.append_pair("zoom", zoom);
            pairs.append_pair("size", size);
            pairs.append_pair("maptype", maptype);
            if let Some(key) = &self.api_key {
                pairs.append_pair("key", key);
            }
        }
        url
    }
}
