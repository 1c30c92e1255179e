//! Address-to-insights orchestration.

use solarscope_core::{AppConfig, SolarInsights, SolarMode};

use crate::error::{BuildError, PipelineError};
use crate::geocode::GeocodingClient;
use crate::http::build_http_client;
use crate::insights::{derive_insights, placeholder_insights};
use crate::solar::SolarClient;
use crate::state::{PipelineEvent, PipelineState, Stage};
use crate::static_map::StaticMapClient;

const INVALID_ADDRESS_MESSAGE: &str = "Please enter a valid address";

/// A successful submission: the solar estimates plus the tile that loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub insights: SolarInsights,
    pub map_url: String,
}

/// Source of the solar step. Exactly one per pipeline.
pub enum SolarSource {
    Live(SolarClient),
    /// Fixed placeholder estimates; the solar provider is never called.
    Mock,
}

pub struct AddressInsightsPipeline {
    geocoder: GeocodingClient,
    static_map: StaticMapClient,
    solar: SolarSource,
    verify_credentials: bool,
}

/// Trims `address` and rejects it if nothing is left.
///
/// # Errors
///
/// Returns [`PipelineError::Validation`] for empty or whitespace-only input.
pub fn validate_address(address: &str) -> Result<&str, PipelineError> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(PipelineError::Validation(INVALID_ADDRESS_MESSAGE.to_string()));
    }
    Ok(trimmed)
}

impl AddressInsightsPipeline {
    #[must_use]
    pub fn new(
        geocoder: GeocodingClient,
        static_map: StaticMapClient,
        solar: SolarSource,
        verify_credentials: bool,
    ) -> Self {
        Self {
            geocoder,
            static_map,
            solar,
            verify_credentials,
        }
    }

    /// Wires all clients from configuration over one shared HTTP client.
    ///
    /// Missing API keys are not an error here; they surface from the
    /// credential check or as provider errors when a submission runs.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] if the HTTP client cannot be built or a base
    /// URL is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, BuildError> {
        let http = build_http_client(config.request_timeout_secs, &config.user_agent)?;
        let maps_key = config.maps_api_key.as_deref();

        let geocoder = GeocodingClient::new(http.clone(), &config.maps_base_url, maps_key)?;
        let static_map = StaticMapClient::new(http.clone(), &config.maps_base_url, maps_key)?;
        let solar = match config.solar_mode {
            SolarMode::Live => SolarSource::Live(SolarClient::new(
                http,
                &config.solar_base_url,
                config.solar_api_key.as_deref(),
            )?),
            SolarMode::Mock => SolarSource::Mock,
        };

        Ok(Self::new(
            geocoder,
            static_map,
            solar,
            config.verify_credentials,
        ))
    }

    /// Runs one submission to completion or to its first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`PipelineError`] raised by any step. Nothing is
    /// retried.
    pub async fn submit(&self, address: &str) -> Result<PipelineOutcome, PipelineError> {
        self.run(address, |_| {}).await
    }

    /// Runs one submission while folding its progress into `state`.
    ///
    /// `state` is reset on entry, so nothing from a previous submission leaks
    /// into this one. The returned state is always terminal.
    pub async fn drive(&self, state: PipelineState, address: &str) -> PipelineState {
        let mut state = state.apply(PipelineEvent::Submitted);

        let result = self
            .run(address, |event| {
                state = std::mem::take(&mut state).apply(event);
            })
            .await;

        let event = match result {
            Ok(outcome) => PipelineEvent::Completed(outcome.insights),
            Err(e) => PipelineEvent::Failed {
                kind: e.kind(),
                message: e.to_string(),
            },
        };
        state.apply(event)
    }

    async fn run<F>(&self, address: &str, mut observe: F) -> Result<PipelineOutcome, PipelineError>
    where
        F: FnMut(PipelineEvent),
    {
        let result = self.run_steps(address, &mut observe).await;
        match &result {
            Ok(outcome) => tracing::info!(
                address = %outcome.insights.address,
                panels = outcome.insights.number_of_panels,
                "submission completed"
            ),
            Err(e) => tracing::warn!(kind = %e.kind(), error = %e, "submission failed"),
        }
        result
    }

    async fn run_steps<F>(
        &self,
        address: &str,
        observe: &mut F,
    ) -> Result<PipelineOutcome, PipelineError>
    where
        F: FnMut(PipelineEvent),
    {
        let address = validate_address(address)?;

        if self.verify_credentials {
            enter(observe, Stage::VerifyingCredentials);
            self.check_credentials().await?;
        }

        enter(observe, Stage::Geocoding);
        let location = self.geocoder.geocode(address).await?;
        tracing::info!(
            formatted_address = %location.formatted_address,
            latitude = location.latitude,
            longitude = location.longitude,
            "address geocoded"
        );

        enter(observe, Stage::FetchingMap);
        let map_url = self.static_map.fetch_tile(location.coordinates()).await?;
        observe(PipelineEvent::MapReady(map_url.clone()));

        enter(observe, Stage::FetchingSolar);
        let insights = match &self.solar {
            SolarSource::Live(client) => {
                let potential = client.building_insights(location.coordinates()).await?;
                derive_insights(&potential, &location.formatted_address)?
            }
            SolarSource::Mock => {
                tracing::debug!("solar provider disabled, using placeholder estimates");
                placeholder_insights(&location.formatted_address)
            }
        };

        Ok(PipelineOutcome { insights, map_url })
    }

    async fn check_credentials(&self) -> Result<(), PipelineError> {
        self.static_map.probe().await?;
        if let SolarSource::Live(solar) = &self.solar {
            solar.probe().await?;
        }
        Ok(())
    }
}

fn enter<F>(observe: &mut F, stage: Stage)
where
    F: FnMut(PipelineEvent),
{
    tracing::info!(stage = %stage, "entering stage");
    observe(PipelineEvent::StageEntered(stage));
}
