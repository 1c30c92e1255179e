//! Address-to-solar-insights pipeline.
//!
//! Resolves a free-text address with the geocoding API, confirms a satellite
//! map tile for the resulting coordinate, and fetches (or mocks) rooftop
//! solar estimates. Every step is awaited in order and the first failure ends
//! the submission with a typed [`PipelineError`].

pub mod error;
pub mod geocode;
pub mod insights;
pub mod pipeline;
pub mod solar;
pub mod state;
pub mod static_map;
pub mod types;

mod http;

pub use error::{BuildError, ErrorKind, PipelineError, Provider};
pub use geocode::GeocodingClient;
pub use http::build_http_client;
pub use insights::{derive_insights, placeholder_insights};
pub use pipeline::{validate_address, AddressInsightsPipeline, PipelineOutcome, SolarSource};
pub use solar::SolarClient;
pub use state::{PipelineEvent, PipelineState, Stage};
pub use static_map::StaticMapClient;
