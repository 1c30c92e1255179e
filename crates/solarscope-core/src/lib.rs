//! Shared domain types and configuration for solarscope.

mod app_config;
mod config;
mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, SolarMode};
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{Coordinates, GeocodeResult, SolarInsights};

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
