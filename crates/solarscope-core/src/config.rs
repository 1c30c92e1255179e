use crate::app_config::{AppConfig, Environment, SolarMode};
use crate::ConfigError;

const DEFAULT_MAPS_BASE_URL: &str = "https://maps.googleapis.com/";
const DEFAULT_SOLAR_BASE_URL: &str = "https://solar.googleapis.com/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// API keys are optional here. A missing or rejected key is reported by the
/// pipeline's credential check, never at startup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    // Blank values in a `.env` file count as unset.
    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a boolean, got '{other}'"),
            }),
        }
    };

    let env = parse_environment(&or_default("SOLARSCOPE_ENV", "development"));
    let log_level = or_default("SOLARSCOPE_LOG_LEVEL", "info");

    let maps_api_key = optional("SOLARSCOPE_MAPS_API_KEY");
    let solar_api_key = optional("SOLARSCOPE_SOLAR_API_KEY");
    let solar_mode = parse_solar_mode(&or_default("SOLARSCOPE_SOLAR_MODE", "live"))?;
    let verify_credentials = parse_bool("SOLARSCOPE_VERIFY_CREDENTIALS", "true")?;

    let request_timeout_secs = parse_u64("SOLARSCOPE_REQUEST_TIMEOUT_SECS", "15")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SOLARSCOPE_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("SOLARSCOPE_USER_AGENT", "solarscope/0.1 (address-insights)");

    let maps_base_url = or_default("SOLARSCOPE_MAPS_BASE_URL", DEFAULT_MAPS_BASE_URL);
    let solar_base_url = or_default("SOLARSCOPE_SOLAR_BASE_URL", DEFAULT_SOLAR_BASE_URL);

    Ok(AppConfig {
        env,
        log_level,
        maps_api_key,
        solar_api_key,
        solar_mode,
        verify_credentials,
        request_timeout_secs,
        user_agent,
        maps_base_url,
        solar_base_url,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

fn parse_solar_mode(s: &str) -> Result<SolarMode, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "live" => Ok(SolarMode::Live),
        "mock" => Ok(SolarMode::Mock),
        other => Err(ConfigError::InvalidEnvVar {
            var: "SOLARSCOPE_SOLAR_MODE".to_string(),
            reason: format!("expected 'live' or 'mock', got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
