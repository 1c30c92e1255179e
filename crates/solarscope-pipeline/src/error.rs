use thiserror::Error;

/// The upstream service a credential failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Maps,
    Solar,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Maps => write!(f, "Maps"),
            Provider::Solar => write!(f, "Solar"),
        }
    }
}

/// Errors that end a submission.
///
/// The `Display` text of each variant is the message shown to the user; it
/// never contains an API key.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input rejected before any network call.
    #[error("{0}")]
    Validation(String),

    /// API key missing, invalid, or restricted.
    #[error("{provider} API key check failed: {message}")]
    Credential { provider: Provider, message: String },

    /// The request was sent but no response came back.
    #[error("Network error while {context}: {message}")]
    Network {
        context: &'static str,
        message: String,
    },

    /// The request exceeded the configured deadline.
    #[error("Request timed out while {context}")]
    Timeout { context: &'static str },

    /// The geocoder answered with a status other than `OK` or `ZERO_RESULTS`.
    #[error("Geocoding failed: {status}{}", detail_suffix(.message.as_deref()))]
    Geocode {
        status: String,
        message: Option<String>,
    },

    /// The address resolved to nothing.
    #[error("Address not found: no results for \"{address}\"")]
    NotFound { address: String },

    /// The satellite tile could not be loaded.
    #[error("Failed to load map image (HTTP {status})")]
    MapImage { status: u16 },

    /// The solar provider returned an error status or a malformed payload.
    #[error("Solar API error: {0}")]
    SolarApi(String),
}

fn detail_suffix(message: Option<&str>) -> String {
    message.map(|m| format!(" ({m})")).unwrap_or_default()
}

/// Field-less tag for each [`PipelineError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Credential,
    Network,
    Timeout,
    Geocode,
    NotFound,
    MapImage,
    SolarApi,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Credential => "credential",
            ErrorKind::Network => "network",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Geocode => "geocode",
            ErrorKind::NotFound => "not_found",
            ErrorKind::MapImage => "map_image",
            ErrorKind::SolarApi => "solar_api",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PipelineError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Validation(_) => ErrorKind::Validation,
            PipelineError::Credential { .. } => ErrorKind::Credential,
            PipelineError::Network { .. } => ErrorKind::Network,
            PipelineError::Timeout { .. } => ErrorKind::Timeout,
            PipelineError::Geocode { .. } => ErrorKind::Geocode,
            PipelineError::NotFound { .. } => ErrorKind::NotFound,
            PipelineError::MapImage { .. } => ErrorKind::MapImage,
            PipelineError::SolarApi(_) => ErrorKind::SolarApi,
        }
    }

    /// Classifies a transport failure from `reqwest`.
    ///
    /// Deadline overruns become [`PipelineError::Timeout`]; everything else
    /// (refused connection, DNS, TLS, reset mid-body) becomes
    /// [`PipelineError::Network`]. The error text is rendered without its URL
    /// so query-string keys never reach the message.
    pub(crate) fn from_transport(context: &'static str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PipelineError::Timeout { context }
        } else {
            PipelineError::Network {
                context,
                message: err.without_url().to_string(),
            }
        }
    }
}

/// Errors raised while wiring up the HTTP clients, before any submission.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_passed_through() {
        let err = PipelineError::Validation("Please enter a valid address".to_string());
        assert_eq!(err.to_string(), "Please enter a valid address");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn geocode_message_includes_status_and_provider_detail() {
        let err = PipelineError::Geocode {
            status: "REQUEST_DENIED".to_string(),
            message: Some("The provided API key is invalid.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Geocoding failed: REQUEST_DENIED (The provided API key is invalid.)"
        );
    }

    #[test]
    fn geocode_message_without_detail() {
        let err = PipelineError::Geocode {
            status: "OVER_QUERY_LIMIT".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "Geocoding failed: OVER_QUERY_LIMIT");
    }

    #[test]
    fn credential_message_names_provider() {
        let err = PipelineError::Credential {
            provider: Provider::Solar,
            message: "API key is not configured".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Solar API key check failed: API key is not configured"
        );
        assert_eq!(err.kind(), ErrorKind::Credential);
    }

    #[test]
    fn map_image_message_carries_status() {
        let err = PipelineError::MapImage { status: 403 };
        assert_eq!(err.to_string(), "Failed to load map image (HTTP 403)");
        assert_eq!(err.kind().as_str(), "map_image");
    }
}
