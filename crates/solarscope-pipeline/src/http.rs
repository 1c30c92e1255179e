//! Shared `reqwest` plumbing for the provider clients.

use std::time::Duration;

use reqwest::{Client, Response, Url};

use crate::error::BuildError;

/// Longest slice of a non-JSON error body kept in a user-facing message.
const MAX_BODY_EXCERPT_CHARS: usize = 200;

/// Builds the HTTP client shared by all three provider clients.
///
/// `timeout_secs` bounds each individual request; exceeding it surfaces as
/// [`crate::PipelineError::Timeout`] for that request only.
///
/// # Errors
///
/// Returns [`BuildError::Http`] if the underlying `reqwest::Client`
/// cannot be constructed (e.g., invalid TLS config).
pub fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, BuildError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Parses `base_url` and resolves `endpoint_path` against it.
///
/// The base is normalised to end with exactly one slash so that joining keeps
/// any path prefix (`http://host/proxy` + `maps/api/...`).
pub(crate) fn endpoint_url(base_url: &str, endpoint_path: &str) -> Result<Url, BuildError> {
    let invalid = |reason: String| BuildError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base".to_string()));
    }
    base.join(endpoint_path).map_err(|e| invalid(e.to_string()))
}

/// Summarises a non-success response as `HTTP <status>[: <detail>]`.
///
/// Google APIs wrap failures as `{"error": {"message": ...}}`; the static map
/// endpoint answers with plain text. Either form is reduced to one line.
pub(crate) async fn describe_error_response(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.chars().take(MAX_BODY_EXCERPT_CHARS).collect())
            }
        });

    match detail {
        Some(detail) => format!("HTTP {status}: {detail}"),
        None => format!("HTTP {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_path_onto_root() {
        let url = endpoint_url("https://maps.googleapis.com", "maps/api/geocode/json").unwrap();
        assert_eq!(url.as_str(), "https://maps.googleapis.com/maps/api/geocode/json");
    }

    #[test]
    fn endpoint_url_strips_trailing_slashes() {
        let url = endpoint_url("https://maps.googleapis.com//", "maps/api/staticmap").unwrap();
        assert_eq!(url.as_str(), "https://maps.googleapis.com/maps/api/staticmap");
    }

    #[test]
    fn endpoint_url_keeps_path_prefix() {
        let url = endpoint_url("http://127.0.0.1:8080/proxy", "v1/buildingInsights:findClosest")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/proxy/v1/buildingInsights:findClosest"
        );
    }

    #[test]
    fn endpoint_url_rejects_garbage() {
        let err = endpoint_url("not a url", "maps/api/staticmap").unwrap_err();
        assert!(
            matches!(err, BuildError::InvalidBaseUrl { ref url, .. } if url == "not a url"),
            "expected InvalidBaseUrl, got: {err:?}"
        );
    }
}
