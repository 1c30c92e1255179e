//! Integration tests for the individual provider clients using wiremock.

use serde_json::json;
use solarscope_core::Coordinates;
use solarscope_pipeline::{
    build_http_client, GeocodingClient, PipelineError, SolarClient, StaticMapClient,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http() -> reqwest::Client {
    build_http_client(5, "solarscope-test/0.1").expect("http client should build")
}

#[tokio::test]
async fn geocode_http_error_is_geocode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = GeocodingClient::new(http(), &server.uri(), Some("k")).unwrap();
    let err = client.geocode("1 Main St").await.unwrap_err();
    match err {
        PipelineError::Geocode { status, message } => {
            assert_eq!(status, "HTTP 500");
            assert_eq!(message.as_deref(), Some("Internal Server Error"));
        }
        other => panic!("expected Geocode, got: {other:?}"),
    }
}

#[tokio::test]
async fn geocode_non_json_body_is_geocode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>captive portal</html>"))
        .mount(&server)
        .await;

    let client = GeocodingClient::new(http(), &server.uri(), Some("k")).unwrap();
    let err = client.geocode("1 Main St").await.unwrap_err();
    assert!(
        matches!(err, PipelineError::Geocode { ref status, .. } if status == "INVALID_RESPONSE"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn geocode_without_key_sends_no_key_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("address", "Main St"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "status": "REQUEST_DENIED",
            "error_message": "You must use an API key to authenticate each request.",
            "results": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeocodingClient::new(http(), &server.uri(), None).unwrap();
    let err = client.geocode("Main St").await.unwrap_err();
    assert!(
        matches!(err, PipelineError::Geocode { ref status, .. } if status == "REQUEST_DENIED"),
        "got: {err:?}"
    );

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests[0].url.query_pairs().all(|(k, _)| k != "key"));
}

#[tokio::test]
async fn static_map_fetch_returns_requested_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/maps/api/staticmap"))
        .and(query_param("center", "51.5034,-0.1276"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
        .expect(1)
        .mount(&server)
        .await;

    let client = StaticMapClient::new(http(), &server.uri(), Some("k")).unwrap();
    let center = Coordinates::new(51.5034, -0.1276);
    let url = client.fetch_tile(center).await.expect("tile should load");
    assert_eq!(url, client.tile_url(center).to_string());
}

#[tokio::test]
async fn solar_probe_sends_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/buildingInsights:findClosest"))
        .and(header("X-Goog-Api-Key", "solar-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = SolarClient::new(http(), &server.uri(), Some("solar-key")).unwrap();
    client.probe().await.expect("probe should pass");
}

#[tokio::test]
async fn solar_probe_without_key_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = SolarClient::new(http(), &server.uri(), None).unwrap();
    let err = client.probe().await.unwrap_err();
    assert!(matches!(err, PipelineError::Credential { .. }), "got: {err:?}");
}
