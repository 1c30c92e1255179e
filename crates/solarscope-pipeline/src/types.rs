//! Provider wire types.
//!
//! These model only the fields the pipeline reads; everything else in the
//! provider payloads is ignored during deserialization.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Geocoding
// ---------------------------------------------------------------------------

/// Geocoding envelope: `{"status": "OK", "results": [...]}`.
///
/// `status` is `"OK"`, `"ZERO_RESULTS"`, or a failure code such as
/// `"REQUEST_DENIED"` / `"OVER_QUERY_LIMIT"`, in which case
/// `error_message` usually explains why.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeCandidate {
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

// ---------------------------------------------------------------------------
// Solar
// ---------------------------------------------------------------------------

/// Request body: `{"location": {"latitude": .., "longitude": ..}}`.
#[derive(Debug, Serialize)]
pub struct SolarRequest {
    pub location: SolarLocation,
}

#[derive(Debug, Serialize)]
pub struct SolarLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingInsightsResponse {
    pub solar_potential: SolarPotential,
}

/// Rooftop capacity figures from the solar provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarPotential {
    pub max_array_panels_count: u32,
    pub panel_capacity_watts: f64,
    pub yearly_energy_dc_kwh: f64,
    /// Sunshine quantiles sampled across the roof surface.
    pub sunshine_quantiles: Vec<f64>,
    pub max_array_area_meters2: f64,
}
