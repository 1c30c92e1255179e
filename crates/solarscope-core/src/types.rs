//! Domain types passed between the geocoding, map, and solar steps.

use serde::{Deserialize, Serialize};

/// A WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A free-text address resolved by the geocoding provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    /// The provider's canonical form of the address, e.g.
    /// `"1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA"`.
    pub formatted_address: String,
}

impl GeocodeResult {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Rooftop solar estimates for one address.
///
/// Field names serialize in camelCase so JSON output matches the shape the
/// form front end consumed (`yearlyGenerationKWh`, `potentialSavingsUSD`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarInsights {
    #[serde(rename = "yearlyGenerationKWh")]
    pub yearly_generation_kwh: f64,
    /// Twenty-year savings at a flat $0.12/kWh, rounded to whole dollars.
    #[serde(rename = "potentialSavingsUSD")]
    pub potential_savings_usd: u64,
    pub annual_sunshine_hours: u64,
    #[serde(rename = "roofSpaceM2")]
    pub roof_space_m2: u64,
    pub number_of_panels: u32,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocode_result_exposes_coordinates() {
        let result = GeocodeResult {
            latitude: 37.422,
            longitude: -122.084,
            formatted_address: "Mountain View, CA".to_string(),
        };
        assert_eq!(result.coordinates(), Coordinates::new(37.422, -122.084));
    }

    #[test]
    fn solar_insights_serializes_with_form_field_names() {
        let insights = SolarInsights {
            yearly_generation_kwh: 1.5,
            potential_savings_usd: 2400,
            annual_sunshine_hours: 219_000,
            roof_space_m2: 80,
            number_of_panels: 20,
            address: "1 Main St".to_string(),
        };
        let value = serde_json::to_value(&insights).expect("serialize insights");
        assert_eq!(value["yearlyGenerationKWh"], 1.5);
        assert_eq!(value["potentialSavingsUSD"], 2400);
        assert_eq!(value["annualSunshineHours"], 219_000);
        assert_eq!(value["roofSpaceM2"], 80);
        assert_eq!(value["numberOfPanels"], 20);
        assert_eq!(value["address"], "1 Main St");
    }
}
