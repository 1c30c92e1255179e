//! Derivation of user-facing solar estimates from provider figures.

use solarscope_core::SolarInsights;

use crate::error::PipelineError;
use crate::types::SolarPotential;

/// Flat electricity price used for savings estimates.
pub const ELECTRICITY_RATE_USD_PER_KWH: f64 = 0.12;
/// Savings horizon in years.
pub const SAVINGS_HORIZON_YEARS: f64 = 20.0;
const HOURS_PER_YEAR: f64 = 365.0 * 24.0;

/// Turns a provider [`SolarPotential`] into [`SolarInsights`] for `address`.
///
/// `yearly_generation_kwh` is `panels * panel watts * yearly DC kWh`. The
/// units do not line up since capacity is counted twice.
///
/// # Errors
///
/// Returns [`PipelineError::SolarApi`] if a figure is negative or not finite,
/// or if the payload has no sunshine quantiles to average.
pub fn derive_insights(
    potential: &SolarPotential,
    address: &str,
) -> Result<SolarInsights, PipelineError> {
    let panel_capacity_watts = non_negative("panelCapacityWatts", potential.panel_capacity_watts)?;
    let yearly_energy_dc_kwh = non_negative("yearlyEnergyDcKwh", potential.yearly_energy_dc_kwh)?;
    let max_array_area = non_negative("maxArrayAreaMeters2", potential.max_array_area_meters2)?;

    let mean_sunshine = mean(&potential.sunshine_quantiles).ok_or_else(|| {
        PipelineError::SolarApi("response contains no sunshine quantiles".to_string())
    })?;
    let mean_sunshine = non_negative("sunshineQuantiles", mean_sunshine)?;

    let panels = potential.max_array_panels_count;

    Ok(SolarInsights {
        yearly_generation_kwh: f64::from(panels) * panel_capacity_watts * yearly_energy_dc_kwh,
        potential_savings_usd: round_to_u64(
            yearly_energy_dc_kwh * ELECTRICITY_RATE_USD_PER_KWH * SAVINGS_HORIZON_YEARS,
        ),
        annual_sunshine_hours: round_to_u64(mean_sunshine * HOURS_PER_YEAR),
        roof_space_m2: round_to_u64(max_array_area),
        number_of_panels: panels,
        address: address.to_string(),
    })
}

/// Fixed estimates returned when the solar provider is not in use.
#[must_use]
pub fn placeholder_insights(address: &str) -> SolarInsights {
    SolarInsights {
        yearly_generation_kwh: 10_500.0,
        potential_savings_usd: 25_200,
        annual_sunshine_hours: 2_800,
        roof_space_m2: 120,
        number_of_panels: 24,
        address: address.to_string(),
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64, PipelineError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(PipelineError::SolarApi(format!(
            "field {field} has invalid value {value}"
        )))
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;
    Some(values.iter().sum::<f64>() / count)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_to_u64(value: f64) -> u64 {
    value.round() as u64
}
