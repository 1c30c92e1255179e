//! Text and JSON rendering of a finished submission.

use serde::Serialize;
use solarscope_core::SolarInsights;
use solarscope_pipeline::PipelineState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupReport<'a> {
    query: &'a str,
    stage: String,
    error: Option<&'a str>,
    map_url: Option<&'a str>,
    solar_data: Option<&'a SolarInsights>,
}

/// Render `state` as a single JSON line.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub(crate) fn render_json(query: &str, state: &PipelineState) -> anyhow::Result<String> {
    let report = LookupReport {
        query,
        stage: state.stage.to_string(),
        error: state.error.as_deref(),
        map_url: state.map_url.as_deref(),
        solar_data: state.solar_data.as_ref(),
    };
    Ok(serde_json::to_string(&report)?)
}

/// Render `state` as an aligned text block.
pub(crate) fn render_text(query: &str, state: &PipelineState) -> String {
    let mut lines = vec![format!("{:<16}{query}", "Query:")];

    if let Some(error) = &state.error {
        lines.push(format!("{:<16}{error}", "Error:"));
        return lines.join("\n");
    }

    if let Some(insights) = &state.solar_data {
        lines.push(format!("{:<16}{}", "Address:", insights.address));
    }
    if let Some(map_url) = &state.map_url {
        lines.push(format!("{:<16}{map_url}", "Map:"));
    }
    if let Some(insights) = &state.solar_data {
        lines.push(format!(
            "{:<16}{:.1} kWh",
            "Yearly output:", insights.yearly_generation_kwh
        ));
        lines.push(format!(
            "{:<16}${}",
            "Savings (20y):",
            group_thousands(insights.potential_savings_usd)
        ));
        lines.push(format!(
            "{:<16}{} h",
            "Sunshine:",
            group_thousands(insights.annual_sunshine_hours)
        ));
        lines.push(format!("{:<16}{} m²", "Roof space:", insights.roof_space_m2));
        lines.push(format!("{:<16}{}", "Panels:", insights.number_of_panels));
    } else {
        lines.push(format!("{:<16}{}", "Status:", state.stage));
    }

    lines.join("\n")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
