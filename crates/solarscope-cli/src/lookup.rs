//! `lookup` command handler.
//!
//! Plays the part of the address form: it owns one [`PipelineState`], submits
//! each address in turn, and renders the state after every submission.

use solarscope_core::AppConfig;
use solarscope_pipeline::{AddressInsightsPipeline, PipelineState};

use crate::render::{render_json, render_text};

/// Submit `addresses` in order and print each terminal state.
///
/// Returns the number of submissions that ended in an error. A failed
/// submission does not stop the ones after it.
///
/// # Errors
///
/// Returns an error if the pipeline cannot be built from `config` or a result
/// cannot be serialized.
pub(crate) async fn run_lookup(
    config: &AppConfig,
    addresses: &[String],
    json: bool,
) -> anyhow::Result<usize> {
    let pipeline = AddressInsightsPipeline::from_config(config)?;
    tracing::info!(
        solar_mode = %config.solar_mode,
        verify_credentials = config.verify_credentials,
        count = addresses.len(),
        "starting lookup"
    );

    let mut state = PipelineState::default();
    let mut failures = 0usize;

    for (index, address) in addresses.iter().enumerate() {
        state = pipeline.drive(state, address).await;
        if state.error.is_some() {
            failures += 1;
        }

        if json {
            println!("{}", render_json(address, &state)?);
        } else {
            if index > 0 {
                println!();
            }
            println!("{}", render_text(address, &state));
        }
    }

    Ok(failures)
}
