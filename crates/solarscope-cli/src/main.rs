mod lookup;
mod render;

use clap::{Parser, Subcommand};
use solarscope_core::SolarMode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "solarscope")]
#[command(about = "Satellite map and rooftop solar estimates for a street address")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve one or more addresses and show map and solar estimates
    Lookup {
        /// Addresses to submit, processed one after another
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Use placeholder solar estimates instead of calling the solar API
        #[arg(long)]
        mock_solar: bool,

        /// Skip the API key probes that run before geocoding
        #[arg(long)]
        skip_credential_check: bool,

        /// Print each result as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration with API keys redacted
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = solarscope_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Lookup {
            addresses,
            mock_solar,
            skip_credential_check,
            json,
        } => {
            if mock_solar {
                config.solar_mode = SolarMode::Mock;
            }
            if skip_credential_check {
                config.verify_credentials = false;
            }
            let failures = lookup::run_lookup(&config, &addresses, json).await?;
            if failures > 0 {
                anyhow::bail!("{failures} of {} lookups failed", addresses.len());
            }
        }
        Commands::Config => println!("{config:#?}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
