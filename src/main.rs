use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use harvest_week_filler::{FillRequest, FillerService, HarvestConfig, RunOutcome, cli::Arguments};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Arguments::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = HarvestConfig::from_env().context("could not load Harvest credentials")?;
    let service = FillerService::from_config(&config)?;

    match service.run(&FillRequest::from(args)).await? {
        RunOutcome::Filled { entries } => info!("Created {} time entries", entries),
        RunOutcome::NotFound(_) => {}
    }
    Ok(())
}
