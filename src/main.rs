// Event Calendar
// Main entry point

mod cli;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings_service = cli.settings_service();
    let settings = settings_service.load()?;

    // RUST_LOG wins over the configured filter
    env_logger::Builder::from_env(Env::default().default_filter_or(settings.log_filter.as_str()))
        .init();

    log::info!("Starting Event Calendar");
    log::info!("{}", settings_service.describe_source());

    cli::run(cli, &settings_service, settings)
}
