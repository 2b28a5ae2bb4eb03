mod catalog;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod filter;
mod food;
mod labels;
mod logging;
mod output;
mod profile;

use clap::Parser;
use config::AppConfig;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: cli::Cli) -> Result<(), String> {
    let config = AppConfig::load()
        .map_err(|e| e.to_string())?
        .with_catalog(cli.catalog);

    let level = logging::resolve_level(cli.verbose, config.log_level.as_deref());
    let _logger = logging::init_logging(level)?;
    log::debug!("data dir: {}", config.data_dir.display());

    commands::dispatch(cli.command, &config)
}
