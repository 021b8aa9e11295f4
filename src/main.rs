use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use error_stack::ResultExt;
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt};
use tx_cells::cli::{run, Cli, CliError};
use tx_cells::config::app_config::AppConfig;

fn setup_tracing(level: &str) {
    let parsed = tracing::Level::from_str(level);

    // stdout carries the rendered cells
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            Targets::new()
                .with_target("tx_cells", *parsed.as_ref().unwrap_or(&tracing::Level::INFO)),
        )
        .with(stderr_layer)
        .init();

    if parsed.is_err() {
        tracing::warn!("Unknown log level {level:?}, using info");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config).change_context(CliError::Config) {
        Ok(config) => config,
        Err(report) => {
            setup_tracing("info");
            tracing::error!("❌ {report:?}");
            return ExitCode::FAILURE;
        }
    };
    setup_tracing(&config.log.level);
    tracing::trace!(?config, "Loaded configuration");

    let stdout = std::io::stdout();
    match run(cli.command, &config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            tracing::error!("❌ {report:?}");
            ExitCode::FAILURE
        }
    }
}
