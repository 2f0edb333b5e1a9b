use std::process::ExitCode;

use anyhow::Context;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vital_monitor_cli::config::MonitorConfig;

/// Exit code when a check raised a warning
const EXIT_VITALS_NOT_OK: u8 = 1;
/// Exit code for bad configuration or arguments
const EXIT_USAGE: u8 = 2;

/// The main entry point for the vital monitor harness
///
/// Readings come from positional arguments when present, otherwise from
/// the `VITALS_*` environment variables.
fn main() -> ExitCode {
    // Load environment variables from .env file
    if dotenv().is_err() {
        eprintln!("Warning: .env file not found or couldn't be read. Using environment variables.");
    }

    // Logs go to stderr so stdout only carries the check output
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer()
            .with_target(false)
            .with_ansi(true)
            .with_timer(fmt::time::uptime())
            .with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    match try_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_VITALS_NOT_OK),
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn try_main() -> anyhow::Result<bool> {
    let config = MonitorConfig::from_env().context("Failed to load configuration")?;
    info!(
        unit = ?config.unit,
        tolerance = config.checker.tolerance_percent(),
        "Configuration loaded"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let reading = if args.is_empty() {
        config
            .reading_from_lookup(|key| std::env::var(key).ok())
            .context("Failed to read vitals from environment")?
    } else {
        config
            .reading_from_args(&args)
            .context("Failed to parse vitals arguments")?
    };

    let report = vital_monitor_cli::run(&config, &reading, std::io::stdout().lock())
        .context("Failed to report vitals")?;

    Ok(report.all_ok())
}
