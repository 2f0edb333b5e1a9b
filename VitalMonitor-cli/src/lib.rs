// Vital Monitor CLI
//
// Demo harness around the domain checks: configuration loading,
// console output and the run loop used by the binary.

pub mod config;
pub mod console;

use std::io::Write;

use tracing::info;
use vital_monitor_domain::{VitalsReading, VitalsReport, WarningNotifier};

use crate::config::{MonitorConfig, OutputFormat};
use crate::console::{render_text, ConsoleNotifier};

/// Errors returned by [`run`]
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Check one set of readings and write the result to `out`
///
/// All checks run first. In text mode the collected warnings are then
/// written in order, followed by a summary; a failed write is returned as
/// an error. In JSON mode only the serialized report is written.
pub fn run<W: Write>(
    config: &MonitorConfig,
    reading: &VitalsReading,
    out: W,
) -> Result<VitalsReport, RunError> {
    info!(
        temperature = reading.temperature,
        pulse_rate = reading.pulse_rate,
        spo2 = reading.spo2,
        "Checking vitals"
    );

    let report = config.checker.evaluate(reading);

    match config.output {
        OutputFormat::Text => {
            let notifier = ConsoleNotifier::new(out);
            for warning in &report.warnings {
                notifier.notify(warning);
            }
            let mut out = notifier.into_inner()?;
            writeln!(out, "{}", render_text(&report))?;
        }
        OutputFormat::Json => {
            let mut out = out;
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }

    info!(all_ok = report.all_ok(), "Vitals check complete");
    Ok(report)
}
