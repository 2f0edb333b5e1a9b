use serde_json::Value;
use vital_monitor_cli::config::{MonitorConfig, OutputFormat};
use vital_monitor_cli::run;
use vital_monitor_domain::testing::{critical_vitals, normal_vitals, ReadingBuilder};
use vital_monitor_domain::VitalsReading;

// Initialize tracing once for all tests
static INIT: std::sync::Once = std::sync::Once::new();
fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("info")
            .with_test_writer()
            .try_init();
    });
}

fn run_to_string(config: &MonitorConfig, reading: &VitalsReading) -> (bool, String) {
    let mut out = Vec::new();
    let report = run(config, reading, &mut out).unwrap();
    (report.all_ok(), String::from_utf8(out).unwrap())
}

#[test]
fn test_normal_vitals_text_output() {
    initialize();

    let (all_ok, output) = run_to_string(&MonitorConfig::default(), &normal_vitals());

    assert!(all_ok);
    assert!(!output.contains("Warning:"));
    assert!(output.contains("vitals ok"));
}

#[test]
fn test_critical_vitals_print_every_warning() {
    initialize();

    let (all_ok, output) = run_to_string(&MonitorConfig::default(), &critical_vitals());

    assert!(!all_ok);
    assert!(output.contains("Warning: Approaching hyperthermia\n"));
    assert!(output.contains("Warning: Pulse Rate is too low!\n"));
    assert!(output.contains("Warning: Approaching hypoxemia\n"));
    assert!(output.contains("vitals not ok"));
}

#[test]
fn test_celsius_reading_from_builder() {
    initialize();

    let reading = ReadingBuilder::new().with_temperature_c(37.0).build();
    let (all_ok, _) = run_to_string(&MonitorConfig::default(), &reading);
    assert!(all_ok);

    let reading = ReadingBuilder::new().with_temperature_c(35.0).build();
    let (all_ok, output) = run_to_string(&MonitorConfig::default(), &reading);
    assert!(!all_ok);
    assert!(output.contains("Warning: Approaching hypothermia"));
}

#[test]
fn test_json_output() {
    initialize();

    let config = MonitorConfig {
        output: OutputFormat::Json,
        ..MonitorConfig::default()
    };
    let reading = ReadingBuilder::new().with_pulse_rate(101.0).with_spo2(89.0).build();

    let (all_ok, output) = run_to_string(&config, &reading);
    assert!(!all_ok);

    let report: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["temperature_ok"], true);
    assert_eq!(report["pulse_rate_ok"], false);
    assert_eq!(report["spo2_ok"], false);
    assert_eq!(
        report["warnings"],
        serde_json::json!(["Pulse Rate is too high!", "Approaching hypoxemia"])
    );
}

#[test]
fn test_configured_tolerance_applies() {
    initialize();

    let config = MonitorConfig::from_lookup(|key| match key {
        "VITALS_WARNING_TOLERANCE_PERCENT" => Some("0".to_string()),
        _ => None,
    })
    .unwrap();

    // 99.0 is inside the default pulse warning band but passes without one
    let reading = ReadingBuilder::new().with_pulse_rate(99.0).build();
    let (all_ok, _) = run_to_string(&config, &reading);
    assert!(all_ok);

    let (all_ok, _) = run_to_string(&MonitorConfig::default(), &reading);
    assert!(!all_ok);
}

#[test]
fn test_reading_from_args_end_to_end() {
    initialize();

    let config = MonitorConfig::default();
    let args: Vec<String> = ["96.0", "75", "95", "F"].iter().map(|s| s.to_string()).collect();
    let reading = config.reading_from_args(&args).unwrap();

    let (all_ok, output) = run_to_string(&config, &reading);
    assert!(!all_ok);
    assert!(output.starts_with("Warning: Approaching hypothermia\n"));
}

/// Writer whose every write fails
struct ClosedWriter;

impl std::io::Write for ClosedWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_failed_warning_write_is_reported() {
    initialize();

    let result = run(&MonitorConfig::default(), &critical_vitals(), ClosedWriter);

    let err = result.err().unwrap();
    assert!(matches!(err, vital_monitor_cli::RunError::Io(_)));
}
