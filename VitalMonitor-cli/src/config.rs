//! Runtime configuration for the vital monitor harness
//!
//! Values come from the process environment (optionally seeded from a
//! `.env` file) and from positional command-line arguments.

use std::str::FromStr;

use thiserror::Error;
use vital_monitor_domain::{TemperatureUnit, VitalRangeChecker, VitalsError, VitalsReading};

/// Environment variable holding the default temperature unit
pub const ENV_TEMPERATURE_UNIT: &str = "VITALS_TEMPERATURE_UNIT";
/// Environment variable holding the warning tolerance in percent
pub const ENV_WARNING_TOLERANCE: &str = "VITALS_WARNING_TOLERANCE_PERCENT";
/// Environment variable selecting `text` or `json` output
pub const ENV_OUTPUT: &str = "VITALS_OUTPUT";
/// Environment variable holding the temperature reading
pub const ENV_TEMPERATURE: &str = "VITALS_TEMPERATURE";
/// Environment variable holding the pulse rate reading
pub const ENV_PULSE_RATE: &str = "VITALS_PULSE_RATE";
/// Environment variable holding the oxygen saturation reading
pub const ENV_SPO2: &str = "VITALS_SPO2";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value was not provided
    #[error("Missing value: {0}")]
    Missing(&'static str),

    /// A value could not be parsed as a number
    #[error("Invalid number for {name}: {value}")]
    InvalidNumber { name: &'static str, value: String },

    /// Output format was not recognised
    #[error("Invalid output format: {0}")]
    InvalidOutput(String),

    /// Wrong number of positional arguments
    #[error("Expected TEMPERATURE PULSE SPO2 [UNIT], got {0} arguments")]
    Arguments(usize),

    /// Rejected by the domain layer
    #[error(transparent)]
    Vitals(#[from] VitalsError),
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutput(s.to_string())),
        }
    }
}

/// Settings for one run of the monitor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorConfig {
    /// Unit assumed for temperature readings that do not name one
    pub unit: TemperatureUnit,

    /// Checker built from the configured warning tolerance
    pub checker: VitalRangeChecker,

    /// Output format
    pub output: OutputFormat,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            unit: TemperatureUnit::default(),
            checker: VitalRangeChecker::default(),
            output: OutputFormat::default(),
        }
    }
}

impl MonitorConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let unit = match lookup(ENV_TEMPERATURE_UNIT) {
            Some(value) => value.parse::<TemperatureUnit>()?,
            None => TemperatureUnit::default(),
        };

        let checker = match lookup(ENV_WARNING_TOLERANCE) {
            Some(value) => {
                let percent = parse_number(ENV_WARNING_TOLERANCE, &value)?;
                VitalRangeChecker::with_tolerance_percent(percent)?
            }
            None => VitalRangeChecker::default(),
        };

        let output = match lookup(ENV_OUTPUT) {
            Some(value) => value.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            unit,
            checker,
            output,
        })
    }

    /// Build a reading from positional arguments: `TEMPERATURE PULSE SPO2 [UNIT]`
    pub fn reading_from_args(&self, args: &[String]) -> Result<VitalsReading, ConfigError> {
        if args.len() != 3 && args.len() != 4 {
            return Err(ConfigError::Arguments(args.len()));
        }

        let unit = match args.get(3) {
            Some(value) => value.parse::<TemperatureUnit>()?,
            None => self.unit,
        };

        Ok(VitalsReading {
            temperature: parse_number("temperature", &args[0])?,
            pulse_rate: parse_number("pulse rate", &args[1])?,
            spo2: parse_number("spo2", &args[2])?,
            unit,
        })
    }

    /// Build a reading from `VITALS_TEMPERATURE`, `VITALS_PULSE_RATE` and `VITALS_SPO2`
    pub fn reading_from_lookup<L>(&self, lookup: L) -> Result<VitalsReading, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<f64, ConfigError> {
            let value = lookup(key).ok_or(ConfigError::Missing(key))?;
            parse_number(key, &value)
        };

        Ok(VitalsReading {
            temperature: required(ENV_TEMPERATURE)?,
            pulse_rate: required(ENV_PULSE_RATE)?,
            spo2: required(ENV_SPO2)?,
            unit: self.unit,
        })
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidNumber {
            name,
            value: value.to_string(),
        })
}
