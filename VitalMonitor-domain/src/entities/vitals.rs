use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::errors::VitalsError;
use crate::services::range_checker::is_within_range;

/// Lowest safe body temperature in Fahrenheit
pub const MIN_TEMPERATURE_IN_F: f64 = 95.0;
/// Highest safe body temperature in Fahrenheit
pub const MAX_TEMPERATURE_IN_F: f64 = 102.0;
/// Lowest safe pulse rate in beats per minute
pub const MIN_PULSE_RATE_PER_MIN: f64 = 60.0;
/// Highest safe pulse rate in beats per minute
pub const MAX_PULSE_RATE_PER_MIN: f64 = 100.0;
/// Lowest safe oxygen saturation percentage
pub const MIN_SPO2: f64 = 90.0;
/// Oxygen saturation cannot exceed 100%
pub const MAX_SPO2: f64 = 100.0;

/// Unit a temperature reading was taken in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    /// Degrees Celsius, converted before checking
    Celsius,

    /// Degrees Fahrenheit, the unit the safe interval is expressed in
    #[default]
    Fahrenheit,
}

impl TryFrom<char> for TemperatureUnit {
    type Error = VitalsError;

    fn try_from(unit: char) -> Result<Self, Self::Error> {
        match unit.to_ascii_uppercase() {
            'C' => Ok(TemperatureUnit::Celsius),
            'F' => Ok(TemperatureUnit::Fahrenheit),
            other => Err(VitalsError::InvalidUnit(other.to_string())),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = VitalsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(VitalsError::InvalidUnit(s.to_string())),
        }
    }
}

/// The vital signs the checker knows about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    Temperature,
    PulseRate,
    Spo2,
}

impl fmt::Display for VitalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VitalKind::Temperature => write!(f, "temperature"),
            VitalKind::PulseRate => write!(f, "pulse_rate"),
            VitalKind::Spo2 => write!(f, "spo2"),
        }
    }
}

/// Inclusive interval a vital sign is considered normal in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SafeInterval {
    /// Lower bound of the interval
    pub min: f64,

    /// Upper bound of the interval
    pub max: f64,
}

impl SafeInterval {
    /// Safe interval for a vital sign. Temperature is in Fahrenheit.
    pub fn for_kind(kind: VitalKind) -> Self {
        match kind {
            VitalKind::Temperature => SafeInterval {
                min: MIN_TEMPERATURE_IN_F,
                max: MAX_TEMPERATURE_IN_F,
            },
            VitalKind::PulseRate => SafeInterval {
                min: MIN_PULSE_RATE_PER_MIN,
                max: MAX_PULSE_RATE_PER_MIN,
            },
            VitalKind::Spo2 => SafeInterval {
                min: MIN_SPO2,
                max: MAX_SPO2,
            },
        }
    }

    /// Check if a value lies within the interval, bounds included
    pub fn contains(&self, value: f64) -> bool {
        is_within_range(value, self.min, self.max)
    }
}

/// Warning raised when a reading falls in or beyond the warning band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WarningMessage {
    ApproachingHypothermia,
    ApproachingHyperthermia,
    PulseRateTooLow,
    PulseRateTooHigh,
    ApproachingHypoxemia,
    /// Reading failed the final inclusive range check (NaN readings end up here)
    OutOfRange,
    /// SpO2 reading failed the final range check
    OxygenSaturationTooLow,
}

impl WarningMessage {
    /// Text handed to the notifier
    pub fn as_str(self) -> &'static str {
        match self {
            WarningMessage::ApproachingHypothermia => "Approaching hypothermia",
            WarningMessage::ApproachingHyperthermia => "Approaching hyperthermia",
            WarningMessage::PulseRateTooLow => "Pulse Rate is too low!",
            WarningMessage::PulseRateTooHigh => "Pulse Rate is too high!",
            WarningMessage::ApproachingHypoxemia => "Approaching hypoxemia",
            WarningMessage::OutOfRange => "Value is out of range!",
            WarningMessage::OxygenSaturationTooLow => "Oxygen Saturation is too low!",
        }
    }
}

impl fmt::Display for WarningMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One set of readings taken together
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VitalsReading {
    /// Body temperature, in `unit`
    pub temperature: f64,

    /// Pulse rate in beats per minute
    pub pulse_rate: f64,

    /// Oxygen saturation percentage
    pub spo2: f64,

    /// Unit of the temperature reading
    #[serde(default)]
    pub unit: TemperatureUnit,
}

/// Outcome of checking a full set of readings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalsReport {
    /// Whether the temperature check passed
    pub temperature_ok: bool,

    /// Whether the pulse rate check passed
    pub pulse_rate_ok: bool,

    /// Whether the oxygen saturation check passed
    pub spo2_ok: bool,

    /// Warnings raised, in the order the checks ran
    pub warnings: Vec<String>,

    /// When the readings were checked
    pub checked_at: DateTime<Utc>,
}

impl VitalsReport {
    /// True only when every vital passed
    pub fn all_ok(&self) -> bool {
        self.temperature_ok && self.pulse_rate_ok && self.spo2_ok
    }
}
