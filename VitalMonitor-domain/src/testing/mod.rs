// Testing utilities and fixtures for the domain layer
// This module is only available when the "mock" feature is enabled

use crate::entities::vitals::{TemperatureUnit, VitalsReading};

pub use crate::services::notifier::CollectingNotifier;

/// Builder for vitals readings used in tests
///
/// Starts from a healthy adult reading; each `with_*` call moves one vital.
#[derive(Debug, Clone, Copy)]
pub struct ReadingBuilder {
    reading: VitalsReading,
}

impl Default for ReadingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingBuilder {
    /// Start from normal readings in Fahrenheit
    pub fn new() -> Self {
        Self {
            reading: normal_vitals(),
        }
    }

    /// Set the temperature in Fahrenheit
    pub fn with_temperature_f(mut self, value: f64) -> Self {
        self.reading.temperature = value;
        self.reading.unit = TemperatureUnit::Fahrenheit;
        self
    }

    /// Set the temperature in Celsius
    pub fn with_temperature_c(mut self, value: f64) -> Self {
        self.reading.temperature = value;
        self.reading.unit = TemperatureUnit::Celsius;
        self
    }

    /// Set the pulse rate
    pub fn with_pulse_rate(mut self, value: f64) -> Self {
        self.reading.pulse_rate = value;
        self
    }

    /// Set the oxygen saturation
    pub fn with_spo2(mut self, value: f64) -> Self {
        self.reading.spo2 = value;
        self
    }

    /// Finish building
    pub fn build(self) -> VitalsReading {
        self.reading
    }
}

/// A reading where every vital is comfortably inside its safe interval
pub fn normal_vitals() -> VitalsReading {
    VitalsReading {
        temperature: 98.4,
        pulse_rate: 72.0,
        spo2: 97.0,
        unit: TemperatureUnit::Fahrenheit,
    }
}

/// A reading where every vital fails
pub fn critical_vitals() -> VitalsReading {
    VitalsReading {
        temperature: 104.0,
        pulse_rate: 40.0,
        spo2: 80.0,
        unit: TemperatureUnit::Fahrenheit,
    }
}
