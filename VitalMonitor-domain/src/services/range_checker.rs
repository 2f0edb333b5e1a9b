use chrono::Utc;
use tracing::{debug, warn};

use crate::entities::conversions::temperature_in_fahrenheit;
use crate::entities::vitals::{
    SafeInterval, TemperatureUnit, VitalKind, VitalsReading, VitalsReport, WarningMessage,
    MAX_PULSE_RATE_PER_MIN, MAX_TEMPERATURE_IN_F, MIN_SPO2,
};
use crate::services::errors::VitalsError;
use crate::services::notifier::{CollectingNotifier, WarningNotifier};

/// Default width of the early-warning band, as a percentage of the limit
pub const WARNING_TOLERANCE_PERCENT: f64 = 1.5;

/// Width of the warning band for a limit at the default tolerance
pub fn warning_threshold(limit: f64) -> f64 {
    limit * WARNING_TOLERANCE_PERCENT / 100.0
}

/// Check if a value is within `[min, max]`
pub fn is_within_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// Where a vital sign's warning band sits and what to say when it is hit
struct VitalBand {
    kind: VitalKind,
    interval: SafeInterval,
    threshold: f64,
    low: WarningMessage,
    /// `None` when the vital has no upper warning band
    high: Option<WarningMessage>,
    /// Raised when the reading fails the final inclusive range check
    out_of_range: WarningMessage,
}

/// Classifies readings against their safe intervals
///
/// A reading fails when it lies inside the warning band at the edge of its
/// safe interval or beyond it. Failing checks hand exactly one message to
/// the notifier and return `false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalRangeChecker {
    tolerance_percent: f64,
}

impl Default for VitalRangeChecker {
    fn default() -> Self {
        Self {
            tolerance_percent: WARNING_TOLERANCE_PERCENT,
        }
    }
}

impl VitalRangeChecker {
    /// Create a checker using the default 1.5% warning tolerance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a checker with a custom warning tolerance
    pub fn with_tolerance_percent(tolerance_percent: f64) -> Result<Self, VitalsError> {
        if !tolerance_percent.is_finite() || tolerance_percent < 0.0 {
            return Err(VitalsError::InvalidTolerance(tolerance_percent));
        }

        Ok(Self { tolerance_percent })
    }

    /// Warning tolerance in percent
    pub fn tolerance_percent(&self) -> f64 {
        self.tolerance_percent
    }

    /// Width of the warning band for a given limit
    pub fn warning_threshold(&self, limit: f64) -> f64 {
        limit * self.tolerance_percent / 100.0
    }

    /// Check a temperature reading, converting from Celsius first if needed
    pub fn check_temperature<N>(&self, value: f64, unit: TemperatureUnit, notifier: &N) -> bool
    where
        N: WarningNotifier + ?Sized,
    {
        let value = temperature_in_fahrenheit(value, unit);

        // The band is taken from the upper limit on both sides
        let band = VitalBand {
            kind: VitalKind::Temperature,
            interval: SafeInterval::for_kind(VitalKind::Temperature),
            threshold: self.warning_threshold(MAX_TEMPERATURE_IN_F),
            low: WarningMessage::ApproachingHypothermia,
            high: Some(WarningMessage::ApproachingHyperthermia),
            out_of_range: WarningMessage::OutOfRange,
        };

        self.check_vital(value, &band, notifier)
    }

    /// Check a pulse rate reading in beats per minute
    pub fn check_pulse_rate<N>(&self, value: f64, notifier: &N) -> bool
    where
        N: WarningNotifier + ?Sized,
    {
        let band = VitalBand {
            kind: VitalKind::PulseRate,
            interval: SafeInterval::for_kind(VitalKind::PulseRate),
            threshold: self.warning_threshold(MAX_PULSE_RATE_PER_MIN),
            low: WarningMessage::PulseRateTooLow,
            high: Some(WarningMessage::PulseRateTooHigh),
            out_of_range: WarningMessage::OutOfRange,
        };

        self.check_vital(value, &band, notifier)
    }

    /// Check an oxygen saturation reading in percent
    pub fn check_spo2<N>(&self, value: f64, notifier: &N) -> bool
    where
        N: WarningNotifier + ?Sized,
    {
        let band = VitalBand {
            kind: VitalKind::Spo2,
            interval: SafeInterval::for_kind(VitalKind::Spo2),
            threshold: self.warning_threshold(MIN_SPO2),
            low: WarningMessage::ApproachingHypoxemia,
            high: None,
            out_of_range: WarningMessage::OxygenSaturationTooLow,
        };

        self.check_vital(value, &band, notifier)
    }

    /// Run every check on a set of readings and combine the results
    ///
    /// All three checks always run so that each warning reaches the notifier.
    pub fn vitals_ok<N>(&self, reading: &VitalsReading, notifier: &N) -> bool
    where
        N: WarningNotifier + ?Sized,
    {
        let temperature_ok = self.check_temperature(reading.temperature, reading.unit, notifier);
        let pulse_rate_ok = self.check_pulse_rate(reading.pulse_rate, notifier);
        let spo2_ok = self.check_spo2(reading.spo2, notifier);

        temperature_ok && pulse_rate_ok && spo2_ok
    }

    /// Check a set of readings and collect the outcome into a report
    pub fn evaluate(&self, reading: &VitalsReading) -> VitalsReport {
        let notifier = CollectingNotifier::new();

        let temperature_ok = self.check_temperature(reading.temperature, reading.unit, &notifier);
        let pulse_rate_ok = self.check_pulse_rate(reading.pulse_rate, &notifier);
        let spo2_ok = self.check_spo2(reading.spo2, &notifier);

        VitalsReport {
            temperature_ok,
            pulse_rate_ok,
            spo2_ok,
            warnings: notifier.drain(),
            checked_at: Utc::now(),
        }
    }

    fn check_vital<N>(&self, value: f64, band: &VitalBand, notifier: &N) -> bool
    where
        N: WarningNotifier + ?Sized,
    {
        if value < band.interval.min + band.threshold {
            return self.raise(band.kind, value, band.low, notifier);
        }

        if let Some(high) = band.high {
            if value > band.interval.max - band.threshold {
                return self.raise(band.kind, value, high, notifier);
            }
        }

        // Only bounds with a warning band take part in the final range check
        let in_range = match band.high {
            Some(_) => band.interval.contains(value),
            None => value >= band.interval.min,
        };
        if !in_range {
            return self.raise(band.kind, value, band.out_of_range, notifier);
        }

        debug!(kind = %band.kind, value, "vital sign within safe range");
        true
    }

    fn raise<N>(&self, kind: VitalKind, value: f64, message: WarningMessage, notifier: &N) -> bool
    where
        N: WarningNotifier + ?Sized,
    {
        warn!(kind = %kind, value, warning = message.as_str(), "vital sign check failed");
        notifier.notify(message.as_str());
        false
    }
}

/// Check a temperature reading with the default checker
pub fn check_temperature<N>(value: f64, unit: TemperatureUnit, notifier: &N) -> bool
where
    N: WarningNotifier + ?Sized,
{
    VitalRangeChecker::default().check_temperature(value, unit, notifier)
}

/// Check a pulse rate reading with the default checker
pub fn check_pulse_rate<N>(value: f64, notifier: &N) -> bool
where
    N: WarningNotifier + ?Sized,
{
    VitalRangeChecker::default().check_pulse_rate(value, notifier)
}

/// Check an oxygen saturation reading with the default checker
pub fn check_spo2<N>(value: f64, notifier: &N) -> bool
where
    N: WarningNotifier + ?Sized,
{
    VitalRangeChecker::default().check_spo2(value, notifier)
}

/// Check a full set of readings with the default checker
pub fn vitals_ok<N>(reading: &VitalsReading, notifier: &N) -> bool
where
    N: WarningNotifier + ?Sized,
{
    VitalRangeChecker::default().vitals_ok(reading, notifier)
}
