pub mod errors;
pub mod notifier;
pub mod range_checker;

// Domain services
// This module contains the vital sign checks and the notifier seam they report through.

// Re-export service types and the default-checker functions
pub use errors::VitalsError;
pub use notifier::{CollectingNotifier, WarningNotifier};
pub use range_checker::{
    check_pulse_rate, check_spo2, check_temperature, is_within_range, vitals_ok,
    warning_threshold, VitalRangeChecker, WARNING_TOLERANCE_PERCENT,
};
