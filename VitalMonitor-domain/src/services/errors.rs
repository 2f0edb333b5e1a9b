use thiserror::Error;

/// Errors raised while setting up a vitals check
///
/// The checks themselves never fail; a failing reading is reported through
/// the boolean result and the warning notifier.
#[derive(Debug, Error, PartialEq)]
pub enum VitalsError {
    /// Temperature unit was not Celsius or Fahrenheit
    #[error("Invalid temperature unit: {0}")]
    InvalidUnit(String),

    /// Warning tolerance must be a finite, non-negative percentage
    #[error("Invalid warning tolerance: {0}%")]
    InvalidTolerance(f64),
}
