// Vital Monitor Domain
// This crate contains the vital sign range checks for the Vital Monitor application

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;

pub use entities::{TemperatureUnit, VitalsReading, VitalsReport, WarningMessage};
pub use services::{VitalRangeChecker, VitalsError, WarningNotifier};
