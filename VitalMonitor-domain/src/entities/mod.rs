// Domain entities and value objects
pub mod conversions;
pub mod vitals;

// Re-export common types for easier imports
pub use vitals::{
    SafeInterval, TemperatureUnit, VitalKind, VitalsReading, VitalsReport, WarningMessage,
};
