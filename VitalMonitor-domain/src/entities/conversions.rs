use crate::entities::vitals::TemperatureUnit;

/// Convert a Celsius temperature to Fahrenheit
pub fn to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0 / 5.0) + 32.0
}

/// Normalize a temperature reading to Fahrenheit
///
/// The safe temperature interval is expressed in Fahrenheit, so every
/// reading passes through here before it is compared.
pub fn temperature_in_fahrenheit(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => to_fahrenheit(value),
        TemperatureUnit::Fahrenheit => value,
    }
}
