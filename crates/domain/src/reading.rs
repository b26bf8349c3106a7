//! Reading — one snapshot of the environmental sensor.
//!
//! Readings have no identity beyond arrival order. Each one fully replaces
//! the previously displayed values.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::unit::TemperatureUnit;

/// Standard sea-level pressure used for altitude estimation, in hPa.
pub const STANDARD_SEA_LEVEL_HPA: f64 = 1013.25;

/// A single sensor reading as carried by the `readings` stream event.
///
/// Both temperature units are always delivered; the client never converts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    #[serde(rename = "temperatureC")]
    pub temperature_c: f64,
    /// Temperature in degrees Fahrenheit.
    #[serde(rename = "temperatureF")]
    pub temperature_f: f64,
    /// Relative humidity, 0–100 % nominal.
    pub humidity: f64,
    /// Barometric pressure in hectopascals.
    pub pressure: f64,
    /// Estimated altitude in metres.
    pub altitude: f64,
}

impl Reading {
    /// Decode a reading from the JSON text of a `readings` event.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the payload is not a JSON object with
    /// all five numeric fields.
    pub fn decode(payload: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Derive a full reading from raw BME280-style measurements.
    ///
    /// Fahrenheit is `1.8·C + 32` and altitude uses the international
    /// barometric formula against `sea_level_hpa`.
    #[must_use]
    pub fn from_measurement(
        temperature_c: f64,
        humidity: f64,
        pressure_hpa: f64,
        sea_level_hpa: f64,
    ) -> Self {
        Self {
            temperature_c,
            temperature_f: celsius_to_fahrenheit(temperature_c),
            humidity,
            pressure: pressure_hpa,
            altitude: altitude_from_pressure(pressure_hpa, sea_level_hpa),
        }
    }

    /// The temperature expressed in `unit`.
    #[must_use]
    pub fn temperature(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.temperature_c,
            TemperatureUnit::Fahrenheit => self.temperature_f,
        }
    }
}

/// Convert degrees Celsius to degrees Fahrenheit.
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    1.8 * celsius + 32.0
}

/// Estimate altitude in metres from station pressure and sea-level pressure.
#[must_use]
pub fn altitude_from_pressure(pressure_hpa: f64, sea_level_hpa: f64) -> f64 {
    44330.0 * (1.0 - (pressure_hpa / sea_level_hpa).powf(0.1903))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_wire_field_names() {
        let payload = r#"{"temperatureC":21.456,"temperatureF":70.6208,"humidity":55.1,"pressure":1013.25,"altitude":120.0}"#;
        let reading = Reading::decode(payload).unwrap();
        assert!((reading.temperature_c - 21.456).abs() < f64::EPSILON);
        assert!((reading.temperature_f - 70.6208).abs() < f64::EPSILON);
        assert!((reading.humidity - 55.1).abs() < f64::EPSILON);
        assert!((reading.pressure - 1013.25).abs() < f64::EPSILON);
        assert!((reading.altitude - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_accept_integer_json_numbers() {
        let payload = r#"{"temperatureC":21,"temperatureF":70,"humidity":55,"pressure":1013,"altitude":0}"#;
        let reading = Reading::decode(payload).unwrap();
        assert!((reading.pressure - 1013.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_ignore_unknown_fields() {
        let payload = r#"{"temperatureC":1,"temperatureF":33.8,"humidity":2,"pressure":3,"altitude":4,"battery":99}"#;
        assert!(Reading::decode(payload).is_ok());
    }

    #[test]
    fn should_fail_decode_when_field_missing() {
        let payload = r#"{"temperatureC":21.4,"temperatureF":70.5,"humidity":55.1,"pressure":1013.2}"#;
        assert!(Reading::decode(payload).is_err());
    }

    #[test]
    fn should_fail_decode_when_field_not_numeric() {
        let payload = r#"{"temperatureC":"warm","temperatureF":70.5,"humidity":55.1,"pressure":1013.2,"altitude":1}"#;
        assert!(Reading::decode(payload).is_err());
    }

    #[test]
    fn should_fail_decode_when_payload_is_not_json() {
        assert!(Reading::decode("not json").is_err());
    }

    #[test]
    fn should_select_temperature_by_unit() {
        let reading = Reading::from_measurement(20.0, 40.0, 1000.0, STANDARD_SEA_LEVEL_HPA);
        assert!((reading.temperature(TemperatureUnit::Celsius) - 20.0).abs() < 1e-9);
        assert!((reading.temperature(TemperatureUnit::Fahrenheit) - 68.0).abs() < 1e-9);
    }

    #[test]
    fn should_report_zero_altitude_at_sea_level_pressure() {
        let altitude = altitude_from_pressure(STANDARD_SEA_LEVEL_HPA, STANDARD_SEA_LEVEL_HPA);
        assert!(altitude.abs() < 1e-9);
    }

    #[test]
    fn should_report_positive_altitude_below_sea_level_pressure() {
        let altitude = altitude_from_pressure(900.0, STANDARD_SEA_LEVEL_HPA);
        assert!(altitude > 900.0 && altitude < 1100.0);
    }

    #[test]
    fn should_serialize_with_wire_field_names() {
        let reading = Reading::from_measurement(0.0, 50.0, 1013.25, STANDARD_SEA_LEVEL_HPA);
        let json = serde_json::to_value(reading).unwrap();
        assert!(json.get("temperatureC").is_some());
        assert!(json.get("temperatureF").is_some());
        assert!(json.get("humidity").is_some());
        assert!(json.get("pressure").is_some());
        assert!(json.get("altitude").is_some());
    }
}
