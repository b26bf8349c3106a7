//! Text readout — the five formatted display fields for a reading.

use crate::reading::Reading;
use crate::unit::TemperatureUnit;

/// Format a measurement for display with two decimals.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

/// Formatted display text for one reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    /// Temperature in the unit selected when the reading arrived.
    pub temperature: String,
    pub temperature_c: String,
    pub temperature_f: String,
    pub humidity: String,
    pub pressure: String,
    pub altitude: String,
}

impl Readout {
    /// Render `reading` for display while `unit` is selected.
    #[must_use]
    pub fn render(reading: &Reading, unit: TemperatureUnit) -> Self {
        Self {
            temperature: format_value(reading.temperature(unit)),
            temperature_c: format_value(reading.temperature_c),
            temperature_f: format_value(reading.temperature_f),
            humidity: format_value(reading.humidity),
            pressure: format_value(reading.pressure),
            altitude: format_value(reading.altitude),
        }
    }

    /// The temperature text shown in the group for `unit`.
    #[must_use]
    pub fn temperature_in(&self, unit: TemperatureUnit) -> &str {
        match unit {
            TemperatureUnit::Celsius => &self.temperature_c,
            TemperatureUnit::Fahrenheit => &self.temperature_f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reading {
        Reading {
            temperature_c: 21.456,
            temperature_f: 70.6208,
            humidity: 55.1,
            pressure: 1013.25,
            altitude: 120.0,
        }
    }

    #[test]
    fn should_format_with_two_decimals() {
        assert_eq!(format_value(55.1), "55.10");
        assert_eq!(format_value(120.0), "120.00");
        assert_eq!(format_value(-3.0), "-3.00");
    }

    #[test]
    fn should_render_celsius_readout() {
        let readout = Readout::render(&sample(), TemperatureUnit::Celsius);
        assert_eq!(readout.temperature, "21.46");
        assert_eq!(readout.humidity, "55.10");
        assert_eq!(readout.pressure, "1013.25");
        assert_eq!(readout.altitude, "120.00");
    }

    #[test]
    fn should_render_fahrenheit_temperature_when_fahrenheit_selected() {
        let readout = Readout::render(&sample(), TemperatureUnit::Fahrenheit);
        assert_eq!(readout.temperature, "70.62");
        assert_eq!(readout.temperature_in(TemperatureUnit::Fahrenheit), "70.62");
    }

    #[test]
    fn should_always_fill_both_unit_fields() {
        let readout = Readout::render(&sample(), TemperatureUnit::Celsius);
        assert_eq!(readout.temperature_c, "21.46");
        assert_eq!(readout.temperature_f, "70.62");
    }
}
