//! Virtual BME280 — a deterministic, slowly drifting environmental sensor.

use std::sync::atomic::{AtomicU64, Ordering};

use sensordash_app::ports::SensorSource;
use sensordash_domain::error::SensordashError;
use sensordash_domain::reading::{Reading, STANDARD_SEA_LEVEL_HPA};

const BASE_TEMPERATURE_C: f64 = 21.5;
const BASE_HUMIDITY: f64 = 45.0;
const BASE_PRESSURE_HPA: f64 = 1000.0;

/// A simulated BME280.
///
/// Each sample advances an internal tick; values follow slow sine waves
/// around indoor baselines so the gauges have something to show.
pub struct VirtualBme280 {
    sea_level_hpa: f64,
    tick: AtomicU64,
}

impl Default for VirtualBme280 {
    fn default() -> Self {
        Self::new(STANDARD_SEA_LEVEL_HPA)
    }
}

impl VirtualBme280 {
    /// Create a sensor estimating altitude against `sea_level_hpa`.
    #[must_use]
    pub fn new(sea_level_hpa: f64) -> Self {
        Self {
            sea_level_hpa,
            tick: AtomicU64::new(0),
        }
    }

    /// Number of samples taken so far.
    #[must_use]
    pub fn samples_taken(&self) -> u64 {
        self.tick.load(Ordering::Relaxed)
    }
}

impl SensorSource for VirtualBme280 {
    #[allow(clippy::cast_precision_loss)]
    fn sample(&self) -> Result<Reading, SensordashError> {
        let t = self.tick.fetch_add(1, Ordering::Relaxed) as f64;

        let temperature_c = BASE_TEMPERATURE_C + 1.5 * (t / 60.0).sin();
        let humidity = (BASE_HUMIDITY + 5.0 * (t / 90.0).cos()).clamp(0.0, 100.0);
        let pressure = BASE_PRESSURE_HPA + 2.0 * (t / 300.0).sin();

        Ok(Reading::from_measurement(
            temperature_c,
            humidity,
            pressure,
            self.sea_level_hpa,
        ))
    }
}
