//! Sensor port — the environmental sensor on the device.

use sensordash_domain::error::SensordashError;
use sensordash_domain::reading::Reading;

/// Something that can produce a fresh [`Reading`] on demand.
pub trait SensorSource {
    /// Take one measurement.
    ///
    /// # Errors
    ///
    /// Returns [`SensordashError::Device`] when the sensor cannot be read.
    fn sample(&self) -> Result<Reading, SensordashError>;
}

impl<T: SensorSource + ?Sized> SensorSource for std::sync::Arc<T> {
    fn sample(&self) -> Result<Reading, SensordashError> {
        (**self).sample()
    }
}
