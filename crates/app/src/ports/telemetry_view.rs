//! Telemetry view port — where the dashboard controller writes its output.
//!
//! Implementations own the actual widgets (DOM nodes, reactive signals, a
//! terminal, a test recorder). The controller decides *what* to show and
//! calls these methods; it never touches widgets directly.

use sensordash_domain::gauge::GaugeBoard;
use sensordash_domain::readout::Readout;
use sensordash_domain::status::StatusIndicator;
use sensordash_domain::unit::TemperatureUnit;

/// Rendering boundary of the live dashboard.
pub trait TelemetryView {
    /// Show the group for `unit`, hide the other, and sync the selector.
    fn show_unit(&mut self, unit: TemperatureUnit);

    /// Update the status element text and `online` marker.
    fn show_status(&mut self, indicator: &StatusIndicator);

    /// Write the formatted values into the display fields.
    fn show_readout(&mut self, readout: &Readout);

    /// Redraw the gauges and their series.
    fn show_gauges(&mut self, board: &GaugeBoard, unit: TemperatureUnit);
}
