//! Gauge widgets — one per metric, each with a fixed display range and a
//! bounded history of the values it has shown.

use crate::reading::Reading;
use crate::unit::TemperatureUnit;
use crate::window::{SeriesPoint, SlidingWindow};

/// Default number of points kept in each gauge history.
pub const DEFAULT_WINDOW_SIZE: usize = 60;

/// The four metrics shown as gauges, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    Humidity,
    Pressure,
    Altitude,
}

/// All gauge metrics in display order.
pub const METRICS: [Metric; 4] = [
    Metric::Temperature,
    Metric::Humidity,
    Metric::Pressure,
    Metric::Altitude,
];

/// Visual shape of a gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeStyle {
    Linear,
    Circular,
}

/// Static description of a gauge: range, style and label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeSpec {
    pub metric: Metric,
    pub style: GaugeStyle,
    pub min: f64,
    pub max: f64,
}

impl Metric {
    /// Fixed gauge configuration for this metric.
    #[must_use]
    pub fn spec(self) -> GaugeSpec {
        let (style, min, max) = match self {
            Self::Temperature => (GaugeStyle::Linear, 0.0, 50.0),
            Self::Humidity => (GaugeStyle::Circular, 0.0, 100.0),
            Self::Pressure => (GaugeStyle::Circular, 900.0, 1100.0),
            Self::Altitude => (GaugeStyle::Linear, 0.0, 4000.0),
        };
        GaugeSpec {
            metric: self,
            style,
            min,
            max,
        }
    }

    /// Identifier of the container element hosting this gauge.
    #[must_use]
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Temperature => "gauge-temperature",
            Self::Humidity => "gauge-humidity",
            Self::Pressure => "gauge-pressure",
            Self::Altitude => "gauge-altitude",
        }
    }

    /// Gauge title; the temperature title follows the selected unit.
    #[must_use]
    pub fn label(self, unit: TemperatureUnit) -> String {
        match self {
            Self::Temperature => format!("Temperature ({})", unit.symbol()),
            Self::Humidity => "Humidity (%)".to_string(),
            Self::Pressure => "Pressure (hPa)".to_string(),
            Self::Altitude => "Altitude (m)".to_string(),
        }
    }

    /// The value of this metric in `reading`.
    #[must_use]
    pub fn value_of(self, reading: &Reading, unit: TemperatureUnit) -> f64 {
        match self {
            Self::Temperature => reading.temperature(unit),
            Self::Humidity => reading.humidity,
            Self::Pressure => reading.pressure,
            Self::Altitude => reading.altitude,
        }
    }
}

impl GaugeSpec {
    /// Position of `value` within the range as a fraction clamped to `0..=1`.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// A constructed gauge: the current value plus its recent history.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeWidget {
    pub spec: GaugeSpec,
    value: f64,
    history: SlidingWindow<SeriesPoint>,
}

impl GaugeWidget {
    /// A fresh gauge showing zero with an empty history.
    #[must_use]
    pub fn new(spec: GaugeSpec, window_size: usize) -> Self {
        Self {
            spec,
            value: 0.0,
            history: SlidingWindow::new(window_size),
        }
    }

    /// Show `y` and append `(x, y)` to the history.
    pub fn push(&mut self, x: u64, y: f64) {
        self.value = y;
        self.history.push(SeriesPoint { x, y });
    }

    /// The value currently displayed.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn history(&self) -> &SlidingWindow<SeriesPoint> {
        &self.history
    }
}

/// The four gauges of the chart dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeBoard {
    gauges: [GaugeWidget; 4],
}

impl GaugeBoard {
    /// Construct all four gauges, each at zero.
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        Self {
            gauges: METRICS.map(|metric| GaugeWidget::new(metric.spec(), window_size)),
        }
    }

    /// Append one point per gauge at sample index `x`.
    pub fn push_reading(&mut self, x: u64, reading: &Reading, unit: TemperatureUnit) {
        for gauge in &mut self.gauges {
            let y = gauge.spec.metric.value_of(reading, unit);
            gauge.push(x, y);
        }
    }

    /// The gauge for `metric`.
    #[must_use]
    pub fn gauge(&self, metric: Metric) -> &GaugeWidget {
        &self.gauges[metric as usize]
    }

    /// Iterate gauges in display order.
    pub fn iter(&self) -> impl Iterator<Item = &GaugeWidget> {
        self.gauges.iter()
    }
}
