//! Reactive implementation of the telemetry view port.
//!
//! The controller writes into signals; components read them.

use leptos::prelude::*;
use sensordash_app::ports::TelemetryView;
use sensordash_domain::gauge::GaugeBoard;
use sensordash_domain::readout::Readout;
use sensordash_domain::status::{ConnectionStatus, StatusIndicator};
use sensordash_domain::unit::TemperatureUnit;

/// Gauges as last drawn, with the unit their temperature is expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeFrame {
    pub board: GaugeBoard,
    pub unit: TemperatureUnit,
}

/// Signals backing every widget of the dashboard.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub unit: RwSignal<TemperatureUnit>,
    pub status: RwSignal<StatusIndicator>,
    pub readout: RwSignal<Option<Readout>>,
    pub gauges: RwSignal<Option<GaugeFrame>>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            unit: RwSignal::new(TemperatureUnit::default()),
            status: RwSignal::new(ConnectionStatus::Offline.indicator()),
            readout: RwSignal::new(None),
            gauges: RwSignal::new(None),
        }
    }
}

impl TelemetryView for SignalView {
    fn show_unit(&mut self, unit: TemperatureUnit) {
        self.unit.set(unit);
    }

    fn show_status(&mut self, indicator: &StatusIndicator) {
        self.status.set(indicator.clone());
    }

    fn show_readout(&mut self, readout: &Readout) {
        self.readout.set(Some(readout.clone()));
    }

    fn show_gauges(&mut self, board: &GaugeBoard, unit: TemperatureUnit) {
        self.gauges.set(Some(GaugeFrame {
            board: board.clone(),
            unit,
        }));
    }
}
