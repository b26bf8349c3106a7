//! Telemetry controller — bridges the reading stream to the dashboard view.
//!
//! Owns the page's [`DisplayState`] and, in the gauge variant, the
//! [`GaugeBoard`]. All side effects go through the [`PreferenceStore`] and
//! [`TelemetryView`] ports.

use sensordash_domain::display::DisplayState;
use sensordash_domain::error::DecodeError;
use sensordash_domain::gauge::GaugeBoard;
use sensordash_domain::reading::Reading;
use sensordash_domain::readout::Readout;
use sensordash_domain::status::{ConnectionStatus, ReadyState};
use sensordash_domain::unit::{TemperatureUnit, UNIT_PREFERENCE_KEY};

use crate::ports::{PreferenceStore, TelemetryView};
use crate::stream::{StreamEventHandler, StreamFault};

/// Which dashboard page the controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardVariant {
    /// Plain text readout.
    Readout,
    /// Readout plus four gauges with a bounded history each.
    Gauges {
        /// Points kept per gauge history.
        window_size: usize,
    },
}

/// Live dashboard controller for one page.
pub struct TelemetryController<P, V> {
    preferences: P,
    view: V,
    host: String,
    variant: DashboardVariant,
    state: DisplayState,
    gauges: Option<GaugeBoard>,
}

impl<P: PreferenceStore, V: TelemetryView> TelemetryController<P, V> {
    /// Create a controller for a page served from `host`.
    ///
    /// Nothing is rendered until [`initialize`](Self::initialize) is called.
    pub fn new(preferences: P, view: V, host: impl Into<String>, variant: DashboardVariant) -> Self {
        Self {
            preferences,
            view,
            host: host.into(),
            variant,
            state: DisplayState::default(),
            gauges: None,
        }
    }

    /// Restore the unit preference and render the offline indicator.
    pub fn initialize(&mut self) {
        let stored = self.preferences.get(UNIT_PREFERENCE_KEY);
        self.state.unit = TemperatureUnit::from_stored(stored.as_deref());
        self.view.show_unit(self.state.unit);

        self.state.status = ConnectionStatus::Offline;
        self.view.show_status(&self.state.status.indicator());

        tracing::debug!(unit = %self.state.unit, "dashboard initialized");
    }

    /// The user picked a different unit.
    ///
    /// Values already on screen are not recomputed: both units are always
    /// delivered with each reading.
    pub fn on_unit_changed(&mut self, unit: TemperatureUnit) {
        self.state.unit = unit;
        self.view.show_unit(unit);
        if let Err(err) = self.preferences.set(UNIT_PREFERENCE_KEY, unit.code()) {
            tracing::warn!(%err, "unit preference not persisted");
        }
    }

    /// Current UI state.
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// The gauge board, once constructed.
    pub fn gauges(&self) -> Option<&GaugeBoard> {
        self.gauges.as_ref()
    }

    /// The view this controller renders into.
    pub fn view(&self) -> &V {
        &self.view
    }

    fn apply_reading(&mut self, reading: &Reading) {
        let unit = self.state.unit;
        self.view.show_readout(&Readout::render(reading, unit));

        if let DashboardVariant::Gauges { .. } = self.variant {
            let x = self.state.next_sample();
            match self.gauges.as_mut() {
                Some(board) => {
                    board.push_reading(x, reading, unit);
                    self.view.show_gauges(board, unit);
                }
                None => tracing::debug!(sample_index = x, "gauges not built yet, skipping append"),
            }
        }
    }
}

impl<P: PreferenceStore, V: TelemetryView> StreamEventHandler for TelemetryController<P, V> {
    fn on_open(&mut self) {
        self.state.stream_opened(&self.host);
        self.view.show_status(&self.state.status.indicator());

        if let DashboardVariant::Gauges { window_size } = self.variant {
            if self.gauges.is_none() {
                let board = GaugeBoard::new(window_size);
                self.view.show_gauges(&board, self.state.unit);
                self.gauges = Some(board);
            } else {
                tracing::debug!("stream reopened, keeping existing gauges");
            }
        }

        tracing::info!(host = %self.host, "reading stream opened");
    }

    fn on_error(&mut self, ready_state: ReadyState) -> StreamFault {
        if self.state.stream_errored(ready_state) {
            self.view.show_status(&self.state.status.indicator());
            tracing::warn!(?ready_state, "reading stream lost");
            StreamFault::ConnectionLost
        } else {
            tracing::debug!("transient stream error while open");
            StreamFault::Transient
        }
    }

    fn on_readings(&mut self, payload: &str) -> Result<(), DecodeError> {
        let reading = Reading::decode(payload)?;
        self.apply_reading(&reading);
        Ok(())
    }
}
