//! Display state — the UI state kept for the lifetime of a dashboard page.
//!
//! The transitions here are pure; rendering and persistence happen in the
//! application layer.

use crate::status::{ConnectionStatus, ReadyState};
use crate::unit::TemperatureUnit;

/// Page-lifetime UI state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayState {
    /// Selected temperature unit.
    pub unit: TemperatureUnit,
    /// Stream connection status.
    pub status: ConnectionStatus,
    /// Number of readings plotted so far; x-coordinate of the latest point.
    pub sample_index: u64,
}

impl DisplayState {
    /// Fresh state: offline, no samples, with the given unit.
    #[must_use]
    pub fn new(unit: TemperatureUnit) -> Self {
        Self {
            unit,
            status: ConnectionStatus::Offline,
            sample_index: 0,
        }
    }

    /// Offline → Online on stream open.
    pub fn stream_opened(&mut self, host: &str) {
        self.status = ConnectionStatus::Online {
            host: host.to_string(),
        };
    }

    /// Online → Offline when the stream reports an error while not open.
    ///
    /// Returns `true` when the status went (or stayed) offline, `false`
    /// when the error was transient and ignored.
    pub fn stream_errored(&mut self, ready_state: ReadyState) -> bool {
        if ready_state == ReadyState::Open {
            return false;
        }
        self.status = ConnectionStatus::Offline;
        true
    }

    /// Advance the sample index and return the new x-coordinate.
    pub fn next_sample(&mut self) -> u64 {
        self.sample_index += 1;
        self.sample_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_go_online_on_open() {
        let mut state = DisplayState::default();
        state.stream_opened("sensor.local");
        assert_eq!(
            state.status,
            ConnectionStatus::Online {
                host: "sensor.local".to_string()
            }
        );
    }

    #[test]
    fn should_go_offline_when_error_reported_while_closed() {
        let mut state = DisplayState::default();
        state.stream_opened("sensor.local");
        assert!(state.stream_errored(ReadyState::Closed));
        assert_eq!(state.status, ConnectionStatus::Offline);
    }

    #[test]
    fn should_go_offline_when_error_reported_while_connecting() {
        let mut state = DisplayState::default();
        state.stream_opened("sensor.local");
        assert!(state.stream_errored(ReadyState::Connecting));
        assert!(!state.status.is_online());
    }

    #[test]
    fn should_ignore_error_while_open() {
        let mut state = DisplayState::default();
        state.stream_opened("sensor.local");
        assert!(!state.stream_errored(ReadyState::Open));
        assert!(state.status.is_online());
    }

    #[test]
    fn should_count_samples_from_one() {
        let mut state = DisplayState::new(TemperatureUnit::Fahrenheit);
        assert_eq!(state.next_sample(), 1);
        assert_eq!(state.next_sample(), 2);
        assert_eq!(state.sample_index, 2);
    }
}
