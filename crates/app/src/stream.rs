//! Server-push stream events — the driving port of the dashboard.
//!
//! A transport adapter (browser `EventSource`, test harness) calls exactly
//! one method per delivered event, in arrival order, each to completion
//! before the next.

use sensordash_domain::error::DecodeError;
use sensordash_domain::status::ReadyState;

/// How a stream `error` event was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFault {
    /// Reported while the stream is still open; ignored.
    Transient,
    /// Reported while the stream is not open; surfaced as offline.
    ConnectionLost,
}

/// One handler method per named stream event.
pub trait StreamEventHandler {
    /// `open` — the stream connected.
    fn on_open(&mut self);

    /// `error` — the transport reported a problem while in `ready_state`.
    fn on_error(&mut self, ready_state: ReadyState) -> StreamFault;

    /// `readings` — a new reading arrived as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the payload is not a valid reading; the
    /// displayed values are left untouched.
    fn on_readings(&mut self, payload: &str) -> Result<(), DecodeError>;
}
