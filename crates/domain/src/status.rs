//! Connection status of the live reading stream.
//!
//! Two states only: `Offline` (initial) and `Online(host)`. Transitions
//! happen on stream lifecycle events and nowhere else.

/// Advisory shown next to the host while online.
pub const REFRESH_ADVISORY: &str = "Data refreshes every second.";

/// Connection status shown by the status indicator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Offline,
    Online {
        /// Host address of the page the stream was opened from.
        host: String,
    },
}

impl ConnectionStatus {
    /// Whether the stream is currently considered connected.
    #[must_use]
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online { .. })
    }

    /// Render the indicator text and marker for this status.
    #[must_use]
    pub fn indicator(&self) -> StatusIndicator {
        match self {
            Self::Offline => StatusIndicator {
                text: "Offline".to_string(),
                online: false,
            },
            Self::Online { host } => StatusIndicator {
                text: format!("Online ({host}) - {REFRESH_ADVISORY}"),
                online: true,
            },
        }
    }
}

/// What the status element shows: its text and whether the `online`
/// marker class is applied. The two always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    pub text: String,
    pub online: bool,
}

impl StatusIndicator {
    /// CSS class list for the status element.
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.online {
            "sensor-status online"
        } else {
            "sensor-status"
        }
    }
}

/// Transport ready state of a server-push stream, as reported with errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Connecting,
    Open,
    Closed,
}

impl ReadyState {
    /// Map the numeric `EventSource.readyState` (0, 1, 2).
    ///
    /// Unknown codes are treated as closed.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Self::Connecting,
            1 => Self::Open,
            _ => Self::Closed,
        }
    }
}
