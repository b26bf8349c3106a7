//! Virtual WiFi radio — a fixed scan list and an instant station link.

use std::sync::Mutex;

use sensordash_app::ports::{NetworkScanner, WifiProvisioner};
use sensordash_domain::error::SensordashError;
use sensordash_domain::network::{Encryption, Network};
use sensordash_domain::provisioning::ConnectRequest;

/// A simulated radio.
///
/// Scans return the configured list. A connect attempt succeeds when the
/// SSID is in that list; otherwise the radio stays in access-point mode.
pub struct VirtualRadio {
    networks: Vec<Network>,
    station: Mutex<Option<ConnectRequest>>,
}

impl Default for VirtualRadio {
    fn default() -> Self {
        Self::new(vec![
            Network::new("sensordash-lab", -42).with_encryption(Encryption::Encrypted),
            Network::new("guest", -67).with_encryption(Encryption::Open),
            Network::new("neighbour-5G", -81).with_encryption(Encryption::Encrypted),
        ])
    }
}

impl VirtualRadio {
    #[must_use]
    pub fn new(networks: Vec<Network>) -> Self {
        Self {
            networks,
            station: Mutex::new(None),
        }
    }

    /// SSID the station is joined to, if any.
    #[must_use]
    pub fn connected_ssid(&self) -> Option<String> {
        self.lock_station().as_ref().map(|req| req.ssid.clone())
    }

    /// Drop the saved credentials and fall back to access-point mode.
    pub fn reset(&self) {
        *self.lock_station() = None;
    }

    fn lock_station(&self) -> std::sync::MutexGuard<'_, Option<ConnectRequest>> {
        self.station
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl NetworkScanner for VirtualRadio {
    async fn scan(&self) -> Result<Vec<Network>, SensordashError> {
        Ok(self.networks.clone())
    }
}

impl WifiProvisioner for VirtualRadio {
    async fn begin_connect(&self, request: ConnectRequest) -> Result<(), SensordashError> {
        if self.networks.iter().any(|n| n.ssid == request.ssid) {
            tracing::info!(ssid = %request.ssid, "virtual station connected");
            *self.lock_station() = Some(request);
        } else {
            tracing::warn!(ssid = %request.ssid, "virtual network not in range, staying in AP mode");
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.lock_station().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_return_configured_networks() {
        let radio = VirtualRadio::new(vec![Network::new("A", -40)]);
        assert_eq!(radio.scan().await.unwrap(), vec![Network::new("A", -40)]);
    }

    #[tokio::test]
    async fn should_connect_to_listed_network() {
        let radio = VirtualRadio::default();
        assert!(!radio.is_connected());
        radio
            .begin_connect(ConnectRequest::new("guest", ""))
            .await
            .unwrap();
        assert!(radio.is_connected());
        assert_eq!(radio.connected_ssid().as_deref(), Some("guest"));
    }

    #[tokio::test]
    async fn should_stay_disconnected_for_unknown_network() {
        let radio = VirtualRadio::default();
        radio
            .begin_connect(ConnectRequest::new("nowhere", "pw"))
            .await
            .unwrap();
        assert!(!radio.is_connected());
    }

    #[tokio::test]
    async fn should_disconnect_on_reset() {
        let radio = VirtualRadio::default();
        radio
            .begin_connect(ConnectRequest::new("guest", ""))
            .await
            .unwrap();
        radio.reset();
        assert!(radio.connected_ssid().is_none());
    }
}
