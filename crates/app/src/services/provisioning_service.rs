//! Provisioning service — the device side of the captive portal.

use sensordash_domain::error::SensordashError;
use sensordash_domain::network::Network;
use sensordash_domain::provisioning::{CaptivePortalStatus, ConnectRequest, ConnectResponse};

use crate::ports::{NetworkScanner, WifiProvisioner};

/// Message returned once credentials are accepted for a connection attempt.
pub const CONNECTING_MESSAGE: &str = "Connecting...";

/// Application service behind `/networks`, `/connect` and the RFC 8908 API.
pub struct ProvisioningService<S, W> {
    scanner: S,
    provisioner: W,
    ap_address: String,
}

impl<S: NetworkScanner, W: WifiProvisioner> ProvisioningService<S, W> {
    /// Create a service for an access point reachable at `ap_address`.
    pub fn new(scanner: S, provisioner: W, ap_address: impl Into<String>) -> Self {
        Self {
            scanner,
            provisioner,
            ap_address: ap_address.into(),
        }
    }

    /// Scan for visible networks.
    ///
    /// # Errors
    ///
    /// Returns the scanner's device error.
    pub async fn scan(&self) -> Result<Vec<Network>, SensordashError> {
        let networks = self.scanner.scan().await?;
        tracing::debug!(count = networks.len(), "network scan complete");
        Ok(networks)
    }

    /// Validate credentials and start joining the network.
    ///
    /// The answer is sent as soon as the attempt is queued.
    ///
    /// # Errors
    ///
    /// Returns [`SensordashError::Validation`] for bad credentials or the
    /// provisioner's device error.
    pub async fn connect(&self, request: ConnectRequest) -> Result<ConnectResponse, SensordashError> {
        request.validate()?;
        tracing::info!(ssid = %request.ssid, "attempting connection");
        self.provisioner.begin_connect(request).await?;
        Ok(ConnectResponse::accepted(CONNECTING_MESSAGE))
    }

    /// Current RFC 8908 captive-portal status.
    pub fn captive_status(&self) -> CaptivePortalStatus {
        CaptivePortalStatus::new(self.provisioner.is_connected(), &self.ap_address)
    }
}
