//! Portal service — the WiFi captive-portal page flow.
//!
//! Loads the visible networks (strongest first) and turns the connect form
//! into a request, classifying every outcome into a user-facing message.

use std::time::Duration;

use sensordash_domain::error::ValidationError;
use sensordash_domain::network::{Network, sort_strongest_first};
use sensordash_domain::provisioning::ConnectRequest;

use crate::ports::PortalClient;

/// Delay between a successful connect and navigating away.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);
/// Where to navigate after a successful connect.
pub const REDIRECT_TARGET: &str = "/";
/// Interval between automatic network list refreshes.
pub const AUTO_REFRESH_INTERVAL: Duration = Duration::from_secs(30);
/// Shown when a scan returned nothing.
pub const NO_NETWORKS_TEXT: &str = "No networks found";
/// Shown when the network list could not be loaded.
pub const LOAD_ERROR_TEXT: &str = "Error loading networks";

/// Portal request failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortalError {
    /// The request itself failed (network, HTTP status, bad body).
    #[error("Error connecting: {0}")]
    RequestFailed(String),
    /// The device answered but refused the credentials.
    #[error("Connection failed: {0}")]
    ConnectionRejected(String),
}

/// Severity of an inline portal message; doubles as its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

impl MessageKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// An inline message shown under the connect form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl PortalMessage {
    fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl From<&PortalError> for PortalMessage {
    fn from(err: &PortalError) -> Self {
        Self::new(MessageKind::Error, err.to_string())
    }
}

/// Use-cases of the portal page.
pub struct PortalService<C> {
    client: C,
}

impl<C: PortalClient> PortalService<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetch the visible networks, strongest first.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::RequestFailed`] when the list cannot be fetched.
    pub async fn load_networks(&self) -> Result<Vec<Network>, PortalError> {
        let mut networks = self.client.fetch_networks().await.map_err(|err| {
            tracing::warn!(%err, "failed to load networks");
            PortalError::RequestFailed(err.message)
        })?;
        sort_strongest_first(&mut networks);
        Ok(networks)
    }

    /// Validate the form fields into a request.
    ///
    /// # Errors
    ///
    /// Returns the error message to show instead of sending anything.
    pub fn prepare(&self, ssid: &str, password: &str) -> Result<ConnectRequest, PortalMessage> {
        let request = ConnectRequest::new(ssid, password);
        request.validate().map_err(|err| match err {
            ValidationError::EmptySsid => {
                PortalMessage::new(MessageKind::Error, "Please enter a network name")
            }
            other => PortalMessage::new(MessageKind::Error, other.to_string()),
        })?;
        Ok(request)
    }

    /// Message shown while a request is in flight.
    #[must_use]
    pub fn connecting_message(request: &ConnectRequest) -> PortalMessage {
        PortalMessage::new(MessageKind::Info, format!("Connecting to {}...", request.ssid))
    }

    /// Send the credentials to the device.
    ///
    /// On success returns the message to show before redirecting after
    /// [`REDIRECT_DELAY`].
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::RequestFailed`] when no answer was obtained and
    /// [`PortalError::ConnectionRejected`] when the device refused.
    pub async fn submit(&self, request: &ConnectRequest) -> Result<PortalMessage, PortalError> {
        let response = self.client.connect(request).await.map_err(|err| {
            tracing::warn!(%err, ssid = %request.ssid, "connect request failed");
            PortalError::RequestFailed(err.message)
        })?;

        if response.success {
            tracing::info!(ssid = %request.ssid, "device accepted credentials");
            Ok(PortalMessage::new(
                MessageKind::Success,
                "Connected successfully! Redirecting...",
            ))
        } else {
            let reason = response
                .message
                .unwrap_or_else(|| "Unknown error".to_string());
            Err(PortalError::ConnectionRejected(reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::TransportError;
    use sensordash_domain::provisioning::ConnectResponse;
    use std::cell::RefCell;

    #[derive(Default)]
    struct StubClient {
        networks: Option<Vec<Network>>,
        response: Option<ConnectResponse>,
        sent: RefCell<Vec<ConnectRequest>>,
    }

    impl PortalClient for StubClient {
        async fn fetch_networks(&self) -> Result<Vec<Network>, TransportError> {
            self.networks
                .clone()
                .ok_or_else(|| TransportError::new("Failed to fetch networks"))
        }

        async fn connect(&self, request: &ConnectRequest) -> Result<ConnectResponse, TransportError> {
            self.sent.borrow_mut().push(request.clone());
            self.response
                .clone()
                .ok_or_else(|| TransportError::new("Failed to fetch"))
        }
    }

    fn service(client: StubClient) -> PortalService<StubClient> {
        PortalService::new(client)
    }

    #[tokio::test]
    async fn should_list_networks_strongest_first() {
        let svc = service(StubClient {
            networks: Some(vec![Network::new("B", -80), Network::new("A", -40)]),
            ..StubClient::default()
        });
        let networks = svc.load_networks().await.unwrap();
        assert_eq!(networks[0].ssid, "A");
        assert_eq!(networks[1].ssid, "B");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_scan_empty() {
        let svc = service(StubClient {
            networks: Some(vec![]),
            ..StubClient::default()
        });
        assert!(svc.load_networks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_report_request_failed_when_networks_unreachable() {
        let svc = service(StubClient::default());
        let err = svc.load_networks().await.unwrap_err();
        assert!(matches!(err, PortalError::RequestFailed(_)));
    }

    #[test]
    fn should_reject_blank_ssid_without_request() {
        let svc = service(StubClient::default());
        let msg = svc.prepare("   ", "secret").unwrap_err();
        assert_eq!(msg.kind, MessageKind::Error);
        assert_eq!(msg.text, "Please enter a network name");
        assert!(svc.client.sent.borrow().is_empty());
    }

    #[test]
    fn should_trim_ssid_when_preparing() {
        let svc = service(StubClient::default());
        let request = svc.prepare(" home ", "pw").unwrap();
        assert_eq!(request.ssid, "home");
        let msg = PortalService::<StubClient>::connecting_message(&request);
        assert_eq!(msg.kind, MessageKind::Info);
        assert_eq!(msg.text, "Connecting to home...");
    }

    #[tokio::test]
    async fn should_report_success_when_device_accepts() {
        let svc = service(StubClient {
            response: Some(ConnectResponse::accepted("Connecting...")),
            ..StubClient::default()
        });
        let request = svc.prepare("home", "pw").unwrap();
        let msg = svc.submit(&request).await.unwrap();
        assert_eq!(msg.kind, MessageKind::Success);
        assert_eq!(msg.text, "Connected successfully! Redirecting...");
        assert_eq!(svc.client.sent.borrow()[0].password, "pw");
    }

    #[tokio::test]
    async fn should_report_rejection_with_server_message() {
        let svc = service(StubClient {
            response: Some(ConnectResponse::rejected("SSID required")),
            ..StubClient::default()
        });
        let request = svc.prepare("home", "").unwrap();
        let err = svc.submit(&request).await.unwrap_err();
        assert_eq!(err, PortalError::ConnectionRejected("SSID required".to_string()));
        assert_eq!(
            PortalMessage::from(&err).text,
            "Connection failed: SSID required"
        );
    }

    #[tokio::test]
    async fn should_report_unknown_error_when_rejection_has_no_message() {
        let svc = service(StubClient {
            response: Some(ConnectResponse {
                success: false,
                message: None,
            }),
            ..StubClient::default()
        });
        let request = svc.prepare("home", "").unwrap();
        let err = svc.submit(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "Connection failed: Unknown error");
    }

    #[tokio::test]
    async fn should_report_request_failed_when_transport_fails() {
        let svc = service(StubClient::default());
        let request = svc.prepare("home", "").unwrap();
        let err = svc.submit(&request).await.unwrap_err();
        let msg = PortalMessage::from(&err);
        assert_eq!(msg.kind, MessageKind::Error);
        assert_eq!(msg.text, "Error connecting: Failed to fetch");
    }
}
