//! Portal client port — the HTTP calls made by the WiFi portal page.
//!
//! Futures are not required to be `Send`: in the browser they are driven
//! by the single-threaded JS event loop.

use std::future::Future;

use sensordash_domain::network::Network;
use sensordash_domain::provisioning::{ConnectRequest, ConnectResponse};

/// A request that never produced a usable response (network failure,
/// non-2xx status, undecodable body).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Client for the device's provisioning endpoints.
pub trait PortalClient {
    /// `GET /networks`.
    fn fetch_networks(&self) -> impl Future<Output = Result<Vec<Network>, TransportError>>;

    /// `POST /connect` with the credentials as JSON.
    fn connect(
        &self,
        request: &ConnectRequest,
    ) -> impl Future<Output = Result<ConnectResponse, TransportError>>;
}
