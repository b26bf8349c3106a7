//! WiFi ports — the device radio as seen by the captive portal.

use std::future::Future;

use sensordash_domain::error::SensordashError;
use sensordash_domain::network::Network;
use sensordash_domain::provisioning::ConnectRequest;

/// Scans for visible access points.
pub trait NetworkScanner {
    /// Run a scan and return every network seen, in scan order.
    fn scan(&self) -> impl Future<Output = Result<Vec<Network>, SensordashError>> + Send;
}

/// Joins a network with user-supplied credentials.
pub trait WifiProvisioner {
    /// Start joining the network described by `request`.
    ///
    /// Returns once the attempt has been queued, not when it completes.
    fn begin_connect(
        &self,
        request: ConnectRequest,
    ) -> impl Future<Output = Result<(), SensordashError>> + Send;

    /// Whether the station interface currently has a link.
    fn is_connected(&self) -> bool;
}

impl<T: NetworkScanner + Send + Sync> NetworkScanner for std::sync::Arc<T> {
    fn scan(&self) -> impl Future<Output = Result<Vec<Network>, SensordashError>> + Send {
        (**self).scan()
    }
}

impl<T: WifiProvisioner + Send + Sync> WifiProvisioner for std::sync::Arc<T> {
    fn begin_connect(
        &self,
        request: ConnectRequest,
    ) -> impl Future<Output = Result<(), SensordashError>> + Send {
        (**self).begin_connect(request)
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}
