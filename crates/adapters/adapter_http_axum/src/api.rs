//! HTTP handlers used by the dashboard and the provisioning portal.

#[allow(clippy::missing_errors_doc)]
pub mod captive;
#[allow(clippy::missing_errors_doc)]
pub mod connect;
#[allow(clippy::missing_errors_doc)]
pub mod networks;
pub mod sse;

use axum::Router;
use axum::routing::{get, post};

use sensordash_app::ports::{NetworkScanner, WifiProvisioner};

use crate::state::AppState;

/// Build the API sub-router.
///
/// Paths are served at the root because the firmware-era pages call them
/// without a prefix.
pub fn routes<S, W>() -> Router<AppState<S, W>>
where
    S: NetworkScanner + Send + Sync + 'static,
    W: WifiProvisioner + Send + Sync + 'static,
{
    Router::new()
        .route("/events", get(sse::stream::<S, W>))
        .route("/networks", get(networks::list::<S, W>))
        .route("/connect", post(connect::submit::<S, W>))
        .route("/captive-portal/api", get(captive::status::<S, W>))
}
