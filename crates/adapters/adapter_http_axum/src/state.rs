//! Shared application state for axum handlers.

use std::sync::Arc;
use std::time::Instant;

use sensordash_app::ports::{NetworkScanner, WifiProvisioner};
use sensordash_app::reading_bus::ReadingBus;
use sensordash_app::services::provisioning_service::ProvisioningService;

/// Application state shared across all axum handlers.
///
/// Generic over the scanner and provisioner to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<S, W> {
    /// Broadcast channel fed by the sampler.
    pub reading_bus: Arc<ReadingBus>,
    /// Captive-portal use-cases.
    pub provisioning: Arc<ProvisioningService<S, W>>,
    /// Origin of SSE event ids.
    pub started_at: Instant,
}

impl<S, W> Clone for AppState<S, W> {
    fn clone(&self) -> Self {
        Self {
            reading_bus: Arc::clone(&self.reading_bus),
            provisioning: Arc::clone(&self.provisioning),
            started_at: self.started_at,
        }
    }
}

impl<S, W> AppState<S, W>
where
    S: NetworkScanner + Send + Sync + 'static,
    W: WifiProvisioner + Send + Sync + 'static,
{
    /// Create a new application state.
    ///
    /// The bus is taken as an `Arc` because the sampler task publishes to it.
    pub fn new(reading_bus: Arc<ReadingBus>, provisioning: ProvisioningService<S, W>) -> Self {
        Self {
            reading_bus,
            provisioning: Arc::new(provisioning),
            started_at: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the state was created.
    pub fn uptime_ms(&self) -> u64 {
        u64::try_from(self.started_at.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
