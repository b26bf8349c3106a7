//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod portal_client;
pub mod preferences;
pub mod sensor;
pub mod telemetry_view;
pub mod wifi;

pub use portal_client::{PortalClient, TransportError};
pub use preferences::{PreferenceError, PreferenceStore};
pub use sensor::SensorSource;
pub use telemetry_view::TelemetryView;
pub use wifi::{NetworkScanner, WifiProvisioner};
