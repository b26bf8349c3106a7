//! # sensordash-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore` — key/value persistence of the unit preference
//!   - `TelemetryView` — the rendering boundary of the dashboard
//!   - `PortalClient` — HTTP calls made by the WiFi portal page
//!   - `SensorSource`, `NetworkScanner`, `WifiProvisioner` — device hardware
//! - Define **driving/inbound ports** as use-case structs/traits:
//!   - `StreamEventHandler` — one method per server-push event type
//!   - `TelemetryController` — the live dashboard controller
//!   - `PortalService` — network list and connect-form flow
//!   - `ProvisioningService` — device side of the captive portal
//! - Provide **in-process infrastructure** (reading bus, sampler loop) behind
//!   the `server` feature
//!
//! ## Dependency rule
//! Depends on `sensordash-domain` only (plus `tokio` for the `server` feature).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod stream;
pub mod telemetry_controller;

#[cfg(feature = "server")]
pub mod reading_bus;
#[cfg(feature = "server")]
pub mod sampler;
