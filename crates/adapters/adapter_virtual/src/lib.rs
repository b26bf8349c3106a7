//! # sensordash-adapter-virtual
//!
//! Virtual/demo hardware for running the dashboard without a device.
//!
//! ## Provided devices
//!
//! | Device | Port | Behaviour |
//! |--------|------|-----------|
//! | [`VirtualBme280`] | `SensorSource` | Slowly drifting temperature, humidity and pressure |
//! | [`VirtualRadio`] | `NetworkScanner` + `WifiProvisioner` | Fixed scan list; joins any listed SSID |
//!
//! ## Dependency rule
//!
//! Depends on `sensordash-app` (port traits) and `sensordash-domain` only.

mod radio;
mod sensor;

pub use radio::VirtualRadio;
pub use sensor::VirtualBme280;
