//! # sensordash-domain
//!
//! Pure domain model for the sensordash environmental dashboard.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, the [`Reading`](reading::Reading) value
//! - Display decisions: temperature unit, connection status, formatted readouts
//! - Gauge widgets and their bounded history (sliding windows)
//! - WiFi provisioning rules: network lists, connect requests, captive-portal status
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod display;
pub mod gauge;
pub mod network;
pub mod provisioning;
pub mod reading;
pub mod readout;
pub mod status;
pub mod unit;
pub mod window;
