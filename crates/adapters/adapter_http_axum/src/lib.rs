//! # sensordash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Push live readings to browsers over **Server-Sent Events** (`/events`,
//!   event name `readings`)
//! - Serve the **captive-portal API** used during WiFi provisioning
//!   (`/networks`, `/connect`, and the RFC 8908 `/captive-portal/api`)
//! - Serve the compiled dashboard assets, falling back to `index.html` so
//!   client-side routes resolve
//! - Map application results into JSON responses
//!
//! ## Dependency rule
//! Depends on `sensordash-app` (for port traits and services) and
//! `sensordash-domain` (for the types that cross the wire). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod testing;
