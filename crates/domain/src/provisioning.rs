//! WiFi provisioning — credentials submitted through the captive portal.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Longest SSID allowed by 802.11, in bytes.
pub const MAX_SSID_LEN: usize = 32;
/// Longest WPA2 passphrase, in bytes.
pub const MAX_PASSWORD_LEN: usize = 63;

/// Credentials to join a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectRequest {
    #[serde(default)]
    pub ssid: String,
    #[serde(default)]
    pub password: String,
}

impl ConnectRequest {
    /// Build a request, trimming surrounding whitespace from the SSID.
    #[must_use]
    pub fn new(ssid: &str, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.trim().to_string(),
            password: password.into(),
        }
    }

    /// Check the request against domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an empty or over-long SSID or an
    /// over-long password.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ssid.trim().is_empty() {
            return Err(ValidationError::EmptySsid);
        }
        if self.ssid.len() > MAX_SSID_LEN {
            return Err(ValidationError::SsidTooLong {
                len: self.ssid.len(),
            });
        }
        if self.password.len() > MAX_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooLong {
                len: self.password.len(),
            });
        }
        Ok(())
    }
}

/// Answer to a connect request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ConnectResponse {
    #[must_use]
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// RFC 8908 captive-portal API body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptivePortalStatus {
    pub captive: bool,
    #[serde(rename = "user-portal-url")]
    pub user_portal_url: String,
}

impl CaptivePortalStatus {
    /// Status for an access point at `ap_address`; captive while the
    /// station link is down.
    #[must_use]
    pub fn new(station_connected: bool, ap_address: &str) -> Self {
        Self {
            captive: !station_connected,
            user_portal_url: format!("http://{ap_address}/"),
        }
    }
}
