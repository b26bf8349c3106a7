//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SensordashError`] via `#[from]` at port boundaries.

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum SensordashError {
    /// A value failed domain validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A wire payload could not be decoded.
    #[error("decode error")]
    Decode(#[from] DecodeError),

    /// A device or adapter failure (sensor bus, radio, storage).
    #[error("device error")]
    Device(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A `readings` payload that is not a well-formed reading.
#[derive(Debug, thiserror::Error)]
#[error("malformed reading payload")]
pub struct DecodeError(#[from] serde_json::Error);

/// Domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The SSID is empty after trimming.
    #[error("SSID required")]
    EmptySsid,

    /// The SSID exceeds the 802.11 limit.
    #[error("SSID must be at most 32 bytes, got {len}")]
    SsidTooLong {
        /// Length in bytes.
        len: usize,
    },

    /// The passphrase exceeds the WPA2 limit.
    #[error("password must be at most 63 bytes, got {len}")]
    PasswordTooLong {
        /// Length in bytes.
        len: usize,
    },
}

impl SensordashError {
    /// Wrap any adapter error as a [`SensordashError::Device`].
    pub fn device(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Device(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_empty_ssid_message() {
        assert_eq!(ValidationError::EmptySsid.to_string(), "SSID required");
    }

    #[test]
    fn should_display_ssid_length_in_message() {
        let err = ValidationError::SsidTooLong { len: 40 };
        assert_eq!(err.to_string(), "SSID must be at most 32 bytes, got 40");
    }

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: SensordashError = ValidationError::EmptySsid.into();
        assert!(matches!(
            err,
            SensordashError::Validation(ValidationError::EmptySsid)
        ));
    }

    #[test]
    fn should_wrap_adapter_error_as_device_error() {
        let io = std::io::Error::other("i2c bus stuck");
        let err = SensordashError::device(io);
        assert!(matches!(err, SensordashError::Device(_)));
        assert_eq!(err.to_string(), "device error");
    }
}
