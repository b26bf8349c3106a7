//! Temperature unit preference.

use serde::{Deserialize, Serialize};

/// Key under which the unit preference is persisted.
pub const UNIT_PREFERENCE_KEY: &str = "unit";

/// The temperature unit the user chose to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Persisted / selector code: `"C"` or `"F"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }

    /// Display symbol including the degree sign.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "\u{b0}C",
            Self::Fahrenheit => "\u{b0}F",
        }
    }

    /// Parse a persisted or selector code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "C" => Some(Self::Celsius),
            "F" => Some(Self::Fahrenheit),
            _ => None,
        }
    }

    /// Resolve the stored preference; absent or unrecognised values mean Celsius.
    #[must_use]
    pub fn from_stored(stored: Option<&str>) -> Self {
        stored.and_then(Self::from_code).unwrap_or_default()
    }

    /// Which of the two unit-labelled element groups is visible.
    #[must_use]
    pub fn visibility(self) -> UnitVisibility {
        UnitVisibility {
            celsius: self == Self::Celsius,
            fahrenheit: self == Self::Fahrenheit,
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Visibility of the Celsius and Fahrenheit element groups.
///
/// Exactly one of the two flags is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitVisibility {
    pub celsius: bool,
    pub fahrenheit: bool,
}
