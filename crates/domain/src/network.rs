//! Visible WiFi networks as reported by a scan.

use serde::{Deserialize, Serialize};

/// Encryption advertised by an access point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encryption {
    Open,
    Encrypted,
}

/// One access point seen by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub ssid: String,
    /// Received signal strength in dBm (negative, closer to zero is stronger).
    pub rssi: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<Encryption>,
}

/// Coarse signal quality bucket used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalStrength {
    Strong,
    Medium,
    Weak,
}

impl SignalStrength {
    /// Bucket an RSSI: above -50 dBm is strong, above -70 dBm medium.
    #[must_use]
    pub fn from_rssi(rssi: i32) -> Self {
        if rssi > -50 {
            Self::Strong
        } else if rssi > -70 {
            Self::Medium
        } else {
            Self::Weak
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Medium => "medium",
            Self::Weak => "weak",
        }
    }
}

impl Network {
    #[must_use]
    pub fn new(ssid: impl Into<String>, rssi: i32) -> Self {
        Self {
            ssid: ssid.into(),
            rssi,
            encryption: None,
        }
    }

    #[must_use]
    pub fn with_encryption(mut self, encryption: Encryption) -> Self {
        self.encryption = Some(encryption);
        self
    }

    #[must_use]
    pub fn signal_strength(&self) -> SignalStrength {
        SignalStrength::from_rssi(self.rssi)
    }

    /// Signal label, e.g. `"-42 dBm"`.
    #[must_use]
    pub fn signal_label(&self) -> String {
        format!("{} dBm", self.rssi)
    }
}

/// Order networks strongest first. Ties keep scan order.
pub fn sort_strongest_first(networks: &mut [Network]) {
    networks.sort_by(|a, b| b.rssi.cmp(&a.rssi));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_sort_strongest_first() {
        let mut networks = vec![Network::new("B", -80), Network::new("A", -40)];
        sort_strongest_first(&mut networks);
        let names: Vec<&str> = networks.iter().map(|n| n.ssid.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn should_keep_scan_order_for_equal_rssi() {
        let mut networks = vec![
            Network::new("first", -60),
            Network::new("strong", -30),
            Network::new("second", -60),
        ];
        sort_strongest_first(&mut networks);
        let names: Vec<&str> = networks.iter().map(|n| n.ssid.as_str()).collect();
        assert_eq!(names, vec!["strong", "first", "second"]);
    }

    #[test]
    fn should_bucket_signal_strength() {
        assert_eq!(SignalStrength::from_rssi(-40), SignalStrength::Strong);
        assert_eq!(SignalStrength::from_rssi(-50), SignalStrength::Medium);
        assert_eq!(SignalStrength::from_rssi(-69), SignalStrength::Medium);
        assert_eq!(SignalStrength::from_rssi(-70), SignalStrength::Weak);
        assert_eq!(SignalStrength::from_rssi(-90), SignalStrength::Weak);
    }

    #[test]
    fn should_format_signal_label() {
        assert_eq!(Network::new("A", -42).signal_label(), "-42 dBm");
    }

    #[test]
    fn should_decode_scan_entry_without_encryption() {
        let network: Network = serde_json::from_str(r#"{"ssid":"A","rssi":-40}"#).unwrap();
        assert_eq!(network, Network::new("A", -40));
    }

    #[test]
    fn should_encode_encryption_lowercase() {
        let network = Network::new("cafe", -55).with_encryption(Encryption::Open);
        let json = serde_json::to_value(&network).unwrap();
        assert_eq!(json["encryption"], "open");
    }
}
