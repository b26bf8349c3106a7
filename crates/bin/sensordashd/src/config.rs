//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `sensordash.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use sensordash_domain::network::Network;
use sensordash_domain::reading::STANDARD_SEA_LEVEL_HPA;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Sampling settings.
    pub sensor: SensorConfig,
    /// Captive-portal settings.
    pub portal: PortalConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Directory holding the compiled dashboard; nothing is served when unset.
    pub assets_dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Sensor sampling configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Delay between two readings.
    pub sample_interval_ms: u64,
    /// Reference pressure for the altitude estimate, in hPa.
    pub sea_level_hpa: f64,
}

/// Access-point configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Address the access point answers on.
    pub ap_address: String,
    /// Networks the simulated radio reports; the radio's own demo list when unset.
    pub networks: Option<Vec<Network>>,
}

impl Config {
    /// Load configuration from `sensordash.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("sensordash.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SENSORDASH_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("SENSORDASH_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("SENSORDASH_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("SENSORDASH_ASSETS") {
            self.server.assets_dir = Some(PathBuf::from(val));
        }
        if let Some(ms) = var("SENSORDASH_SAMPLE_INTERVAL_MS").and_then(|val| val.parse().ok()) {
            self.sensor.sample_interval_ms = ms;
        }
        if let Some(val) = var("SENSORDASH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.sensor.sample_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "sample interval must be non-zero".to_string(),
            ));
        }
        if !(self.sensor.sea_level_hpa.is_finite() && self.sensor.sea_level_hpa > 0.0) {
            return Err(ConfigError::Validation(
                "sea level pressure must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the sampling period.
    #[must_use]
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sensor.sample_interval_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            assets_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sensordashd=info,sensordash=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 1000,
            sea_level_hpa: STANDARD_SEA_LEVEL_HPA,
        }
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            ap_address: "192.168.4.1".to_string(),
            networks: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
