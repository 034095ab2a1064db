//! Reader configuration, loadable from TOML.

use std::time::Duration;

use cd_dtc::DecoderConfig;
use serde::Deserialize;

/// Settings for [`crate::DtcReader`].
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    /// How long a scan may run before giving up.
    #[serde(default = "default_scan_timeout")]
    pub scan_timeout_ms: u64,
    /// How long to wait for the adapter to answer one request.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
    /// Attach descriptions/severity from the static code table.
    #[serde(default = "default_describe_codes")]
    pub describe_codes: bool,
    #[serde(default)]
    pub decoder: DecoderConfig,
}

fn default_scan_timeout() -> u64 {
    1000
}

fn default_request_timeout() -> u64 {
    2000
}

fn default_describe_codes() -> bool {
    true
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            scan_timeout_ms: default_scan_timeout(),
            request_timeout_ms: default_request_timeout(),
            describe_codes: default_describe_codes(),
            decoder: DecoderConfig::default(),
        }
    }
}

impl LinkConfig {
    /// Parse config from TOML text.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn scan_timeout(&self) -> Duration {
        Duration::from_millis(self.scan_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
