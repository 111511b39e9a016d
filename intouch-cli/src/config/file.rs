//! TOML file configuration structures.
//!
//! These structs directly map to the `intouch.toml` file format. Every
//! section is optional; anything left out falls back to the environment or
//! the SDK defaults.

use intouch_sdk::config::{AuthScheme, DEFAULT_TIMEOUT, GatewayUrls};
use intouch_sdk::PartialCredentials;
use serde::{Deserialize, Serialize};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub credentials: PartialCredentials,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Gateway connection section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// `basic` (default) or `digest`.
    #[serde(default)]
    pub auth: AuthScheme,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub urls: GatewayUrls,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            auth: AuthScheme::default(),
            timeout_secs: default_timeout_secs(),
            urls: GatewayUrls::default(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}
