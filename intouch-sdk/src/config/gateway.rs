//! Gateway endpoint and transport settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Applied to every request unless overridden on the builder.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which cash-in endpoint to target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashinUrlStyle {
    /// `{distribution}/sec/{agent}/cashin`; credentials only in the body.
    #[default]
    Path,
    /// `{distribution}/sec/touchpayapi/{agent}/transaction?loginAgent=..&passwordAgent=..`
    Transaction,
}

/// HTTP authentication scheme used against the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// Preemptive `Authorization: Basic ..` on every request.
    #[default]
    Basic,
    /// RFC 7616 challenge/response; the challenge is cached and reused.
    Digest,
}

/// Base URLs of the two gateway hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayUrls {
    /// Host serving cash-in and balance.
    pub distribution: String,
    /// Host serving the TouchPay cash-out API.
    pub touchpay: String,
    pub cashin_style: CashinUrlStyle,
}

impl Default for GatewayUrls {
    fn default() -> Self {
        Self {
            distribution: "https://apidist.gutouch.net/apidist".into(),
            touchpay: "https://api.gutouch.com/dist/api".into(),
            cashin_style: CashinUrlStyle::Path,
        }
    }
}

impl GatewayUrls {
    /// Point both hosts at the same base, e.g. a sandbox or a mock server.
    pub fn single(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            distribution: base.clone(),
            touchpay: base,
            cashin_style: CashinUrlStyle::Path,
        }
    }

    pub(crate) fn check(&self) -> Result<(), super::ConfigError> {
        for base in [&self.distribution, &self.touchpay] {
            url::Url::parse(base).map_err(|source| super::ConfigError::InvalidUrl {
                url: base.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
