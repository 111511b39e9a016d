//! Request and response payloads exchanged with the gateway.

pub mod amount;
pub mod balance;
pub mod cashin;
pub mod cashout;
pub mod response;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use balance::{BalancePayload, BalanceResponse};
pub use cashin::{CashinPayload, CashinRequest, CashinResponse, CashinService};
pub use cashout::{
    AdditionalInfos, CashoutPayload, CashoutRequest, CashoutResponse, CashoutService,
    OrangeMoneyInfos, WaveInfos, WavePayloadInfos,
};
pub use response::{ResponseEnvelope, TransactionStatus};

/// Operator/market combinations served by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// Orange Money, Côte d'Ivoire
    #[serde(rename = "OM_CI")]
    OmCi,
    /// Moov Africa, Côte d'Ivoire
    #[serde(rename = "MOOV_CI")]
    MoovCi,
    /// MTN Mobile Money, Côte d'Ivoire
    #[serde(rename = "MTN_CI")]
    MtnCi,
    /// Wave, Côte d'Ivoire
    #[serde(rename = "WAVE_CI")]
    WaveCi,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::OmCi,
        Provider::MoovCi,
        Provider::MtnCi,
        Provider::WaveCi,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Provider::OmCi => "OM_CI",
            Provider::MoovCi => "MOOV_CI",
            Provider::MtnCi => "MTN_CI",
            Provider::WaveCi => "WAVE_CI",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider `{0}`, expected one of OM_CI, MOOV_CI, MTN_CI, WAVE_CI")]
pub struct UnknownProvider(pub String);

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownProvider(s.to_owned()))
    }
}

/// Generate a fresh identifier usable as `partner_transaction_id` or
/// `idFromClient`.
///
/// UUIDv7 in simple (hyphen-free) form, so ids sort by creation time.
pub fn new_transaction_id() -> String {
    uuid::Uuid::now_v7().simple().to_string()
}
