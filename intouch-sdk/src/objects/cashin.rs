//! Cash-in payloads (funds pushed into a mobile-money wallet).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Provider;
use super::response::ResponseEnvelope;
use crate::config::Credentials;

/// Cash-in service tags, one per operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashinService {
    #[serde(rename = "CASHINOMCIPART")]
    OmCi,
    #[serde(rename = "CASHINMOOVPART")]
    MoovCi,
    #[serde(rename = "CASHINMTNPART")]
    MtnCi,
    #[serde(rename = "CI_CASHIN_WAVE_PART")]
    WaveCi,
}

impl CashinService {
    pub const CODES: [&'static str; 4] = [
        "CASHINOMCIPART",
        "CASHINMOOVPART",
        "CASHINMTNPART",
        "CI_CASHIN_WAVE_PART",
    ];

    pub const fn for_provider(provider: Provider) -> Self {
        match provider {
            Provider::OmCi => CashinService::OmCi,
            Provider::MoovCi => CashinService::MoovCi,
            Provider::MtnCi => CashinService::MtnCi,
            Provider::WaveCi => CashinService::WaveCi,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            CashinService::OmCi => "CASHINOMCIPART",
            CashinService::MoovCi => "CASHINMOOVPART",
            CashinService::MtnCi => "CASHINMTNPART",
            CashinService::WaveCi => "CI_CASHIN_WAVE_PART",
        }
    }
}

/// Caller-supplied part of a cash-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashinRequest {
    pub recipient_phone_number: String,
    #[serde(serialize_with = "super::amount::serialize")]
    pub amount: Decimal,
    pub partner_transaction_id: String,
    pub call_back_url: String,
}

/// Body sent to the cash-in endpoint.
///
/// Built by the cash-in facade: the service tag and the partner credentials
/// never come from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashinPayload {
    pub service_id: CashinService,
    pub recipient_phone_number: String,
    #[serde(serialize_with = "super::amount::serialize")]
    pub amount: Decimal,
    pub partner_id: String,
    pub partner_transaction_id: String,
    pub login_api: String,
    pub password_api: String,
    pub call_back_url: String,
}

impl CashinPayload {
    pub fn new(service: CashinService, credentials: &Credentials, request: CashinRequest) -> Self {
        Self {
            service_id: service,
            recipient_phone_number: request.recipient_phone_number,
            amount: request.amount,
            partner_id: credentials.partner_id.clone(),
            partner_transaction_id: request.partner_transaction_id,
            login_api: credentials.login_api.clone(),
            password_api: credentials.password_api.clone(),
            call_back_url: request.call_back_url,
        }
    }
}

pub type CashinResponse = ResponseEnvelope<CashinService>;
