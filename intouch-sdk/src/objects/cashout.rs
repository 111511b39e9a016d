//! Cash-out payloads (merchant payments collected from a wallet).
//!
//! The gateway spells the nested block `additionnalInfos`; the field names
//! below follow the wire format exactly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Provider;
use super::response::ResponseEnvelope;

/// Cash-out service codes, one per operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashoutService {
    #[serde(rename = "PAIEMENTMARCHANDOMPAYCIDIRECT")]
    OmCi,
    #[serde(rename = "PAIEMENTMARCHAND_MOOV_CI")]
    MoovCi,
    #[serde(rename = "PAIEMENTMARCHAND_MTN_CI")]
    MtnCi,
    #[serde(rename = "CI_PAIEMENTWAVE_TP")]
    WaveCi,
}

impl CashoutService {
    pub const CODES: [&'static str; 4] = [
        "PAIEMENTMARCHANDOMPAYCIDIRECT",
        "PAIEMENTMARCHAND_MOOV_CI",
        "PAIEMENTMARCHAND_MTN_CI",
        "CI_PAIEMENTWAVE_TP",
    ];

    pub const fn for_provider(provider: Provider) -> Self {
        match provider {
            Provider::OmCi => CashoutService::OmCi,
            Provider::MoovCi => CashoutService::MoovCi,
            Provider::MtnCi => CashoutService::MtnCi,
            Provider::WaveCi => CashoutService::WaveCi,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            CashoutService::OmCi => "PAIEMENTMARCHANDOMPAYCIDIRECT",
            CashoutService::MoovCi => "PAIEMENTMARCHAND_MOOV_CI",
            CashoutService::MtnCi => "PAIEMENTMARCHAND_MTN_CI",
            CashoutService::WaveCi => "CI_PAIEMENTWAVE_TP",
        }
    }
}

/// Recipient details common to every operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalInfos {
    pub recipient_email: String,
    pub recipient_first_name: String,
    pub recipient_last_name: String,
    pub destinataire: String,
}

/// Orange Money additionally needs the one-time password the payer
/// generated on their phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrangeMoneyInfos {
    #[serde(flatten)]
    pub recipient: AdditionalInfos,
    pub otp: String,
}

/// Wave infos as supplied by the caller.
///
/// The redirect URLs may be omitted: the cash-out facade fills them from
/// `callback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveInfos {
    #[serde(flatten)]
    pub recipient: AdditionalInfos,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

/// Wave infos as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WavePayloadInfos {
    #[serde(flatten)]
    pub recipient: AdditionalInfos,
    pub partner_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
}

impl WaveInfos {
    /// Inject the partner name and point both redirects at `callback`.
    ///
    /// An empty `callback` leaves the caller's own URLs in place.
    pub fn into_payload(self, partner_name: &str, callback: &str) -> WavePayloadInfos {
        let redirect = (!callback.is_empty()).then(|| callback.to_owned());
        WavePayloadInfos {
            recipient: self.recipient,
            partner_name: partner_name.to_owned(),
            return_url: redirect.clone().or(self.return_url),
            cancel_url: redirect.or(self.cancel_url),
        }
    }
}

/// Caller-supplied part of a cash-out, generic over the operator-specific
/// `additionnalInfos` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashoutRequest<I> {
    /// Client-side idempotency key.
    pub id_from_client: String,
    #[serde(serialize_with = "super::amount::serialize")]
    pub amount: Decimal,
    pub callback: String,
    pub recipient_number: String,
    #[serde(rename = "additionnalInfos")]
    pub additional_infos: I,
}

impl<I> CashoutRequest<I> {
    pub fn map_infos<J>(self, f: impl FnOnce(I, &str) -> J) -> CashoutRequest<J> {
        let additional_infos = f(self.additional_infos, &self.callback);
        CashoutRequest {
            id_from_client: self.id_from_client,
            amount: self.amount,
            callback: self.callback,
            recipient_number: self.recipient_number,
            additional_infos,
        }
    }
}

/// Body sent to the cash-out endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashoutPayload<I> {
    #[serde(flatten)]
    pub request: CashoutRequest<I>,
    pub service_code: CashoutService,
}

impl<I> CashoutPayload<I> {
    pub fn new(service: CashoutService, request: CashoutRequest<I>) -> Self {
        Self {
            request,
            service_code: service,
        }
    }
}

pub type CashoutResponse = ResponseEnvelope<CashoutService>;
