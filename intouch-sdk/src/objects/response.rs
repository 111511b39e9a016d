//! The response envelope shared by every gateway operation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transaction status reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Successful,
    Initiated,
    Pending,
}

impl TransactionStatus {
    pub const ALL: [&'static str; 3] = ["SUCCESSFUL", "INITIATED", "PENDING"];
}

/// Response body returned by the gateway.
///
/// Success and error replies share this shape, so every field is optional.
/// A reply carrying `status` is a transaction outcome; a reply carrying only
/// `message` is the gateway rejecting the request.
///
/// `S` is the service code family echoed back (cash-in or cash-out tags).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<S> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_from_client: Option<String>,
    #[serde(rename = "idFromGU", skip_serializing_if = "Option::is_none")]
    pub id_from_gu: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::amount::serialize_option"
    )]
    pub amount: Option<Decimal>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::amount::serialize_option"
    )]
    pub fees: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_number: Option<String>,
    /// Gateway timestamp in epoch milliseconds, as sent.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "super::amount::serialize_option"
    )]
    pub date_time: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_transaction: Option<String>,
    /// Checkout page the payer must visit (Wave).
    #[serde(rename = "payment_url", skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_message: Option<String>,
}

impl<S> ResponseEnvelope<S> {
    /// `true` when the gateway reported a transaction outcome rather than
    /// an error message.
    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }

    pub fn is_successful(&self) -> bool {
        self.status == Some(TransactionStatus::Successful)
    }
}
