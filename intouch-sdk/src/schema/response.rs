//! Response envelope schemas and the balance request schema.

use super::{Field, Rule, Schema};
use crate::objects::{CashinService, CashoutService, TransactionStatus};

macro_rules! envelope_schema {
    ($name:literal, $service_code:expr) => {
        Schema {
            name: $name,
            fields: &[
                Field::optional("status", Rule::OneOf(&TransactionStatus::ALL)),
                Field::optional("message", Rule::String),
                Field::optional("idFromClient", Rule::String),
                Field::optional("idFromGU", Rule::String),
                Field::optional("amount", Rule::Number),
                Field::optional("fees", Rule::Number),
                Field::optional("serviceCode", $service_code),
                Field::optional("recipientNumber", Rule::String),
                Field::optional("dateTime", Rule::Number),
                Field::optional("numTransaction", Rule::String),
                Field::optional("payment_url", Rule::String),
                Field::optional("detailMessage", Rule::String),
            ],
        }
    };
}

pub static CASHIN_RESPONSE: Schema = envelope_schema!(
    "cash-in response",
    Rule::OneOf(&CashinService::CODES)
);

pub static CASHOUT_RESPONSE: Schema = envelope_schema!(
    "cash-out response",
    Rule::OneOf(&CashoutService::CODES)
);

pub static BALANCE_RESPONSE: Schema = envelope_schema!("balance response", Rule::String);

pub static BALANCE_REQUEST: Schema = Schema {
    name: "balance request",
    fields: &[
        Field::required("partner_id", Rule::String),
        Field::required("login_api", Rule::String),
        Field::required("password_api", Rule::String),
    ],
};
