//! Cash-in request schemas, one per operator.

use super::{Field, Rule, Schema};
use crate::objects::Provider;

macro_rules! cashin_schema {
    ($name:literal, $service:literal) => {
        Schema {
            name: $name,
            fields: &[
                Field::required("service_id", Rule::Literal($service)),
                Field::required("recipient_phone_number", Rule::String),
                Field::required("amount", Rule::PositiveNumber),
                Field::required("partner_id", Rule::String),
                Field::required("partner_transaction_id", Rule::String),
                Field::required("login_api", Rule::String),
                Field::required("password_api", Rule::String),
                Field::required("call_back_url", Rule::Url),
            ],
        }
    };
}

pub static CASHIN_OM_CI: Schema = cashin_schema!("OM_CI cash-in request", "CASHINOMCIPART");
pub static CASHIN_MOOV_CI: Schema = cashin_schema!("MOOV_CI cash-in request", "CASHINMOOVPART");
pub static CASHIN_MTN_CI: Schema = cashin_schema!("MTN_CI cash-in request", "CASHINMTNPART");
pub static CASHIN_WAVE_CI: Schema =
    cashin_schema!("WAVE_CI cash-in request", "CI_CASHIN_WAVE_PART");

pub fn cashin_request(provider: Provider) -> &'static Schema {
    match provider {
        Provider::OmCi => &CASHIN_OM_CI,
        Provider::MoovCi => &CASHIN_MOOV_CI,
        Provider::MtnCi => &CASHIN_MTN_CI,
        Provider::WaveCi => &CASHIN_WAVE_CI,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::objects::CashinService;
    use crate::schema::Constraint;

    fn body(service: &str) -> serde_json::Value {
        json!({
            "service_id": service,
            "recipient_phone_number": "76537327",
            "amount": 500,
            "partner_id": "CI8724",
            "partner_transaction_id": "CELLB2CB11F15105",
            "login_api": "0708517414",
            "password_api": "XXXX",
            "call_back_url": "https://gutouch.com",
        })
    }

    #[test]
    fn each_provider_accepts_only_its_own_tag() {
        for provider in Provider::ALL {
            let schema = cashin_request(provider);
            let own = CashinService::for_provider(provider).code();
            assert!(schema.validate(&body(own)).is_ok(), "{provider}");

            for other in CashinService::CODES.iter().filter(|code| **code != own) {
                let err = schema.validate(&body(other)).unwrap_err();
                assert!(err.has("service_id", &Constraint::Literal(own)), "{provider}: {err}");
            }
        }
    }

    #[test]
    fn rejects_non_positive_amount_and_bad_callback() {
        let mut value = body("CASHINMTNPART");
        value["amount"] = json!(0);
        value["call_back_url"] = json!("not a url");
        let err = CASHIN_MTN_CI.validate(&value).unwrap_err();
        assert!(err.has("amount", &Constraint::NotPositive));
        assert!(err.has("call_back_url", &Constraint::InvalidUrl));
    }
}
