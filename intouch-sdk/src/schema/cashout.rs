//! Cash-out request schemas, one per operator.
//!
//! The operators differ only in the `additionnalInfos` block: Orange Money
//! adds `otp`, Wave adds `partner_name` and the redirect URLs.

use super::{Field, Rule, Schema};
use crate::objects::Provider;

const RECIPIENT_EMAIL: Field = Field::required("recipientEmail", Rule::Email);
const RECIPIENT_FIRST_NAME: Field = Field::required("recipientFirstName", Rule::String);
const RECIPIENT_LAST_NAME: Field = Field::required("recipientLastName", Rule::String);
const DESTINATAIRE: Field = Field::required("destinataire", Rule::String);

pub static CASHOUT_INFOS: Schema = Schema {
    name: "cash-out additionnalInfos",
    fields: &[
        RECIPIENT_EMAIL,
        RECIPIENT_FIRST_NAME,
        RECIPIENT_LAST_NAME,
        DESTINATAIRE,
    ],
};

pub static CASHOUT_OM_INFOS: Schema = Schema {
    name: "OM_CI cash-out additionnalInfos",
    fields: &[
        RECIPIENT_EMAIL,
        RECIPIENT_FIRST_NAME,
        RECIPIENT_LAST_NAME,
        DESTINATAIRE,
        Field::required("otp", Rule::String),
    ],
};

pub static CASHOUT_WAVE_INFOS: Schema = Schema {
    name: "WAVE_CI cash-out additionnalInfos",
    fields: &[
        RECIPIENT_EMAIL,
        RECIPIENT_FIRST_NAME,
        RECIPIENT_LAST_NAME,
        DESTINATAIRE,
        Field::required("partner_name", Rule::String),
        Field::required("return_url", Rule::Url),
        Field::required("cancel_url", Rule::Url),
    ],
};

macro_rules! cashout_schema {
    ($name:literal, $infos:expr, $service:literal) => {
        Schema {
            name: $name,
            fields: &[
                Field::required("idFromClient", Rule::String),
                Field::required("amount", Rule::PositiveNumber),
                Field::required("callback", Rule::Url),
                Field::required("recipientNumber", Rule::String),
                Field::required("additionnalInfos", Rule::Object($infos)),
                Field::required("serviceCode", Rule::Literal($service)),
            ],
        }
    };
}

pub static CASHOUT_OM_CI: Schema = cashout_schema!(
    "OM_CI cash-out request",
    &CASHOUT_OM_INFOS,
    "PAIEMENTMARCHANDOMPAYCIDIRECT"
);
pub static CASHOUT_MOOV_CI: Schema = cashout_schema!(
    "MOOV_CI cash-out request",
    &CASHOUT_INFOS,
    "PAIEMENTMARCHAND_MOOV_CI"
);
pub static CASHOUT_MTN_CI: Schema = cashout_schema!(
    "MTN_CI cash-out request",
    &CASHOUT_INFOS,
    "PAIEMENTMARCHAND_MTN_CI"
);
pub static CASHOUT_WAVE_CI: Schema = cashout_schema!(
    "WAVE_CI cash-out request",
    &CASHOUT_WAVE_INFOS,
    "CI_PAIEMENTWAVE_TP"
);

pub fn cashout_request(provider: Provider) -> &'static Schema {
    match provider {
        Provider::OmCi => &CASHOUT_OM_CI,
        Provider::MoovCi => &CASHOUT_MOOV_CI,
        Provider::MtnCi => &CASHOUT_MTN_CI,
        Provider::WaveCi => &CASHOUT_WAVE_CI,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::Constraint;

    fn om_body() -> serde_json::Value {
        json!({
            "idFromClient": "4785411421145411645654654",
            "additionnalInfos": {
                "recipientEmail": "tapha.seck@hubsocial.org",
                "recipientFirstName": "Moustapha",
                "recipientLastName": "SECK",
                "destinataire": "0708517414",
                "otp": "5278",
            },
            "amount": 100,
            "callback": "https://e870adf3.ngrok.io",
            "recipientNumber": "0708517414",
            "serviceCode": "PAIEMENTMARCHANDOMPAYCIDIRECT",
        })
    }

    #[test]
    fn orange_money_requires_otp() {
        assert!(CASHOUT_OM_CI.validate(&om_body()).is_ok());

        let mut value = om_body();
        value["additionnalInfos"]
            .as_object_mut()
            .unwrap()
            .remove("otp");
        let err = CASHOUT_OM_CI.validate(&value).unwrap_err();
        assert!(err.has("additionnalInfos.otp", &Constraint::Required));
    }

    #[test]
    fn moov_strips_operator_specific_fields() {
        let mut value = om_body();
        value["serviceCode"] = json!("PAIEMENTMARCHAND_MOOV_CI");
        let out = CASHOUT_MOOV_CI.validate(&value).unwrap();
        assert!(out["additionnalInfos"].get("otp").is_none());
    }

    #[test]
    fn wave_requires_redirect_urls() {
        let mut value = om_body();
        value["serviceCode"] = json!("CI_PAIEMENTWAVE_TP");
        value["additionnalInfos"]["partner_name"] = json!("Hub Social");
        value["additionnalInfos"]["return_url"] = json!("ftp//broken");
        let err = CASHOUT_WAVE_CI.validate(&value).unwrap_err();
        assert!(err.has("additionnalInfos.return_url", &Constraint::InvalidUrl));
        assert!(err.has("additionnalInfos.cancel_url", &Constraint::Required));
    }

    #[test]
    fn bad_email_is_reported_with_nested_path() {
        let mut value = om_body();
        value["additionnalInfos"]["recipientEmail"] = json!("tapha.seck");
        let err = CASHOUT_OM_CI.validate(&value).unwrap_err();
        assert!(err.has("additionnalInfos.recipientEmail", &Constraint::InvalidEmail));
    }
}
