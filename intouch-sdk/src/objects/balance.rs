use serde::Serialize;

use super::response::ResponseEnvelope;
use crate::config::Credentials;

/// Body sent to the balance endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalancePayload {
    pub partner_id: String,
    pub login_api: String,
    pub password_api: String,
}

impl From<&Credentials> for BalancePayload {
    fn from(credentials: &Credentials) -> Self {
        Self {
            partner_id: credentials.partner_id.clone(),
            login_api: credentials.login_api.clone(),
            password_api: credentials.password_api.clone(),
        }
    }
}

/// Balance replies use the shared envelope; no service code family applies.
pub type BalanceResponse = ResponseEnvelope<String>;
