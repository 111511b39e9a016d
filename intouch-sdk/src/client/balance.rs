use reqwest::Method;
use tracing::instrument;

use super::{ClientError, Gateway};
use crate::objects::{BalancePayload, BalanceResponse};
use crate::schema;
use crate::urls;

/// Balance inquiry facade.
#[derive(Debug, Clone)]
pub struct Balance {
    pub(crate) gateway: Gateway,
}

impl Balance {
    /// `POST {distribution}/sec/{agent}/get_balance`
    #[instrument(skip(self), fields(agent_code = %self.gateway.credentials.agent_code))]
    pub async fn get(&self) -> Result<BalanceResponse, ClientError> {
        let credentials = &self.gateway.credentials;
        let payload = BalancePayload::from(credentials.as_ref());
        let url = urls::balance_url(&self.gateway.urls, &credentials.agent_code);

        self.gateway
            .exchange(
                Method::POST,
                url,
                &payload,
                &schema::BALANCE_REQUEST,
                &schema::BALANCE_RESPONSE,
            )
            .await
    }
}
