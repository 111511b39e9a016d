use reqwest::Method;
use tracing::instrument;

use super::{ClientError, Gateway};
use crate::objects::{CashinPayload, CashinRequest, CashinResponse, CashinService, Provider};
use crate::schema;
use crate::urls;

/// Cash-in facade: push funds into a subscriber's wallet.
///
/// Each operator method fixes the `service_id` tag and fills the partner
/// credentials; the caller only supplies the transaction details.
#[derive(Debug, Clone)]
pub struct Cashin {
    pub(crate) gateway: Gateway,
}

impl Cashin {
    /// Orange Money, Côte d'Ivoire (`CASHINOMCIPART`).
    pub async fn om_ci(&self, request: CashinRequest) -> Result<CashinResponse, ClientError> {
        self.send(Provider::OmCi, request).await
    }

    /// Moov, Côte d'Ivoire (`CASHINMOOVPART`).
    pub async fn moov_ci(&self, request: CashinRequest) -> Result<CashinResponse, ClientError> {
        self.send(Provider::MoovCi, request).await
    }

    /// MTN, Côte d'Ivoire (`CASHINMTNPART`).
    pub async fn mtn_ci(&self, request: CashinRequest) -> Result<CashinResponse, ClientError> {
        self.send(Provider::MtnCi, request).await
    }

    /// Wave, Côte d'Ivoire (`CI_CASHIN_WAVE_PART`).
    pub async fn wave_ci(&self, request: CashinRequest) -> Result<CashinResponse, ClientError> {
        self.send(Provider::WaveCi, request).await
    }

    /// Cash-in through `provider`.
    #[instrument(
        skip(self, request),
        fields(partner_transaction_id = %request.partner_transaction_id)
    )]
    pub async fn send(
        &self,
        provider: Provider,
        request: CashinRequest,
    ) -> Result<CashinResponse, ClientError> {
        let credentials = &self.gateway.credentials;
        let payload = CashinPayload::new(CashinService::for_provider(provider), credentials, request);
        let url = urls::cashin_url(
            &self.gateway.urls,
            &credentials.agent_code,
            &credentials.login_api,
            &credentials.password_api,
        );

        self.gateway
            .exchange(
                Method::POST,
                url,
                &payload,
                schema::cashin_request(provider),
                &schema::CASHIN_RESPONSE,
            )
            .await
    }
}
