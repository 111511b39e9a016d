use reqwest::Method;
use serde::Serialize;
use tracing::instrument;

use super::{ClientError, Gateway};
use crate::objects::{
    AdditionalInfos, CashoutPayload, CashoutRequest, CashoutResponse, CashoutService,
    OrangeMoneyInfos, Provider, WaveInfos,
};
use crate::schema;
use crate::urls;

/// Cash-out facade: collect a merchant payment from a subscriber's wallet.
#[derive(Debug, Clone)]
pub struct Cashout {
    pub(crate) gateway: Gateway,
}

impl Cashout {
    /// Orange Money, Côte d'Ivoire. Requires the payer's OTP.
    pub async fn om_ci(
        &self,
        request: CashoutRequest<OrangeMoneyInfos>,
    ) -> Result<CashoutResponse, ClientError> {
        self.send(Provider::OmCi, request).await
    }

    pub async fn moov_ci(
        &self,
        request: CashoutRequest<AdditionalInfos>,
    ) -> Result<CashoutResponse, ClientError> {
        self.send(Provider::MoovCi, request).await
    }

    pub async fn mtn_ci(
        &self,
        request: CashoutRequest<AdditionalInfos>,
    ) -> Result<CashoutResponse, ClientError> {
        self.send(Provider::MtnCi, request).await
    }

    /// Wave, Côte d'Ivoire.
    ///
    /// The configured partner name is injected and a non-empty `callback`
    /// becomes both `return_url` and `cancel_url`.
    pub async fn wave_ci(
        &self,
        request: CashoutRequest<WaveInfos>,
    ) -> Result<CashoutResponse, ClientError> {
        let partner_name = &self.gateway.credentials.partner_name;
        let request = request.map_infos(|infos, callback| infos.into_payload(partner_name, callback));
        self.send(Provider::WaveCi, request).await
    }

    #[instrument(
        skip(self, request),
        fields(id_from_client = %request.id_from_client)
    )]
    async fn send<I>(
        &self,
        provider: Provider,
        request: CashoutRequest<I>,
    ) -> Result<CashoutResponse, ClientError>
    where
        I: Serialize + Send,
    {
        let credentials = &self.gateway.credentials;
        let payload = CashoutPayload::new(CashoutService::for_provider(provider), request);
        let url = urls::cashout_url(
            &self.gateway.urls,
            &credentials.agent_code,
            &credentials.login_api,
            &credentials.password_api,
        );

        self.gateway
            .exchange(
                Method::PUT,
                url,
                &payload,
                schema::cashout_request(provider),
                &schema::CASHOUT_RESPONSE,
            )
            .await
    }
}
