//! Async facades over the Intouch gateway.
//!
//! [`Intouch`] bundles the balance, cash-in and cash-out facades. All three
//! run every call through [`Gateway::exchange`]: the payload is checked
//! against its schema, sent over the shared [`Transport`], and the reply is
//! checked against the operation's envelope before it is decoded.

mod balance;
mod cashin;
mod cashout;
mod digest;
mod intouch;
mod transport;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use balance::Balance;
pub use cashin::Cashin;
pub use cashout::Cashout;
pub use digest::ChallengeError;
pub use intouch::{Intouch, IntouchBuilder};
pub use transport::{GatewayRequest, HttpTransport, Transport, TransportError};

use crate::config::{Credentials, GatewayUrls};
use crate::schema::{Schema, ValidationError};

/// Errors produced by a gateway call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The outgoing payload failed its schema; nothing was sent.
    #[error("invalid request: {0}")]
    Request(ValidationError),

    /// The call itself failed (network, auth, or a status code whose body
    /// is not a gateway envelope).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The gateway answered 2xx with a body we do not recognise.
    #[error("unexpected response: {0}")]
    Response(ValidationError),

    /// Payload could not be encoded, or a validated body could not be
    /// decoded into its type.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// State shared by the three facades.
#[derive(Debug, Clone)]
pub(crate) struct Gateway {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) credentials: Arc<Credentials>,
    pub(crate) urls: Arc<GatewayUrls>,
}

impl Gateway {
    /// Validate `payload`, send it, validate and decode the reply.
    pub(crate) async fn exchange<P, R>(
        &self,
        method: Method,
        url: String,
        payload: &P,
        request_schema: &'static Schema,
        response_schema: &'static Schema,
    ) -> Result<R, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(payload)?;
        let body = request_schema.validate(&body).map_err(ClientError::Request)?;

        // query strings may carry agent credentials
        let endpoint = url.split_once('?').map_or(url.as_str(), |(path, _)| path);
        tracing::debug!(%method, endpoint, schema = request_schema.name, "sending request");
        let reply = match self.transport.send(GatewayRequest { method, url, body }).await {
            Ok(reply) => reply,
            // error replies share the success envelope
            Err(TransportError::Gateway { status, body }) if is_envelope(&body) => {
                tracing::warn!(%status, "gateway rejected the request");
                body
            }
            Err(err) => return Err(err.into()),
        };

        let reply = response_schema
            .validate(&reply)
            .map_err(ClientError::Response)?;
        if reply.get("status").is_none()
            && let Some(message) = reply.get("message").and_then(|m| m.as_str())
        {
            tracing::warn!(message, "gateway answered without a status");
        }

        Ok(serde_json::from_value(reply)?)
    }
}

fn is_envelope(body: &Value) -> bool {
    body.get("status").is_some() || body.get("message").is_some()
}
