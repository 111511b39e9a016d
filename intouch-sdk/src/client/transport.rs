//! Authenticated HTTP transport.
//!
//! [`Transport`] is the seam between the facades and the network. The
//! facades share one instance through an `Arc`, so connection pooling and
//! any cached digest challenge are shared as well.

use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, WWW_AUTHENTICATE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;

use super::digest::{Challenge, ChallengeError, Session};
use crate::config::{AuthScheme, Credentials};

/// A JSON request to the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayRequest {
    pub method: Method,
    pub url: String,
    pub body: Value,
}

/// Transport-level failures.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection, TLS, timeout or malformed URL.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway refused our credentials.
    #[error("unauthorized: {body}")]
    Unauthorized { body: String },

    /// The digest challenge could not be answered.
    #[error("digest challenge: {0}")]
    Challenge(#[from] ChallengeError),

    /// The gateway returned a non-2xx status code with a non-JSON body.
    #[error("api error: status {status}, body: {body}")]
    Api { status: StatusCode, body: String },

    /// The gateway returned a non-2xx status code with a JSON body.
    #[error("gateway error: status {status}, body: {body}")]
    Gateway { status: StatusCode, body: Value },

    /// The response body is not JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    /// Send `request` and return the parsed JSON body of a 2xx reply.
    ///
    /// Non-2xx replies whose body is JSON come back as
    /// [`TransportError::Gateway`] so the caller can still read the envelope.
    async fn send(&self, request: GatewayRequest) -> Result<Value, TransportError>;
}

/// [`Transport`] over `reqwest` with Basic or Digest authentication.
pub struct HttpTransport {
    http: Client,
    username: String,
    password: String,
    scheme: AuthScheme,
    session: Mutex<Option<Session>>,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("username", &self.username)
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub fn new(http: Client, credentials: &Credentials, scheme: AuthScheme) -> Self {
        Self {
            http,
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            scheme,
            session: Mutex::new(None),
        }
    }

    fn request(&self, request: &GatewayRequest, body: Bytes) -> RequestBuilder {
        self.http
            .request(request.method.clone(), &request.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
    }

    async fn send_basic(&self, request: &GatewayRequest, body: Bytes) -> Result<Response, TransportError> {
        Ok(self
            .request(request, body)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?)
    }

    /// Reuse the cached challenge when there is one; on a fresh `401`
    /// challenge, answer it once and cache it for later calls.
    async fn send_digest(&self, request: &GatewayRequest, body: Bytes) -> Result<Response, TransportError> {
        let url = url::Url::parse(&request.url)?;
        let uri = &url[url::Position::BeforePath..url::Position::AfterQuery];
        let method = request.method.as_str();

        let cached = self.with_session(|session| {
            session
                .as_mut()
                .map(|s| s.authorize(&self.username, &self.password, method, uri))
        });

        let mut builder = self.request(request, body.clone());
        if let Some(authorization) = cached {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        let resp = builder.send().await?;
        if resp.status() != StatusCode::UNAUTHORIZED {
            return Ok(resp);
        }

        let header = resp
            .headers()
            .get_all(WWW_AUTHENTICATE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.trim_start().to_ascii_lowercase().starts_with("digest"))
            .map(str::to_owned);
        let Some(header) = header else {
            return Ok(resp);
        };
        let challenge = Challenge::parse(&header)?;
        tracing::debug!("answering digest challenge");

        let authorization = self.with_session(|session| {
            session
                .insert(Session::new(challenge))
                .authorize(&self.username, &self.password, method, uri)
        });

        let resp = self
            .request(request, body)
            .header(AUTHORIZATION, authorization)
            .send()
            .await?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            self.with_session(|session| session.take());
        }
        Ok(resp)
    }

    fn with_session<T>(&self, f: impl FnOnce(&mut Option<Session>) -> T) -> T {
        let mut guard = self
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: GatewayRequest) -> Result<Value, TransportError> {
        let body = Bytes::from(serde_json::to_vec(&request.body)?);
        let resp = match self.scheme {
            AuthScheme::Basic => self.send_basic(&request, body).await?,
            AuthScheme::Digest => self.send_digest(&request, body).await?,
        };
        parse_response(resp).await
    }
}

async fn parse_response(resp: Response) -> Result<Value, TransportError> {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED {
        let body = resp.text().await.unwrap_or_default();
        return Err(TransportError::Unauthorized { body });
    }
    let bytes = resp.bytes().await?;
    if !status.is_success() {
        return Err(match serde_json::from_slice(&bytes) {
            Ok(body) => TransportError::Gateway { status, body },
            Err(_) => TransportError::Api {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            },
        });
    }
    serde_json::from_slice(&bytes).map_err(TransportError::Json)
}
