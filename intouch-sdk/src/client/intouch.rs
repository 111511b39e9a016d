//! The aggregate client.

use std::sync::Arc;
use std::time::Duration;

use super::transport::{HttpTransport, Transport};
use super::{Balance, Cashin, Cashout, Gateway};
use crate::config::{
    AuthScheme, ConfigError, Credentials, DEFAULT_TIMEOUT, GatewayUrls, PartialCredentials,
};

/// Entry point: one [`Balance`], [`Cashin`] and [`Cashout`] facade sharing a
/// single transport and credential set.
///
/// ```no_run
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// use intouch_sdk::client::Intouch;
///
/// let intouch = Intouch::from_env()?;
/// let balance = intouch.balance().get().await?;
/// println!("{:?}", balance.amount);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Intouch {
    balance: Balance,
    cashin: Cashin,
    cashout: Cashout,
}

impl Intouch {
    /// Client over explicit credentials with default endpoints.
    pub fn new(credentials: Credentials) -> Result<Self, ConfigError> {
        Self::builder().credentials(credentials).build()
    }

    /// Client configured entirely from the `INTOUCH_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder().env_defaults().build()
    }

    pub fn builder() -> IntouchBuilder {
        IntouchBuilder::default()
    }

    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    pub fn cashin(&self) -> &Cashin {
        &self.cashin
    }

    pub fn cashout(&self) -> &Cashout {
        &self.cashout
    }

    pub fn credentials(&self) -> &Credentials {
        &self.balance.gateway.credentials
    }

    pub fn urls(&self) -> &GatewayUrls {
        &self.balance.gateway.urls
    }
}

/// Builder for [`Intouch`].
///
/// Credentials resolve field by field: a full [`Credentials`] set with
/// [`credentials`](Self::credentials) wins, then values set through the
/// per-field setters or [`params`](Self::params), then
/// [`defaults`](Self::defaults) (typically the environment).
#[derive(Debug)]
pub struct IntouchBuilder {
    explicit: Option<Credentials>,
    params: PartialCredentials,
    defaults: PartialCredentials,
    urls: GatewayUrls,
    auth: AuthScheme,
    timeout: Duration,
    http: Option<reqwest::Client>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for IntouchBuilder {
    fn default() -> Self {
        Self {
            explicit: None,
            params: PartialCredentials::default(),
            defaults: PartialCredentials::default(),
            urls: GatewayUrls::default(),
            auth: AuthScheme::default(),
            timeout: DEFAULT_TIMEOUT,
            http: None,
            transport: None,
        }
    }
}

impl IntouchBuilder {
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.explicit = Some(credentials);
        self
    }

    /// Fill in whatever the per-field setters left unset.
    pub fn params(mut self, params: PartialCredentials) -> Self {
        self.params = self.params.or(params);
        self
    }

    /// Lowest-priority source, consulted for fields nothing else sets.
    pub fn defaults(mut self, defaults: PartialCredentials) -> Self {
        self.defaults = defaults;
        self
    }

    /// Use the `INTOUCH_*` environment variables as defaults.
    pub fn env_defaults(self) -> Self {
        self.defaults(PartialCredentials::from_env())
    }

    pub fn agent_code(mut self, value: impl Into<String>) -> Self {
        self.params.agent_code = Some(value.into());
        self
    }

    pub fn partner_id(mut self, value: impl Into<String>) -> Self {
        self.params.partner_id = Some(value.into());
        self
    }

    pub fn partner_name(mut self, value: impl Into<String>) -> Self {
        self.params.partner_name = Some(value.into());
        self
    }

    pub fn login_api(mut self, value: impl Into<String>) -> Self {
        self.params.login_api = Some(value.into());
        self
    }

    pub fn password_api(mut self, value: impl Into<String>) -> Self {
        self.params.password_api = Some(value.into());
        self
    }

    pub fn username(mut self, value: impl Into<String>) -> Self {
        self.params.username = Some(value.into());
        self
    }

    pub fn password(mut self, value: impl Into<String>) -> Self {
        self.params.password = Some(value.into());
        self
    }

    pub fn urls(mut self, urls: GatewayUrls) -> Self {
        self.urls = urls;
        self
    }

    pub fn auth_scheme(mut self, auth: AuthScheme) -> Self {
        self.auth = auth;
        self
    }

    /// Per-request timeout. Ignored when a custom
    /// [`http_client`](Self::http_client) is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Replace the HTTP transport entirely, e.g. with a test double.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<Intouch, ConfigError> {
        let explicit = self.explicit.map(PartialCredentials::from).unwrap_or_default();
        let credentials = explicit.or(self.params).or(self.defaults).resolve()?;
        self.urls.check()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let http = match self.http {
                    Some(http) => http,
                    None => reqwest::Client::builder().timeout(self.timeout).build()?,
                };
                Arc::new(HttpTransport::new(http, &credentials, self.auth))
            }
        };

        tracing::debug!(
            agent_code = %credentials.agent_code,
            auth = ?self.auth,
            "intouch client ready"
        );

        let gateway = Gateway {
            transport,
            credentials: Arc::new(credentials),
            urls: Arc::new(self.urls),
        };
        Ok(Intouch {
            balance: Balance {
                gateway: gateway.clone(),
            },
            cashin: Cashin {
                gateway: gateway.clone(),
            },
            cashout: Cashout { gateway },
        })
    }
}
