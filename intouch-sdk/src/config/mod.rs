//! Client configuration: credentials, gateway endpoints and auth settings.

mod credentials;
mod gateway;

pub use credentials::{Credentials, PartialCredentials};
pub use gateway::{AuthScheme, CashinUrlStyle, DEFAULT_TIMEOUT, GatewayUrls};

/// Environment variables read by [`PartialCredentials::from_env`].
pub mod env {
    pub const AGENT_CODE: &str = "INTOUCH_AGENT_CODE";
    pub const PARTNER_ID: &str = "INTOUCH_PARTNER_ID";
    pub const PARTNER_NAME: &str = "INTOUCH_PARTNER_NAME";
    pub const LOGIN_API: &str = "INTOUCH_LOGIN_API";
    pub const PASSWORD_API: &str = "INTOUCH_PASSWORD_API";
    pub const USERNAME: &str = "INTOUCH_CI_USERNAME";
    pub const PASSWORD: &str = "INTOUCH_CI_PASSWORD";
}

/// Errors raised while building a client. Nothing has touched the network
/// when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} is required: set {env_var} or pass it explicitly")]
    Missing {
        field: &'static str,
        env_var: &'static str,
    },

    #[error("invalid gateway url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[cfg(feature = "client")]
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
