//! Credential bundle and its resolution from several sources.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ConfigError, env};

/// Everything the gateway needs to authenticate a partner.
///
/// `login_api` / `password_api` travel in request bodies and cash-out
/// URLs; `username` / `password` are the HTTP auth credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub agent_code: String,
    pub partner_id: String,
    pub partner_name: String,
    pub login_api: String,
    pub password_api: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("agent_code", &self.agent_code)
            .field("partner_id", &self.partner_id)
            .field("partner_name", &self.partner_name)
            .field("login_api", &self.login_api)
            .field("password_api", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// One source's view of the credentials; any field may be missing.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialCredentials {
    pub agent_code: Option<String>,
    pub partner_id: Option<String>,
    pub partner_name: Option<String>,
    pub login_api: Option<String>,
    pub password_api: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl fmt::Debug for PartialCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("PartialCredentials")
            .field("agent_code", &self.agent_code)
            .field("partner_id", &self.partner_id)
            .field("partner_name", &self.partner_name)
            .field("login_api", &self.login_api)
            .field("password_api", &redacted(&self.password_api))
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .finish()
    }
}

impl From<Credentials> for PartialCredentials {
    fn from(c: Credentials) -> Self {
        Self {
            agent_code: Some(c.agent_code),
            partner_id: Some(c.partner_id),
            partner_name: Some(c.partner_name),
            login_api: Some(c.login_api),
            password_api: Some(c.password_api),
            username: Some(c.username),
            password: Some(c.password),
        }
    }
}

impl PartialCredentials {
    /// Read the `INTOUCH_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            agent_code: lookup(env::AGENT_CODE),
            partner_id: lookup(env::PARTNER_ID),
            partner_name: lookup(env::PARTNER_NAME),
            login_api: lookup(env::LOGIN_API),
            password_api: lookup(env::PASSWORD_API),
            username: lookup(env::USERNAME),
            password: lookup(env::PASSWORD),
        }
    }

    /// Field by field, keep `self` where it is set and non-empty, otherwise
    /// take `fallback`.
    pub fn or(self, fallback: PartialCredentials) -> Self {
        fn pick(primary: Option<String>, fallback: Option<String>) -> Option<String> {
            primary.filter(|v| !v.is_empty()).or(fallback)
        }
        Self {
            agent_code: pick(self.agent_code, fallback.agent_code),
            partner_id: pick(self.partner_id, fallback.partner_id),
            partner_name: pick(self.partner_name, fallback.partner_name),
            login_api: pick(self.login_api, fallback.login_api),
            password_api: pick(self.password_api, fallback.password_api),
            username: pick(self.username, fallback.username),
            password: pick(self.password, fallback.password),
        }
    }

    /// Turn into [`Credentials`], failing on the first missing or empty
    /// field.
    pub fn resolve(self) -> Result<Credentials, ConfigError> {
        fn require(
            value: Option<String>,
            field: &'static str,
            env_var: &'static str,
        ) -> Result<String, ConfigError> {
            value
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing { field, env_var })
        }
        Ok(Credentials {
            agent_code: require(self.agent_code, "agent code", env::AGENT_CODE)?,
            partner_id: require(self.partner_id, "partner id", env::PARTNER_ID)?,
            partner_name: require(self.partner_name, "partner name", env::PARTNER_NAME)?,
            login_api: require(self.login_api, "login api", env::LOGIN_API)?,
            password_api: require(self.password_api, "password api", env::PASSWORD_API)?,
            username: require(self.username, "username", env::USERNAME)?,
            password: require(self.password, "password", env::PASSWORD)?,
        })
    }
}
