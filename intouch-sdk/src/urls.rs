//! Endpoint URL templates.
//!
//! Pure string templating over [`GatewayUrls`]. Agent codes are
//! percent-encoded as path segments and credentials as query values.

use urlencoding::encode;

use crate::config::{CashinUrlStyle, GatewayUrls};

/// `PUT` target for cash-out.
///
/// `{touchpay}/touchpayapi/v1/{agent}/transaction?loginAgent=..&passwordAgent=..`
pub fn cashout_url(urls: &GatewayUrls, agent_code: &str, login: &str, password: &str) -> String {
    format!(
        "{}/touchpayapi/v1/{}/transaction?loginAgent={}&passwordAgent={}",
        base(&urls.touchpay),
        encode(agent_code),
        encode(login),
        encode(password),
    )
}

/// `POST` target for cash-in.
///
/// With [`CashinUrlStyle::Path`] the credentials are *not* part of the URL;
/// they travel in the body as `login_api` / `password_api`.
pub fn cashin_url(urls: &GatewayUrls, agent_code: &str, login: &str, password: &str) -> String {
    match urls.cashin_style {
        CashinUrlStyle::Path => format!(
            "{}/sec/{}/cashin",
            base(&urls.distribution),
            encode(agent_code)
        ),
        CashinUrlStyle::Transaction => format!(
            "{}/sec/touchpayapi/{}/transaction?loginAgent={}&passwordAgent={}",
            base(&urls.distribution),
            encode(agent_code),
            encode(login),
            encode(password),
        ),
    }
}

/// `POST` target for balance inquiry.
pub fn balance_url(urls: &GatewayUrls, agent_code: &str) -> String {
    format!(
        "{}/sec/{}/get_balance",
        base(&urls.distribution),
        encode(agent_code)
    )
}

fn base(url: &str) -> &str {
    url.trim_end_matches('/')
}
