//! Typed client for the Intouch (GuTouch) mobile-money gateway.
//!
//! Covers cash-in, cash-out and balance inquiry for the four Côte d'Ivoire
//! operators (Orange Money, Moov, MTN, Wave). Every call is a single
//! validate → HTTP → validate round trip:
//!
//! ```rust,no_run
//! use intouch_sdk::client::Intouch;
//! use intouch_sdk::objects::cashin::CashinRequest;
//! use rust_decimal::Decimal;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let intouch = Intouch::from_env()?;
//!
//! let response = intouch
//!     .cashin()
//!     .om_ci(CashinRequest {
//!         recipient_phone_number: "76537327".into(),
//!         amount: Decimal::from(500),
//!         partner_transaction_id: "T1".into(),
//!         call_back_url: "https://example.com".into(),
//!     })
//!     .await?;
//! println!("{:?}", response.status);
//! # Ok(())
//! # }
//! ```
//!
//! The HTTP clients live behind the `client` feature (on by default) so
//! crates that only need the payload types and schemas do not pull in
//! `reqwest`.

#![forbid(unsafe_code)]

#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod objects;
pub mod schema;
pub mod urls;

pub use config::{ConfigError, Credentials, PartialCredentials};
pub use objects::Provider;
pub use schema::ValidationError;
