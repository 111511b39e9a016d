//! Subcommand arguments and their mapping onto SDK calls.

use anyhow::Context;
use clap::Args;
use intouch_sdk::Provider;
use intouch_sdk::client::Intouch;
use intouch_sdk::objects::{
    AdditionalInfos, CashinRequest, CashoutRequest, OrangeMoneyInfos, WaveInfos,
    new_transaction_id,
};
use rust_decimal::Decimal;
use serde_json::Value;

#[derive(Args, Debug)]
pub struct CashinArgs {
    /// OM_CI, MOOV_CI, MTN_CI or WAVE_CI
    pub provider: Provider,

    /// Recipient phone number
    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub amount: Decimal,

    /// Partner transaction id; generated when omitted
    #[arg(long)]
    pub transaction_id: Option<String>,

    /// URL the gateway notifies when the transaction settles
    #[arg(long)]
    pub callback: String,
}

#[derive(Args, Debug)]
pub struct CashoutArgs {
    /// OM_CI, MOOV_CI, MTN_CI or WAVE_CI
    pub provider: Provider,

    /// Client transaction id; generated when omitted
    #[arg(long)]
    pub id: Option<String>,

    #[arg(long)]
    pub amount: Decimal,

    #[arg(long)]
    pub callback: String,

    /// Payer phone number
    #[arg(long)]
    pub recipient: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub destinataire: String,

    /// One-time password generated by the payer (OM_CI only)
    #[arg(long)]
    pub otp: Option<String>,

    /// Wave redirect after payment; replaced by --callback when it is set
    #[arg(long)]
    pub return_url: Option<String>,

    /// Wave redirect on cancellation; replaced by --callback when it is set
    #[arg(long)]
    pub cancel_url: Option<String>,
}

impl CashinArgs {
    fn into_request(self) -> CashinRequest {
        let partner_transaction_id = self.transaction_id.unwrap_or_else(new_transaction_id);
        tracing::info!(%partner_transaction_id, provider = %self.provider, "cash-in");
        CashinRequest {
            recipient_phone_number: self.phone,
            amount: self.amount,
            partner_transaction_id,
            call_back_url: self.callback,
        }
    }
}

impl CashoutArgs {
    fn into_request(self) -> CashoutRequest<AdditionalInfos> {
        let id_from_client = self.id.unwrap_or_else(new_transaction_id);
        tracing::info!(%id_from_client, provider = %self.provider, "cash-out");
        CashoutRequest {
            id_from_client,
            amount: self.amount,
            callback: self.callback,
            recipient_number: self.recipient,
            additional_infos: AdditionalInfos {
                recipient_email: self.email,
                recipient_first_name: self.first_name,
                recipient_last_name: self.last_name,
                destinataire: self.destinataire,
            },
        }
    }
}

pub async fn cashin(intouch: &Intouch, args: CashinArgs) -> anyhow::Result<Value> {
    let provider = args.provider;
    let response = intouch.cashin().send(provider, args.into_request()).await?;
    Ok(serde_json::to_value(response)?)
}

pub async fn cashout(intouch: &Intouch, args: CashoutArgs) -> anyhow::Result<Value> {
    let provider = args.provider;
    let otp = args.otp.clone();
    let (return_url, cancel_url) = (args.return_url.clone(), args.cancel_url.clone());
    let request = args.into_request();
    let cashout = intouch.cashout();

    let response = match provider {
        Provider::OmCi => {
            let otp = otp.context("--otp is required for OM_CI cash-out")?;
            let request = request.map_infos(|recipient, _| OrangeMoneyInfos { recipient, otp });
            cashout.om_ci(request).await?
        }
        Provider::MoovCi => cashout.moov_ci(request).await?,
        Provider::MtnCi => cashout.mtn_ci(request).await?,
        Provider::WaveCi => {
            let request = request.map_infos(|recipient, _| WaveInfos {
                recipient,
                return_url,
                cancel_url,
            });
            cashout.wave_ci(request).await?
        }
    };
    Ok(serde_json::to_value(response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Cli {
        #[command(flatten)]
        cashout: CashoutArgs,
    }

    fn parse(extra: &[&str]) -> CashoutArgs {
        let mut argv = vec![
            "intouch",
            "MTN_CI",
            "--amount",
            "100",
            "--callback",
            "https://callbackurl.com",
            "--recipient",
            "0708517414",
            "--email",
            "tester@gmail.com",
            "--first-name",
            "Testeur",
            "--last-name",
            "lastname",
            "--destinataire",
            "0708517414",
        ];
        argv.extend_from_slice(extra);
        Cli::try_parse_from(argv).unwrap().cashout
    }

    #[test]
    fn test_cashout_request_generates_an_id() {
        let request = parse(&[]).into_request();
        assert_eq!(request.id_from_client.len(), 32);
        assert_eq!(request.amount, Decimal::from(100));
        assert_eq!(request.additional_infos.recipient_email, "tester@gmail.com");
    }

    #[test]
    fn test_cashout_request_keeps_explicit_id() {
        let request = parse(&["--id", "C-42", "--otp", "5278"]).into_request();
        assert_eq!(request.id_from_client, "C-42");
    }

    #[test]
    fn test_cashin_request_mapping() {
        let args = CashinArgs {
            provider: Provider::OmCi,
            phone: "76537327".into(),
            amount: Decimal::from(500),
            transaction_id: Some("T1".into()),
            callback: "https://example.com".into(),
        };
        let request = args.into_request();
        assert_eq!(request.partner_transaction_id, "T1");
        assert_eq!(request.recipient_phone_number, "76537327");
        assert_eq!(request.call_back_url, "https://example.com");
    }
}
