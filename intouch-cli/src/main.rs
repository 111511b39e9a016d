//! Intouch CLI
//!
//! Command-line front end for the Intouch mobile-money gateway: balance
//! inquiry, cash-in and cash-out against the four Côte d'Ivoire operators.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use commands::{CashinArgs, CashoutArgs};
use config::ConfigLoader;
use intouch_sdk::PartialCredentials;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Intouch - mobile-money gateway client
#[derive(Parser, Debug)]
#[command(name = "intouch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file; the INTOUCH_* environment
    /// variables fill whatever it leaves out
    #[arg(short, long, env = "INTOUCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Query the partner account balance
    Balance,
    /// Credit a subscriber's wallet
    Cashin(CashinArgs),
    /// Collect a merchant payment from a subscriber's wallet
    Cashout(CashoutArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    let intouch = ConfigLoader::new(args.config.as_ref())
        .client(PartialCredentials::from_env())
        .map_err(|e| {
            tracing::error!("Failed to configure client: {}", e);
            e
        })?;

    let response = match args.command {
        Command::Balance => serde_json::to_value(intouch.balance().get().await?)?,
        Command::Cashin(cashin) => commands::cashin(&intouch, cashin).await?,
        Command::Cashout(cashout) => commands::cashout(&intouch, cashout).await?,
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
