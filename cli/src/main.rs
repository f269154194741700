// Copyright (c) 2026 CampusTrust AI. MIT License.
// See LICENSE for details.

//! # CampusTrust CLI
//!
//! Entry point for the `campustrust` binary. Parses CLI arguments,
//! initializes logging, and drives the gasless transfer client.
//!
//! - `keygen`  — generate a keypair
//! - `sponsor` — show the relayer's sponsor address
//! - `status`  — check whether sponsorship is enabled and funded
//! - `send`    — send a sponsored payment
//! - `version` — print build version information

mod cli;
mod logging;

use anyhow::{bail, Context, Result};
use clap::Parser;

use campustrust_protocol::config::GaslessConfig;
use campustrust_protocol::crypto::{is_valid_address, CampusKeypair};
use campustrust_protocol::gasless::{GaslessOrchestrator, PaymentRequest};
use campustrust_protocol::network::NodeClient;
use campustrust_protocol::relayer::RelayerClient;
use campustrust_protocol::wallet::KeypairSigner;

use cli::{CampusTrustCli, Commands, GlobalArgs};
use logging::LogFormat;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CampusTrustCli::parse();

    logging::init_logging(
        "campustrust=info,campustrust_protocol=info",
        LogFormat::from_str_lossy(&cli.global.log_format),
    );

    let config = build_config(&cli.global);

    match cli.command {
        Commands::Keygen => {
            keygen();
            Ok(())
        }
        Commands::Sponsor => show_sponsor(config).await,
        Commands::Status => show_status(config).await,
        Commands::Send(args) => send(config, args).await,
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Environment first, then explicit flags on top.
fn build_config(global: &GlobalArgs) -> GaslessConfig {
    let mut config = GaslessConfig::from_env();
    if let Some(url) = &global.relayer_url {
        config = config.with_relayer_url(url.clone());
    }
    if let Some(url) = &global.backend_url {
        config = config.with_backend_url(url.clone());
    }
    if let Some(url) = &global.node_url {
        config = config.with_node_url(url.clone());
    }
    config
}

fn keygen() {
    let keypair = CampusKeypair::generate();
    println!("Address    : {}", keypair.address());
    println!("Secret key : {}", keypair.secret_key_hex());
    println!();
    println!("Store the secret key somewhere safe. Export it as CAMPUSTRUST_SECRET_KEY to send.");
}

async fn show_sponsor(config: GaslessConfig) -> Result<()> {
    let relayer = RelayerClient::new(config).context("failed to build relayer client")?;
    let address = relayer
        .sponsor_address()
        .await
        .with_context(|| format!("failed to query relayer at {}", relayer.config().relayer_url))?;

    match address {
        Some(address) => println!("{}", address),
        None => bail!("relayer reported no sponsor address"),
    }
    Ok(())
}

async fn show_status(config: GaslessConfig) -> Result<()> {
    let backend_url = config.backend_url.clone();
    let relayer = RelayerClient::new(config).context("failed to build relayer client")?;
    let enabled = relayer.gasless_enabled().await;
    let info = relayer
        .sponsor_info()
        .await
        .with_context(|| format!("failed to query sponsor info at {}", backend_url))?;

    println!("Backend         : {}", backend_url);
    println!("Gasless enabled : {}", if enabled { "yes" } else { "no" });
    println!("Sponsor         : {}", if info.configured { "configured" } else { "not configured" });
    if let Some(address) = &info.address {
        println!("  Address       : {}", address);
    }
    if let Some(balance) = info.balance {
        println!("  Balance       : {}", balance);
    }
    if let Some(min_balance) = info.min_balance {
        println!("  Min balance   : {}", min_balance);
    }
    if let Some(available) = info.available_for_fees {
        println!("  For fees      : {}", available);
    }
    if let Some(message) = info.message.as_deref().or(info.error.as_deref()) {
        println!("  Note          : {}", message);
    }
    Ok(())
}

async fn send(config: GaslessConfig, args: cli::SendArgs) -> Result<()> {
    if !is_valid_address(&args.to) {
        bail!("receiver address {:?} is not a valid CampusTrust address", args.to);
    }

    let keypair = CampusKeypair::from_hex(&args.secret_key).context("invalid secret key")?;
    let signer = KeypairSigner::new(keypair);
    let node = NodeClient::new(&config).context("failed to build node client")?;
    let orchestrator =
        GaslessOrchestrator::new(config).context("failed to build relayer client")?;

    let mut request = PaymentRequest::new(signer.address(), args.to.clone(), args.amount);
    if let Some(note) = args.note {
        request = request.with_note(note.into_bytes());
    }

    tracing::info!(
        sender = %request.sender,
        receiver = %request.receiver,
        amount = request.amount,
        "sending sponsored payment"
    );

    let receipt = orchestrator
        .send_gasless_payment(request, &node, &signer)
        .await
        .context("sponsored payment failed")?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&receipt).context("failed to render receipt")?
        );
        return Ok(());
    }

    println!("Payment submitted.");
    println!("  Transaction : {}", receipt.tx_id.as_deref().unwrap_or("(none reported)"));
    if let Some(link) = receipt.explorer_link(orchestrator.config()) {
        println!("  Explorer    : {}", link);
    }
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("campustrust {}", env!("CARGO_PKG_VERSION"));
    println!("rustc       {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}
