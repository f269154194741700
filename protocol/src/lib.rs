// Copyright (c) 2026 CampusTrust AI. MIT License.
// See LICENSE for details.

//! # CampusTrust Protocol — Gasless Transfers
//!
//! Students and staff on CampusTrust vote, collect credentials, and pay each
//! other without ever holding a fee balance. A sponsor account pays the
//! network fees through fee pooling inside an atomic group, and a backend
//! relayer holding the sponsor key completes and broadcasts each group.
//!
//! ## Architecture
//!
//! - **config** — Constants and the explicit [`GaslessConfig`](config::GaslessConfig).
//! - **crypto** — SHA-512/256 ids, Ed25519 keys, checksummed addresses.
//! - **transaction** — Payment building, atomic grouping, signing envelopes.
//! - **network** — Where fresh suggested params come from.
//! - **wallet** — The signing capability a wallet provides.
//! - **relayer** — The relayer's HTTP contract.
//! - **gasless** — The orchestrator tying it all together.
//!
//! ## Example
//!
//! ```rust,no_run
//! use campustrust_protocol::config::GaslessConfig;
//! use campustrust_protocol::crypto::CampusKeypair;
//! use campustrust_protocol::gasless::{GaslessOrchestrator, PaymentRequest};
//! use campustrust_protocol::network::NodeClient;
//! use campustrust_protocol::wallet::KeypairSigner;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GaslessConfig::from_env();
//! let orchestrator = GaslessOrchestrator::new(config.clone())?;
//! let node = NodeClient::new(&config)?;
//! let signer = KeypairSigner::new(CampusKeypair::generate());
//!
//! let request = PaymentRequest::new(signer.address(), "RECEIVER...", 1_000_000);
//! let receipt = orchestrator
//!     .send_gasless_payment(request, &node, &signer)
//!     .await?;
//! println!("submitted {:?}", receipt.tx_id);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod crypto;
pub mod gasless;
pub mod network;
pub mod relayer;
pub mod transaction;
pub mod wallet;
