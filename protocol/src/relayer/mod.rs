//! # Relayer Client
//!
//! The relayer is an external backend trusted with the sponsor's key. It
//! completes the sponsor's signature and broadcasts the group. This module
//! only speaks its HTTP contract:
//!
//! | Method | Path                       | Body / Response                                   |
//! |--------|----------------------------|---------------------------------------------------|
//! | GET    | `/sponsor/address`         | `{ "address": string }`                           |
//! | POST   | `/sponsor/sign-and-submit` | `{ signedUserTxns, unsignedSponsorTxn }` → `{ success, error?, txId?, ... }` |
//!
//! Paths are joined onto [`GaslessConfig::relayer_url`](crate::config::GaslessConfig).
//! Two more endpoints live at the backend root
//! ([`GaslessConfig::backend_url`](crate::config::GaslessConfig)):
//!
//! | Method | Path                | Response                                                          |
//! |--------|---------------------|-------------------------------------------------------------------|
//! | GET    | `/api/health`       | `{ "gaslessEnabled": bool, ... }`                                 |
//! | GET    | `/api/sponsor/info` | `{ configured, address?, balance?, minBalance?, availableForFees? }` |

pub mod client;
pub mod types;

pub use client::{RelayerClient, RelayerError};
pub use types::{
    HealthResponse, RelayerReceipt, RelayerResponse, SignAndSubmitRequest, SponsorAddressResponse,
    SponsorInfo,
};
