//! Suggested transaction parameters.
//!
//! [`NodeClient`] reads `GET {node}/v2/transactions/params`:
//!
//! ```json
//! { "fee": 0, "min-fee": 1000, "last-round": 40123456,
//!   "genesis-id": "testnet-v1.0", "genesis-hash": "SGO1GKSz..." }
//! ```
//!
//! and turns it into a [`SuggestedParams`] valid from `last-round` for
//! [`DEFAULT_VALIDITY_WINDOW`](crate::config::DEFAULT_VALIDITY_WINDOW) rounds.
//! `min-fee` is required and must be non-zero; the sponsor fee is derived
//! from it.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::build_http_client;
use crate::config::{self, GaslessConfig};
use crate::transaction::types::{ParamsError, SuggestedParams};

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("node request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("node returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("node returned unusable params: {0}")]
    InvalidParams(#[from] ParamsError),
}

/// Anything that can report current network parameters.
#[async_trait]
pub trait ParamsSource: Send + Sync {
    async fn suggested_params(&self) -> Result<SuggestedParams, NetworkError>;
}

// ---------------------------------------------------------------------------
// NodeClient
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct NodeParamsResponse {
    min_fee: u64,
    last_round: u64,
    genesis_id: String,
    genesis_hash: String,
}

/// HTTP client for a node's REST API.
#[derive(Debug, Clone)]
pub struct NodeClient {
    http: reqwest::Client,
    params_url: String,
}

impl NodeClient {
    pub fn new(config: &GaslessConfig) -> Result<Self, NetworkError> {
        Ok(Self {
            http: build_http_client(config)?,
            params_url: config.node_endpoint(config::TRANSACTION_PARAMS_PATH),
        })
    }
}

#[async_trait]
impl ParamsSource for NodeClient {
    async fn suggested_params(&self) -> Result<SuggestedParams, NetworkError> {
        let response = self.http.get(&self.params_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw: NodeParamsResponse = response.json().await?;
        let params = SuggestedParams::from_round(
            raw.last_round,
            raw.min_fee,
            raw.genesis_id,
            raw.genesis_hash,
        )?;
        tracing::debug!(
            first_valid = params.first_valid,
            last_valid = params.last_valid,
            min_fee = params.min_fee,
            "fetched suggested params"
        );
        Ok(params)
    }
}

// ---------------------------------------------------------------------------
// StaticParams
// ---------------------------------------------------------------------------

/// A source that always returns the same params. For tests and offline
/// construction.
#[derive(Debug, Clone)]
pub struct StaticParams(pub SuggestedParams);

#[async_trait]
impl ParamsSource for StaticParams {
    async fn suggested_params(&self) -> Result<SuggestedParams, NetworkError> {
        Ok(self.0.clone())
    }
}
