//! # Network Module
//!
//! Where fresh network parameters come from.
//!
//! ```text
//! params.rs — ParamsSource trait, HTTP NodeClient, StaticParams
//! ```
//!
//! The orchestrator only needs one thing from a node: the current
//! [`SuggestedParams`](crate::transaction::SuggestedParams). Anything that can
//! produce them implements [`ParamsSource`], so tests swap the HTTP client
//! for a fixed value.

pub mod params;

pub use params::{NetworkError, NodeClient, ParamsSource, StaticParams};

use crate::config::GaslessConfig;

/// Build the shared `reqwest` client for a config, applying its timeout.
pub(crate) fn build_http_client(config: &GaslessConfig) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
