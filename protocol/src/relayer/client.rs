//! HTTP client for the sponsorship relayer.

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{
    HealthResponse, RelayerResponse, SignAndSubmitRequest, SponsorAddressResponse, SponsorInfo,
};
use crate::config::{self, GaslessConfig};
use crate::network::build_http_client;

#[derive(Debug, Error)]
pub enum RelayerError {
    #[error("relayer request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relayer returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("relayer returned a malformed body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Talks to one relayer. Cheap to clone; clones share a connection pool.
#[derive(Debug, Clone)]
pub struct RelayerClient {
    http: reqwest::Client,
    config: GaslessConfig,
}

impl RelayerClient {
    pub fn new(config: GaslessConfig) -> Result<Self, RelayerError> {
        Ok(Self {
            http: build_http_client(&config)?,
            config,
        })
    }

    pub fn config(&self) -> &GaslessConfig {
        &self.config
    }

    /// `GET /sponsor/address`. `Ok(None)` when the relayer answers without
    /// a usable address.
    ///
    /// The body is read even on an error status; a relayer that has no
    /// sponsor wallet answers 500 with `{ "error": ... }` and no address.
    pub async fn sponsor_address(&self) -> Result<Option<String>, RelayerError> {
        let url = self.config.relayer_endpoint(config::SPONSOR_ADDRESS_PATH);
        let response = self.http.get(&url).send().await?;
        let parsed: SponsorAddressResponse = read_body(response).await?;
        Ok(parsed.usable_address())
    }

    /// `GET {backend}/api/sponsor/info`: whether a sponsor is configured and
    /// how much it can still spend on fees.
    ///
    /// An unconfigured backend answers `{ "configured": false, ... }`; that
    /// is a successful call, not an error.
    pub async fn sponsor_info(&self) -> Result<SponsorInfo, RelayerError> {
        let url = self.config.backend_endpoint(config::SPONSOR_INFO_PATH);
        let response = self.http.get(&url).send().await?;
        let info: SponsorInfo = read_body(response).await?;
        tracing::debug!(configured = info.configured, "fetched sponsor info");
        Ok(info)
    }

    /// `POST /sponsor/sign-and-submit`. Returns the parsed body whatever
    /// its `success` value; interpreting failure is up to the caller.
    pub async fn sign_and_submit(
        &self,
        request: &SignAndSubmitRequest,
    ) -> Result<RelayerResponse, RelayerError> {
        let url = self.config.relayer_endpoint(config::SIGN_AND_SUBMIT_PATH);
        let response = self.http.post(&url).json(request).send().await?;
        read_body::<RelayerResponse>(response).await
    }

    /// `GET {backend}/api/health`, reduced to the `gaslessEnabled` flag.
    /// Any failure reads as disabled.
    pub async fn gasless_enabled(&self) -> bool {
        let url = self.config.backend_endpoint(config::HEALTH_PATH);
        let result = async {
            let response = self.http.get(&url).send().await?.error_for_status()?;
            response.json::<HealthResponse>().await
        }
        .await;

        match result {
            Ok(health) => health.gasless_enabled,
            Err(e) => {
                tracing::debug!(error = %e, "relayer health probe failed");
                false
            }
        }
    }
}

/// Parse a JSON body whatever the status. The backend reports failures as
/// JSON with a 500, so only a body that does not parse is an error, and a
/// non-2xx one keeps its status.
async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RelayerError> {
    let status = response.status();
    let body = response.bytes().await?;

    match serde_json::from_slice::<T>(&body) {
        Ok(parsed) => Ok(parsed),
        Err(_) if !status.is_success() => Err(RelayerError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        }),
        Err(e) => Err(RelayerError::MalformedBody(e)),
    }
}
