//! Relayer wire types.
//!
//! Field names match the relayer's JSON exactly (`signedUserTxns`,
//! `unsignedSponsorTxn`, `txId`, ...). Unknown response fields are kept in
//! `extra` so callers see everything the relayer reported.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::GaslessConfig;

/// `GET /sponsor/address` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorAddressResponse {
    #[serde(default)]
    pub address: Option<String>,
}

impl SponsorAddressResponse {
    /// The address if present and non-blank.
    pub fn usable_address(self) -> Option<String> {
        self.address.filter(|a| !a.trim().is_empty())
    }
}

/// `POST /sponsor/sign-and-submit` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignAndSubmitRequest {
    /// Base64 signed user transactions, in group order.
    pub signed_user_txns: Vec<String>,
    /// Base64 unsigned sponsor transaction, last in the group.
    pub unsigned_sponsor_txn: String,
}

/// `POST /sponsor/sign-and-submit` response.
///
/// The reference relayer answers failures with HTTP 500 and
/// `{ "success": false, "error": "..." }`, so a body that parses is
/// interpreted regardless of status.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayerResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET {backend}/api/sponsor/info` response.
///
/// Balances are whole currency units as the backend reports them, not
/// microunits. An unconfigured backend sends only `configured: false` and
/// a `message`; a failing one sends only `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsorInfo {
    #[serde(default)]
    pub configured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_for_fees: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET {backend}/api/health` response. Only the flag this crate cares
/// about is typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    #[serde(default)]
    pub gasless_enabled: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What a successful sponsored transfer hands back to the caller.
///
/// Confirmation tracking is the caller's job; `tx_id` is what to track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayerReceipt {
    pub tx_id: Option<String>,
    pub explorer_url: Option<String>,
    /// Every other field the relayer returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RelayerReceipt {
    /// The relayer's explorer link, or one built from `tx_id`.
    pub fn explorer_link(&self, config: &GaslessConfig) -> Option<String> {
        self.explorer_url
            .clone()
            .or_else(|| self.tx_id.as_deref().map(|id| config.explorer_tx_url(id)))
    }
}

impl From<RelayerResponse> for RelayerReceipt {
    fn from(response: RelayerResponse) -> Self {
        Self {
            tx_id: response.tx_id,
            explorer_url: response.explorer_url,
            extra: response.extra,
        }
    }
}
