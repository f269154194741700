//! # Protocol Configuration & Constants
//!
//! Every magic number for fee sponsorship lives here, together with
//! [`GaslessConfig`], the explicit bundle of endpoints handed to the
//! relayer and node clients. Nothing in this crate reads endpoints from
//! module-level state; tests point a config at a mock relayer and move on.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Fee Parameters
// ---------------------------------------------------------------------------

/// How many minimum fees the sponsor transaction carries. One for itself,
/// one for the zero-fee user transaction sharing its group.
pub const SPONSOR_FEE_MULTIPLIER: u64 = 2;

// ---------------------------------------------------------------------------
// Transaction Limits
// ---------------------------------------------------------------------------

/// Maximum number of transactions the network accepts in one atomic group.
pub const MAX_GROUP_SIZE: usize = 16;

/// Number of rounds a freshly built transaction stays valid for.
pub const DEFAULT_VALIDITY_WINDOW: u64 = 1_000;

/// Maximum note payload in bytes. The network rejects anything longer.
pub const MAX_NOTE_LENGTH: usize = 1_024;

/// Domain-separation prefix for transaction ids and signatures.
pub const TXN_HASH_PREFIX: &[u8] = b"TX";

/// Domain-separation prefix for group ids.
pub const GROUP_HASH_PREFIX: &[u8] = b"TG";

// ---------------------------------------------------------------------------
// Relayer Endpoints
// ---------------------------------------------------------------------------

/// Relayer path returning `{ "address": ... }`.
pub const SPONSOR_ADDRESS_PATH: &str = "/sponsor/address";

/// Relayer path accepting the partially-signed group.
pub const SIGN_AND_SUBMIT_PATH: &str = "/sponsor/sign-and-submit";

// ---------------------------------------------------------------------------
// Backend Endpoints
// ---------------------------------------------------------------------------

/// Backend health path reporting `gaslessEnabled`. Served from the backend
/// root, not under the relayer prefix.
pub const HEALTH_PATH: &str = "/api/health";

/// Backend path describing the sponsor account and its balance.
pub const SPONSOR_INFO_PATH: &str = "/api/sponsor/info";

// ---------------------------------------------------------------------------
// Node Endpoints
// ---------------------------------------------------------------------------

/// Node path returning suggested transaction parameters.
pub const TRANSACTION_PARAMS_PATH: &str = "/v2/transactions/params";

/// Local development backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

/// Local development relayer, mounted under the backend.
pub const DEFAULT_RELAYER_URL: &str = "http://localhost:3001/api/algo";

/// Public testnet node.
pub const DEFAULT_NODE_URL: &str = "https://testnet-api.4160.nodely.dev";

/// Block explorer used to build links when the relayer does not send one.
pub const DEFAULT_EXPLORER_URL: &str = "https://testnet.explorer.perawallet.app";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

pub const ENV_RELAYER_URL: &str = "CAMPUSTRUST_RELAYER_URL";
pub const ENV_BACKEND_URL: &str = "CAMPUSTRUST_BACKEND_URL";
pub const ENV_NODE_URL: &str = "CAMPUSTRUST_NODE_URL";
pub const ENV_EXPLORER_URL: &str = "CAMPUSTRUST_EXPLORER_URL";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "CAMPUSTRUST_HTTP_TIMEOUT_SECS";

// ---------------------------------------------------------------------------
// GaslessConfig
// ---------------------------------------------------------------------------

/// Endpoints and transport settings for one gasless client.
///
/// `request_timeout` bounds individual HTTP requests only. The wallet
/// signing step is never timed out here; a caller that wants to give up on
/// a slow approval drops the future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaslessConfig {
    /// Relayer base URL, e.g. `http://localhost:3001/api/algo`.
    pub relayer_url: String,
    /// Backend root serving health and sponsor info, e.g. `http://localhost:3001`.
    pub backend_url: String,
    /// Node base URL used by [`crate::network::NodeClient`].
    pub node_url: String,
    /// Explorer base URL for transaction links.
    pub explorer_url: String,
    /// Per-request HTTP timeout. `None` leaves it to the OS.
    pub request_timeout: Option<Duration>,
}

impl Default for GaslessConfig {
    fn default() -> Self {
        Self {
            relayer_url: DEFAULT_RELAYER_URL.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            node_url: DEFAULT_NODE_URL.to_string(),
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl GaslessConfig {
    /// Builds a config from `CAMPUSTRUST_*` environment variables, falling
    /// back to the defaults for anything unset. An unparsable timeout is
    /// ignored rather than treated as zero.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with variables read through
    /// `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_RELAYER_URL) {
            config.relayer_url = url;
        }
        if let Some(url) = lookup(ENV_BACKEND_URL) {
            config.backend_url = url;
        }
        if let Some(url) = lookup(ENV_NODE_URL) {
            config.node_url = url;
        }
        if let Some(url) = lookup(ENV_EXPLORER_URL) {
            config.explorer_url = url;
        }
        if let Some(secs) = lookup(ENV_HTTP_TIMEOUT_SECS).and_then(|s| s.trim().parse::<u64>().ok()) {
            config.request_timeout = Some(Duration::from_secs(secs));
        }
        config
    }

    /// Use a different relayer.
    pub fn with_relayer_url(mut self, url: impl Into<String>) -> Self {
        self.relayer_url = url.into();
        self
    }

    /// Use a different backend for health and sponsor info.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    /// Use a different node.
    pub fn with_node_url(mut self, url: impl Into<String>) -> Self {
        self.node_url = url.into();
        self
    }

    /// Use a different explorer.
    pub fn with_explorer_url(mut self, url: impl Into<String>) -> Self {
        self.explorer_url = url.into();
        self
    }

    /// Bound each HTTP request.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Joins a relayer path onto the base URL without doubling slashes.
    pub fn relayer_endpoint(&self, path: &str) -> String {
        join_url(&self.relayer_url, path)
    }

    /// Joins a backend path onto the backend root.
    pub fn backend_endpoint(&self, path: &str) -> String {
        join_url(&self.backend_url, path)
    }

    /// Joins a node path onto the base URL without doubling slashes.
    pub fn node_endpoint(&self, path: &str) -> String {
        join_url(&self.node_url, path)
    }

    /// Explorer link for a confirmed transaction id.
    pub fn explorer_tx_url(&self, tx_id: &str) -> String {
        join_url(&self.explorer_url, &format!("/tx/{}", tx_id))
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn sponsor_covers_exactly_two_transactions() {
        assert_eq!(SPONSOR_FEE_MULTIPLIER, 2);
    }

    #[test]
    fn hash_prefixes_are_distinct() {
        assert_ne!(TXN_HASH_PREFIX, GROUP_HASH_PREFIX);
    }

    #[test]
    fn relayer_endpoint_handles_trailing_slash() {
        let config = GaslessConfig::default().with_relayer_url("http://relayer.test/api/algo/");
        assert_eq!(
            config.relayer_endpoint(SPONSOR_ADDRESS_PATH),
            "http://relayer.test/api/algo/sponsor/address"
        );
        assert_eq!(
            config.relayer_endpoint(SIGN_AND_SUBMIT_PATH),
            "http://relayer.test/api/algo/sponsor/sign-and-submit"
        );
    }

    #[test]
    fn health_and_sponsor_info_live_at_backend_root() {
        let config = GaslessConfig::default();
        assert_eq!(config.backend_endpoint(HEALTH_PATH), "http://localhost:3001/api/health");
        assert_eq!(
            config.backend_endpoint(SPONSOR_INFO_PATH),
            "http://localhost:3001/api/sponsor/info"
        );
        assert_ne!(config.backend_endpoint(HEALTH_PATH), config.relayer_endpoint(HEALTH_PATH));
    }

    #[test]
    fn explorer_link_format() {
        let config = GaslessConfig::default().with_explorer_url("https://explorer.test");
        assert_eq!(
            config.explorer_tx_url("ABC123"),
            "https://explorer.test/tx/ABC123"
        );
    }

    #[test]
    fn default_config_has_no_timeout() {
        let config = GaslessConfig::default();
        assert_eq!(config.relayer_url, DEFAULT_RELAYER_URL);
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn builder_setters_override_defaults() {
        let config = GaslessConfig::default()
            .with_node_url("http://node.test")
            .with_request_timeout(Duration::from_secs(5));
        assert_eq!(config.node_endpoint(TRANSACTION_PARAMS_PATH), "http://node.test/v2/transactions/params");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn from_lookup_overlays_set_variables() {
        let vars: HashMap<&str, &str> = [
            (ENV_RELAYER_URL, "http://relayer.test/api/algo"),
            (ENV_BACKEND_URL, "http://backend.test"),
            (ENV_HTTP_TIMEOUT_SECS, "15"),
        ]
        .into_iter()
        .collect();

        let config = GaslessConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.relayer_url, "http://relayer.test/api/algo");
        assert_eq!(config.backend_url, "http://backend.test");
        assert_eq!(config.node_url, DEFAULT_NODE_URL);
        assert_eq!(config.explorer_url, DEFAULT_EXPLORER_URL);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn from_lookup_ignores_unparsable_timeout() {
        for bad in ["soon", "-3", "1.5", ""] {
            let config = GaslessConfig::from_lookup(|key| {
                (key == ENV_HTTP_TIMEOUT_SECS).then(|| bad.to_string())
            });
            assert!(config.request_timeout.is_none(), "timeout {bad:?} should be ignored");
        }
    }

    #[test]
    fn from_lookup_with_nothing_set_is_default() {
        assert_eq!(GaslessConfig::from_lookup(|_| None), GaslessConfig::default());
    }

    #[test]
    fn from_env_reads_timeout_variable() {
        // Only this test touches the variable.
        std::env::set_var(ENV_HTTP_TIMEOUT_SECS, "not-a-number");
        assert!(GaslessConfig::from_env().request_timeout.is_none());
        std::env::set_var(ENV_HTTP_TIMEOUT_SECS, "7");
        assert_eq!(GaslessConfig::from_env().request_timeout, Some(Duration::from_secs(7)));
        std::env::remove_var(ENV_HTTP_TIMEOUT_SECS);
    }
}
