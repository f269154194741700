//! Error types for the gasless transfer flow.
//!
//! Every failure aborts the whole transfer. Nothing here is retried; a
//! caller that wants to try again restarts the flow so it gets fresh
//! params and a new group.

use thiserror::Error;

use crate::network::NetworkError;
use crate::relayer::RelayerError;
use crate::transaction::{EncodingError, GroupError, TransactionError};

/// A network call failed before any response could be interpreted.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("relayer: {0}")]
    Relayer(#[from] RelayerError),

    #[error("node: {0}")]
    Node(#[from] NetworkError),
}

/// Errors that can occur while sending a sponsored payment.
#[derive(Debug, Error)]
pub enum GaslessError {
    /// The relayer reported no sponsor address.
    #[error("sponsor unavailable: relayer returned no sponsor address")]
    SponsorUnavailable,

    /// The wallet returned nothing usable for the user's transaction, or
    /// the signing call itself failed.
    #[error("user declined transaction or signing failed: {reason}")]
    UserDeclinedOrSigningFailed { reason: String },

    /// The relayer accepted the request but reported failure.
    #[error("sponsorship failed: {0}")]
    SponsorshipFailed(String),

    /// DNS, connect, timeout, or an unreadable body.
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The user transaction failed structural checks before signing.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(#[from] TransactionError),

    #[error("grouping failed: {0}")]
    Group(#[from] GroupError),

    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),
}

impl From<RelayerError> for GaslessError {
    fn from(e: RelayerError) -> Self {
        GaslessError::Transport(TransportError::Relayer(e))
    }
}

impl From<NetworkError> for GaslessError {
    fn from(e: NetworkError) -> Self {
        GaslessError::Transport(TransportError::Node(e))
    }
}

impl GaslessError {
    pub fn is_transport(&self) -> bool {
        matches!(self, GaslessError::Transport(_))
    }
}
