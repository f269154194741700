//! Core value types shared by every transaction in a sponsored group.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::config;

// ---------------------------------------------------------------------------
// SuggestedParams
// ---------------------------------------------------------------------------

/// Node-reported values that cannot produce a usable validity window or fee.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("node reported a minimum fee of zero")]
    ZeroMinFee,

    #[error("validity window starting at round {round} overflows")]
    RoundOverflow { round: u64 },
}

/// Network parameters for building a transaction, as reported by a node.
///
/// Both members of a sponsored group are built from one `SuggestedParams`
/// value so they share a validity window. Params are fetched fresh for
/// every transfer; a stale window gets the whole group rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedParams {
    /// Minimum fee any single transaction must carry, in microunits.
    pub min_fee: u64,
    /// First round the transaction is valid in.
    pub first_valid: u64,
    /// Last round the transaction is valid in (inclusive).
    pub last_valid: u64,
    /// Human-readable network id, e.g. `testnet-v1.0`.
    pub genesis_id: String,
    /// Base64 genesis hash pinning the network.
    pub genesis_hash: String,
}

impl SuggestedParams {
    /// Params valid from `round` for [`config::DEFAULT_VALIDITY_WINDOW`] rounds.
    ///
    /// A zero `min_fee` is rejected: the sponsor fee is derived from it and
    /// a zero-fee group would be refused by the network.
    pub fn from_round(
        round: u64,
        min_fee: u64,
        genesis_id: impl Into<String>,
        genesis_hash: impl Into<String>,
    ) -> Result<Self, ParamsError> {
        if min_fee == 0 {
            return Err(ParamsError::ZeroMinFee);
        }
        let last_valid = round
            .checked_add(config::DEFAULT_VALIDITY_WINDOW)
            .ok_or(ParamsError::RoundOverflow { round })?;

        Ok(Self {
            min_fee,
            first_valid: round,
            last_valid,
            genesis_id: genesis_id.into(),
            genesis_hash: genesis_hash.into(),
        })
    }

    /// Fee for the sponsor transaction: exactly
    /// [`config::SPONSOR_FEE_MULTIPLIER`] minimum fees.
    pub fn pooled_sponsor_fee(&self) -> u64 {
        self.min_fee.saturating_mul(config::SPONSOR_FEE_MULTIPLIER)
    }
}

// ---------------------------------------------------------------------------
// GroupId
// ---------------------------------------------------------------------------

/// Identifier binding the members of an atomic group together.
///
/// `SHA-512/256("TG" ‖ id₀ ‖ id₁ ‖ …)` over the member ids in order. See
/// [`super::group::compute_group_id`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub [u8; 32]);

impl GroupId {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupId({}..)", &self.to_hex()[..16])
    }
}
