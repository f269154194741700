//! Payment construction via the builder pattern.
//!
//! [`PaymentBuilder`] assembles an unsigned [`PaymentTransaction`] from
//! [`SuggestedParams`] plus caller-supplied addresses, amount, and note.
//! Both sides of a sponsored group are payments: the user's transfer and
//! the sponsor's zero-amount self-payment that carries the pooled fee.
//!
//! The builder does not sign. That happens in [`super::signing`], usually
//! inside a wallet this crate never sees.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{GroupId, SuggestedParams};
use crate::config;
use crate::crypto::hash::hash_with_prefix;

/// Structural problems caught before a transaction leaves the client.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionError {
    #[error("sender address is empty")]
    EmptySender,

    #[error("receiver address is empty")]
    EmptyReceiver,

    #[error("note is {len} bytes, maximum is {max}")]
    NoteTooLong { len: usize, max: usize },

    #[error("validity window is inverted: first_valid {first} > last_valid {last}")]
    InvalidValidityWindow { first: u64, last: u64 },
}

// ---------------------------------------------------------------------------
// PaymentTransaction
// ---------------------------------------------------------------------------

/// A payment of `amount` microunits from `sender` to `receiver`.
///
/// # Canonical Byte Format
///
/// [`PaymentTransaction::signable_bytes`] deterministically serializes:
/// genesis id, genesis hash, sender, receiver, amount, fee, first_valid,
/// last_valid, note, group. `flat_fee` marks the fee as exact rather than
/// size-derived and is not part of the signed bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTransaction {
    /// Paying account.
    pub sender: String,
    /// Receiving account. Equal to `sender` for a fee-pooling self-payment.
    pub receiver: String,
    /// Amount in microunits.
    pub amount: u64,
    /// Fee in microunits.
    pub fee: u64,
    /// `fee` is used exactly as given. Always set by [`PaymentBuilder`]:
    /// fee pooling only works when neither member's fee is size-derived.
    pub flat_fee: bool,
    pub first_valid: u64,
    pub last_valid: u64,
    pub genesis_id: String,
    pub genesis_hash: String,
    /// Optional opaque note bytes.
    pub note: Option<Vec<u8>>,
    /// Atomic group binding. `None` until [`super::group::assign_group_id`].
    pub group: Option<GroupId>,
}

impl PaymentTransaction {
    /// Canonical bytes used for the id and for signing.
    ///
    /// Strings are NUL-terminated, integers are fixed-width little-endian,
    /// and optional fields carry a presence flag so `None` and an empty
    /// value never hash the same.
    pub fn signable_bytes(&self) -> Vec<u8> {
        let mut buf = self.signable_bytes_without_group();
        match self.group {
            Some(ref gid) => {
                buf.push(0x01);
                buf.extend_from_slice(gid.as_bytes());
            }
            None => buf.push(0x00),
        }
        buf
    }

    /// Canonical bytes with the group field treated as absent. Group ids
    /// are computed over this form so assigning a group does not change the
    /// input it was derived from.
    pub fn signable_bytes_without_group(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(192);

        for field in [
            &self.genesis_id,
            &self.genesis_hash,
            &self.sender,
            &self.receiver,
        ] {
            buf.extend_from_slice(field.as_bytes());
            buf.push(0x00);
        }

        buf.extend_from_slice(&self.amount.to_le_bytes());
        buf.extend_from_slice(&self.fee.to_le_bytes());
        buf.extend_from_slice(&self.first_valid.to_le_bytes());
        buf.extend_from_slice(&self.last_valid.to_le_bytes());

        match self.note {
            Some(ref note) => {
                buf.push(0x01);
                buf.extend_from_slice(&(note.len() as u32).to_le_bytes());
                buf.extend_from_slice(note);
            }
            None => buf.push(0x00),
        }

        buf
    }

    /// Raw 32-byte id: `SHA-512/256("TX" ‖ signable_bytes)`.
    pub fn raw_id(&self) -> [u8; 32] {
        hash_with_prefix(config::TXN_HASH_PREFIX, &self.signable_bytes())
    }

    /// Hex-encoded transaction id.
    pub fn compute_id(&self) -> String {
        hex::encode(self.raw_id())
    }

    /// Id of this transaction as if it had no group. Input to the group hash.
    pub fn ungrouped_id(&self) -> [u8; 32] {
        let mut bytes = self.signable_bytes_without_group();
        bytes.push(0x00);
        hash_with_prefix(config::TXN_HASH_PREFIX, &bytes)
    }

    /// Structural checks. Address format is left to the network.
    pub fn validate(&self) -> Result<(), TransactionError> {
        if self.sender.is_empty() {
            return Err(TransactionError::EmptySender);
        }
        if self.receiver.is_empty() {
            return Err(TransactionError::EmptyReceiver);
        }
        if let Some(ref note) = self.note {
            if note.len() > config::MAX_NOTE_LENGTH {
                return Err(TransactionError::NoteTooLong {
                    len: note.len(),
                    max: config::MAX_NOTE_LENGTH,
                });
            }
        }
        if self.first_valid > self.last_valid {
            return Err(TransactionError::InvalidValidityWindow {
                first: self.first_valid,
                last: self.last_valid,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PaymentBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for unsigned [`PaymentTransaction`]s.
///
/// ```
/// use campustrust_protocol::transaction::{PaymentBuilder, SuggestedParams};
///
/// let params = SuggestedParams::from_round(1_000, 1_000, "testnet-v1.0", "hash").unwrap();
/// let user_txn = PaymentBuilder::new(&params)
///     .sender("ALICE")
///     .receiver("BOB")
///     .amount(1_000_000)
///     .flat_fee(0)
///     .build();
/// assert_eq!(user_txn.fee, 0);
/// ```
///
/// The fee defaults to zero until [`flat_fee`](Self::flat_fee) sets it.
pub struct PaymentBuilder {
    params: SuggestedParams,
    sender: String,
    receiver: String,
    amount: u64,
    flat_fee: u64,
    note: Option<Vec<u8>>,
}

impl PaymentBuilder {
    pub fn new(params: &SuggestedParams) -> Self {
        Self {
            params: params.clone(),
            sender: String::new(),
            receiver: String::new(),
            amount: 0,
            flat_fee: 0,
            note: None,
        }
    }

    pub fn sender(mut self, address: &str) -> Self {
        self.sender = address.to_string();
        self
    }

    pub fn receiver(mut self, address: &str) -> Self {
        self.receiver = address.to_string();
        self
    }

    /// Amount in microunits.
    pub fn amount(mut self, amount: u64) -> Self {
        self.amount = amount;
        self
    }

    /// Use `fee` verbatim.
    pub fn flat_fee(mut self, fee: u64) -> Self {
        self.flat_fee = fee;
        self
    }

    /// Attach an optional note.
    pub fn note(mut self, note: Option<Vec<u8>>) -> Self {
        self.note = note;
        self
    }

    /// Consumes the builder and produces an unsigned, ungrouped payment.
    pub fn build(self) -> PaymentTransaction {
        PaymentTransaction {
            sender: self.sender,
            receiver: self.receiver,
            amount: self.amount,
            fee: self.flat_fee,
            flat_fee: true,
            first_valid: self.params.first_valid,
            last_valid: self.params.last_valid,
            genesis_id: self.params.genesis_id.clone(),
            genesis_hash: self.params.genesis_hash.clone(),
            note: self.note,
            group: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
