//! Transaction signing envelopes.
//!
//! Signing is a separate step from building because the user's key lives
//! in a wallet, not here, and the sponsor's key lives in the relayer. The
//! signed message is `"TX" ‖ signable_bytes`, the same preimage as the id,
//! so a signature commits to the group id as well.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::builder::PaymentTransaction;
use crate::config;
use crate::crypto::address::{decode_address, AddressError};
use crate::crypto::keys::{verify_signature, CampusKeypair};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("transaction is not signed")]
    Unsigned,

    #[error("signer address is malformed: {0}")]
    BadSigner(#[from] AddressError),

    #[error("signature does not verify for signer {0}")]
    Invalid(String),
}

/// A transaction plus an optional signature.
///
/// The sponsor member of a group travels with `signature: None` until the
/// relayer signs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    pub txn: PaymentTransaction,
    /// 64-byte Ed25519 signature, if present.
    pub signature: Option<Vec<u8>>,
    /// Address whose key produced `signature`. Defaults to the sender.
    pub signer: Option<String>,
}

impl SignedTransaction {
    /// Wrap a transaction without signing it.
    pub fn unsigned(txn: PaymentTransaction) -> Self {
        Self {
            txn,
            signature: None,
            signer: None,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// Address the signature is checked against.
    pub fn signer_address(&self) -> &str {
        self.signer.as_deref().unwrap_or(&self.txn.sender)
    }
}

/// The exact bytes a wallet signs for `txn`.
pub fn signing_message(txn: &PaymentTransaction) -> Vec<u8> {
    let mut msg = config::TXN_HASH_PREFIX.to_vec();
    msg.extend_from_slice(&txn.signable_bytes());
    msg
}

/// Sign `txn` with `keypair`.
///
/// `signer` is recorded only when the key is not the sender's, which keeps
/// the common case compact on the wire.
pub fn sign_transaction(txn: &PaymentTransaction, keypair: &CampusKeypair) -> SignedTransaction {
    let signature = keypair.sign(&signing_message(txn));
    let address = keypair.address();
    let signer = (address != txn.sender).then_some(address);

    SignedTransaction {
        txn: txn.clone(),
        signature: Some(signature.to_vec()),
        signer,
    }
}

/// Check the signature on `stx` against its signer address.
pub fn verify_signed_transaction(stx: &SignedTransaction) -> Result<(), SignatureError> {
    let signature = stx.signature.as_deref().ok_or(SignatureError::Unsigned)?;
    let public_key = decode_address(stx.signer_address())?;

    if verify_signature(&public_key, &signing_message(&stx.txn), signature) {
        Ok(())
    } else {
        Err(SignatureError::Invalid(stx.signer_address().to_string()))
    }
}
