//! [`TransactionSigner`] and the local keypair implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::keys::CampusKeypair;
use crate::transaction::builder::PaymentTransaction;
use crate::transaction::encoding::{encode_signed, EncodingError};
use crate::transaction::signing::sign_transaction;

/// One transaction offered to a wallet, with the addresses expected to
/// sign it. An empty `signers` list means "pass through unsigned".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRequest {
    pub txn: PaymentTransaction,
    pub signers: Vec<String>,
}

impl SignRequest {
    pub fn signed_by(txn: PaymentTransaction, signer: impl Into<String>) -> Self {
        Self {
            txn,
            signers: vec![signer.into()],
        }
    }

    /// A request the wallet must not sign.
    pub fn unsigned(txn: PaymentTransaction) -> Self {
        Self {
            txn,
            signers: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("user rejected the signing request")]
    Rejected,

    #[error("wallet unavailable: {0}")]
    Unavailable(String),

    #[error("could not encode signed transaction: {0}")]
    Encoding(#[from] EncodingError),
}

/// The signing callback: sign what you are asked to, in order.
///
/// Returns one slot per request. `None` (or an empty buffer) marks an
/// entry left unsigned.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    async fn sign_transactions(
        &self,
        requests: &[SignRequest],
    ) -> Result<Vec<Option<Vec<u8>>>, SignerError>;
}

/// Signs with a key held in process memory.
///
/// Signs exactly the entries whose `signers` list contains this key's
/// address and leaves everything else `None`.
#[derive(Debug, Clone)]
pub struct KeypairSigner {
    keypair: CampusKeypair,
}

impl KeypairSigner {
    pub fn new(keypair: CampusKeypair) -> Self {
        Self { keypair }
    }

    pub fn address(&self) -> String {
        self.keypair.address()
    }
}

#[async_trait]
impl TransactionSigner for KeypairSigner {
    async fn sign_transactions(
        &self,
        requests: &[SignRequest],
    ) -> Result<Vec<Option<Vec<u8>>>, SignerError> {
        let address = self.keypair.address();
        let mut out = Vec::with_capacity(requests.len());

        for request in requests {
            if request.signers.iter().any(|s| s == &address) {
                let stx = sign_transaction(&request.txn, &self.keypair);
                out.push(Some(encode_signed(&stx)?));
            } else {
                out.push(None);
            }
        }
        Ok(out)
    }
}
