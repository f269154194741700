//! Transport encoding.
//!
//! Transactions cross the wallet and relayer boundaries as bincode bytes.
//! Inside JSON bodies those bytes are standard base64.
//!
//! - Unsigned: the bare [`PaymentTransaction`].
//! - Signed: a [`SignedTransaction`] envelope.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

use super::builder::PaymentTransaction;
use super::signing::SignedTransaction;

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("binary codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

pub fn encode_unsigned(txn: &PaymentTransaction) -> Result<Vec<u8>, EncodingError> {
    Ok(bincode::serialize(txn)?)
}

pub fn decode_unsigned(bytes: &[u8]) -> Result<PaymentTransaction, EncodingError> {
    Ok(bincode::deserialize(bytes)?)
}

pub fn encode_signed(stx: &SignedTransaction) -> Result<Vec<u8>, EncodingError> {
    Ok(bincode::serialize(stx)?)
}

pub fn decode_signed(bytes: &[u8]) -> Result<SignedTransaction, EncodingError> {
    Ok(bincode::deserialize(bytes)?)
}

/// Standard base64 with padding.
pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn from_base64(s: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(STANDARD.decode(s)?)
}
