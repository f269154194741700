//! # Transaction Module
//!
//! Construction, grouping, signing envelopes, and transport encoding for
//! the payments that make up a sponsored group.
//!
//! ## Architecture
//!
//! ```text
//! types.rs    — SuggestedParams and GroupId
//! builder.rs  — PaymentBuilder for unsigned PaymentTransactions
//! group.rs    — Atomic group id computation, assignment, verification
//! signing.rs  — SignedTransaction envelopes and Ed25519 signing
//! encoding.rs — bincode + base64 transport encoding
//! ```
//!
//! ## Lifecycle
//!
//! 1. **Build** — [`PaymentBuilder`] from fresh [`SuggestedParams`].
//! 2. **Group** — [`assign_group_id`] over the ordered members.
//! 3. **Sign** — each party signs only its own member.
//! 4. **Encode** — [`encode_signed`] / [`encode_unsigned`] then base64.
//!
//! All amounts and fees are `u64` microunits. No floating point.

pub mod builder;
pub mod encoding;
pub mod group;
pub mod signing;
pub mod types;

pub use builder::{PaymentBuilder, PaymentTransaction, TransactionError};
pub use encoding::{
    decode_signed, decode_unsigned, encode_signed, encode_unsigned, from_base64, to_base64,
    EncodingError,
};
pub use group::{assign_group_id, compute_group_id, verify_group, GroupError};
pub use signing::{
    sign_transaction, signing_message, verify_signed_transaction, SignatureError,
    SignedTransaction,
};
pub use types::{GroupId, ParamsError, SuggestedParams};
