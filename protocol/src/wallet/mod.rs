//! # Wallet Signing Capability
//!
//! The orchestrator never holds the user's key. It hands a list of
//! [`SignRequest`]s to a [`TransactionSigner`] (a browser wallet bridge, a
//! mobile wallet connector, or the local [`KeypairSigner`]) and waits for
//! signed bytes back, in the same order.
//!
//! Contract every signer must honor:
//!
//! - An entry with an empty `signers` list is never signed. The signer
//!   returns `None` for it.
//! - The result has one slot per request. A `None` or empty slot means
//!   "not signed", which for the user's own entry means the user declined.
//! - There is no timeout. A wallet may prompt a human for as long as it
//!   likes; callers cancel by dropping the future.

pub mod signer;

pub use signer::{KeypairSigner, SignRequest, SignerError, TransactionSigner};
