//! # Hashing Utilities
//!
//! Every identifier in the sponsorship flow is a SHA-512/256 digest with a
//! short ASCII domain prefix in front of the hashed bytes:
//!
//! - `"TX"` ‖ signable bytes — transaction id, and the message a wallet signs.
//! - `"TG"` ‖ id₀ ‖ id₁ ‖ … — atomic group id over an ordered list.
//!
//! The prefix keeps a transaction id from ever colliding with a group id
//! computed over the same bytes.

use sha2::{Digest, Sha512_256};

/// Compute the SHA-512/256 digest of `data`.
///
/// # Example
///
/// ```
/// use campustrust_protocol::crypto::sha512_256;
///
/// let digest = sha512_256(b"campustrust");
/// assert_eq!(digest.len(), 32);
/// ```
pub fn sha512_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha512_256::new();
    hasher.update(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// Compute `SHA-512/256(prefix ‖ data)` without concatenating into a
/// temporary buffer.
pub fn hash_with_prefix(prefix: &[u8], data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha512_256::new();
    hasher.update(prefix);
    hasher.update(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}
