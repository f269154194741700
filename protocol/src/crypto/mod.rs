//! # Cryptographic Primitives
//!
//! Thin wrappers around audited crates:
//!
//! - **SHA-512/256** (`sha2`) for transaction and group ids.
//! - **Ed25519** (`ed25519-dalek`) for account signatures.
//! - **base58** (`bs58`) with a checksum for account addresses.

pub mod address;
pub mod hash;
pub mod keys;

pub use address::{decode_address, encode_address, is_valid_address, AddressError};
pub use hash::{hash_with_prefix, sha512_256};
pub use keys::{verify_signature, CampusKeypair, KeyError};
