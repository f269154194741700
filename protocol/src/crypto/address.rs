//! Account addresses.
//!
//! An address is `base58(public_key ‖ checksum)`, where `checksum` is the
//! last four bytes of `SHA-512/256(public_key)`. The checksum catches typos
//! before a payment is built against a mistyped receiver.

use thiserror::Error;

use super::hash::sha512_256;

const CHECKSUM_LENGTH: usize = 4;
const PUBLIC_KEY_LENGTH: usize = 32;

/// Reasons an address string fails to decode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address is not valid base58")]
    InvalidEncoding,

    #[error("address decodes to {0} bytes, expected 36")]
    InvalidLength(usize),

    #[error("address checksum mismatch")]
    ChecksumMismatch,
}

fn checksum(public_key: &[u8; PUBLIC_KEY_LENGTH]) -> [u8; CHECKSUM_LENGTH] {
    let digest = sha512_256(public_key);
    let mut out = [0u8; CHECKSUM_LENGTH];
    out.copy_from_slice(&digest[32 - CHECKSUM_LENGTH..]);
    out
}

/// Encode a public key as an address.
pub fn encode_address(public_key: &[u8; PUBLIC_KEY_LENGTH]) -> String {
    let mut buf = Vec::with_capacity(PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH);
    buf.extend_from_slice(public_key);
    buf.extend_from_slice(&checksum(public_key));
    bs58::encode(buf).into_string()
}

/// Decode an address back to its public key, checking the checksum.
pub fn decode_address(address: &str) -> Result<[u8; PUBLIC_KEY_LENGTH], AddressError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|_| AddressError::InvalidEncoding)?;
    if bytes.len() != PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH {
        return Err(AddressError::InvalidLength(bytes.len()));
    }

    let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
    public_key.copy_from_slice(&bytes[..PUBLIC_KEY_LENGTH]);
    if bytes[PUBLIC_KEY_LENGTH..] != checksum(&public_key) {
        return Err(AddressError::ChecksumMismatch);
    }
    Ok(public_key)
}

/// `true` if `address` decodes with a valid checksum.
pub fn is_valid_address(address: &str) -> bool {
    decode_address(address).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_roundtrip() {
        let pk = [42u8; 32];
        let addr = encode_address(&pk);
        assert_eq!(decode_address(&addr).unwrap(), pk);
        assert!(is_valid_address(&addr));
    }

    #[test]
    fn corrupted_address_fails_checksum() {
        let pk = [1u8; 32];
        let mut raw = bs58::decode(encode_address(&pk)).into_vec().unwrap();
        raw[0] ^= 0xFF;
        let tampered = bs58::encode(raw).into_string();
        assert_eq!(
            decode_address(&tampered).unwrap_err(),
            AddressError::ChecksumMismatch
        );
    }

    #[test]
    fn rejects_non_base58_and_short_input() {
        assert_eq!(
            decode_address("0OIl").unwrap_err(),
            AddressError::InvalidEncoding
        );
        let short = bs58::encode([1u8; 8]).into_string();
        assert_eq!(
            decode_address(&short).unwrap_err(),
            AddressError::InvalidLength(8)
        );
    }
}
