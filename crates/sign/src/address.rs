//! Account address derivation
//!
//! An address is the SHA-3-256 digest of the canonical (SPKI/DER) encoding
//! of a public key, cropped into the fixed address width. The digest
//! algorithm is pinned by the scheme, not selectable by the caller, so
//! identical keys always derive identical addresses.

use p256::pkcs8::EncodePublicKey;

use sigsuite_algorithms::hash::{Hasher, Sha3_256Hasher};
use sigsuite_api::{Address, Error, Result};

use crate::keys::PublicKey;

// Strict textual validation lives beside the Address type; re-exported
// here so the address API reads as one unit.
pub use sigsuite_api::types::is_hex_address;

/// Derive the account address of a public key.
pub fn address_from_public_key(public_key: &PublicKey) -> Result<Address> {
    let encoded = public_key
        .0
        .to_public_key_der()
        .map_err(|_| Error::InvalidKey {
            context: "address derivation: SPKI encoding failed",
        })?;
    Ok(Address::from_bytes(
        &Sha3_256Hasher.hash(&[encoded.as_bytes()]),
    ))
}
