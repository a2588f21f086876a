//! Legacy Keccak-256 hasher
//!
//! A slightly modified version of Keccak was adopted for the SHA-3
//! standard; this is the pre-standardization padding variant still used by
//! deployed systems for address and transaction hashing.

use ::sha3::{Digest, Keccak256};

use super::Hasher;

/// Keccak-256 hasher. Generic security strength of 256 bits against
/// preimage attacks and 128 bits against collision attacks; produces a
/// 32 byte digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256Hasher;

impl Hasher for Keccak256Hasher {
    fn hash(&self, chunks: &[&[u8]]) -> Vec<u8> {
        let mut digest = Keccak256::new();
        for chunk in chunks {
            digest.update(chunk);
        }
        digest.finalize().to_vec()
    }
}
