//! SHA-3 family hashers (FIPS 202)

use ::sha3::{Digest, Sha3_256, Sha3_512};

use super::Hasher;

/// SHA-3-256 hasher. Generic security strength of 256 bits against
/// preimage attacks and 128 bits against collision attacks; produces a
/// 32 byte digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha3_256Hasher;

impl Hasher for Sha3_256Hasher {
    fn hash(&self, chunks: &[&[u8]]) -> Vec<u8> {
        let mut digest = Sha3_256::new();
        for chunk in chunks {
            digest.update(chunk);
        }
        digest.finalize().to_vec()
    }
}

/// SHA-3-512 hasher. Generic security strength of 512 bits against
/// preimage attacks and 256 bits against collision attacks; produces a
/// 64 byte digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha3_512Hasher;

impl Hasher for Sha3_512Hasher {
    fn hash(&self, chunks: &[&[u8]]) -> Vec<u8> {
        let mut digest = Sha3_512::new();
        for chunk in chunks {
            digest.update(chunk);
        }
        digest.finalize().to_vec()
    }
}

#[cfg(test)]
mod tests;
