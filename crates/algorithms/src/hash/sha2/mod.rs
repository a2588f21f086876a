//! SHA-2 family hashers

use ::sha2::{Digest, Sha256, Sha512};

use super::Hasher;

/// SHA-256 hasher. Generic security strength of 256 bits against preimage
/// attacks and 128 bits against collision attacks; produces a 32 byte
/// digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn hash(&self, chunks: &[&[u8]]) -> Vec<u8> {
        let mut digest = Sha256::new();
        for chunk in chunks {
            digest.update(chunk);
        }
        digest.finalize().to_vec()
    }
}

/// SHA-512 hasher. Generic security strength of 512 bits against preimage
/// attacks and 256 bits against collision attacks; produces a 64 byte
/// digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512Hasher;

impl Hasher for Sha512Hasher {
    fn hash(&self, chunks: &[&[u8]]) -> Vec<u8> {
        let mut digest = Sha512::new();
        for chunk in chunks {
            digest.update(chunk);
        }
        digest.finalize().to_vec()
    }
}
