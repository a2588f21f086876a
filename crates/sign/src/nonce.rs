//! Nonce sourcing for ECDSA signing
//!
//! ECDSA requires a secret per-signature value `k`. If two distinct
//! messages are ever signed with the same `k` under the same key, the
//! private key can be recovered from the two signatures, so `k` must never
//! repeat across messages. The classic answer is fresh randomness per
//! signature. The alternative implemented by [`DeterministicEntropy`] is to
//! derive `k` from the message digest and the private key: distinct
//! messages can then never share a nonce, repeated signing of one message
//! reproduces the signature exactly, and no entropy source is needed at
//! signing time.

use rand::rngs::OsRng;
use rand::RngCore;

use sigsuite_algorithms::hash::Hasher;
use sigsuite_api::{Error, Result};

/// A pull-based byte stream supplying the per-signature secret `k`.
pub trait EntropySource {
    /// Fill `dest` entirely, or fail without yielding partial output.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

/// Operating-system randomness; every fill is independent.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomEntropy;

impl EntropySource for RandomEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest).map_err(|_| Error::RandomGeneration {
            context: "nonce entropy",
        })
    }
}

/// Entropy derived from the message digest and the signing key.
pub struct DeterministicEntropy<'a> {
    hasher: &'a dyn Hasher,
    message_digest: &'a [u8],
    key: &'a [u8],
}

impl<'a> DeterministicEntropy<'a> {
    pub fn new(hasher: &'a dyn Hasher, message_digest: &'a [u8], key: &'a [u8]) -> Self {
        Self {
            hasher,
            message_digest,
            key,
        }
    }
}

impl EntropySource for DeterministicEntropy<'_> {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        let digest = self.hasher.hash(&[self.message_digest, self.key]);
        // Never weaken the nonce by padding or repeating a short digest
        if digest.len() < dest.len() {
            return Err(Error::InsufficientEntropy {
                requested: dest.len(),
                available: digest.len(),
            });
        }
        dest.copy_from_slice(&digest[..dest.len()]);
        Ok(())
    }
}

/// How a signer draws its per-signature nonce. Fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NonceSource {
    /// Fresh operating-system randomness per signature; two signatures
    /// over the same message differ with overwhelming probability.
    Random,
    /// Nonce bound to `hash(message_digest, key)`; same message and key
    /// always reproduce the same signature.
    Deterministic,
}

impl NonceSource {
    /// Build the entropy stream for one signature over the message whose
    /// digest is `message_digest`, signed by the scalar `key`.
    pub fn stream<'a>(
        &self,
        hasher: &'a dyn Hasher,
        message_digest: &'a [u8],
        key: &'a [u8],
    ) -> Box<dyn EntropySource + 'a> {
        match self {
            NonceSource::Random => Box::new(RandomEntropy),
            NonceSource::Deterministic => {
                Box::new(DeterministicEntropy::new(hasher, message_digest, key))
            }
        }
    }
}
