//! Hash function capability
//!
//! A [`Hasher`] wraps one concrete digest algorithm and feeds it an ordered
//! sequence of byte chunks, equivalent to digesting their concatenation.
//! Every call builds fresh digest state, so one hasher value can serve any
//! number of independent calls, including concurrently.

pub mod keccak;
pub mod sha2;
pub mod sha3;
pub mod shake;

pub use keccak::Keccak256Hasher;
pub use sha2::{Sha256Hasher, Sha512Hasher};
pub use sha3::{Sha3_256Hasher, Sha3_512Hasher};
pub use shake::Shake256Hasher;

/// Capability wrapping a chosen message digest algorithm.
pub trait Hasher: Send + Sync {
    /// Digest `chunks` in order and return the raw digest bytes.
    ///
    /// Calling with zero chunks returns the digest of the empty input.
    fn hash(&self, chunks: &[&[u8]]) -> Vec<u8>;

    /// The digest of `chunks` as a `0x`-prefixed lowercase hex string.
    fn hash_hex(&self, chunks: &[&[u8]]) -> String {
        sigsuite_api::hex::encode(&self.hash(chunks))
    }
}
