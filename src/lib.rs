//! # sigsuite
//!
//! A modular signature-suite library providing a uniform capability
//! surface over ECDSA P-256 and Ed25519, pluggable message digests,
//! deterministic or randomized ECDSA nonce sourcing, and fixed-width
//! hash/address identity types with canonical hex encoding.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`sigsuite-api`](sigsuite_api): capability traits, error types, and
//!   identity value types
//! - [`sigsuite-params`](sigsuite_params): algorithm parameter constants
//! - [`sigsuite-algorithms`](sigsuite_algorithms): message digest
//!   capabilities
//! - [`sigsuite-sign`](sigsuite_sign): the concrete signature suites, key
//!   handling, and address derivation
//!
//! ## Example
//!
//! ```
//! use rand::rngs::OsRng;
//! use sigsuite::{Signer, Verifier};
//! use sigsuite::sign::ecdsa::{p256_sha3_256_det_signer, p256_sha3_256_verifier};
//! use sigsuite::sign::keys::PrivateKey;
//!
//! # fn main() -> sigsuite::Result<()> {
//! let private = PrivateKey::generate(&mut OsRng);
//! let signer = p256_sha3_256_det_signer(private.to_scalar_bytes().as_ref())?;
//! let verifier = p256_sha3_256_verifier(&private.public_key().to_raw_bytes())?;
//!
//! let signature = signer.sign(b"message")?;
//! assert!(verifier.verify(b"message", &signature));
//! # Ok(())
//! # }
//! ```

pub use sigsuite_api as api;
pub use sigsuite_params as params;
pub use sigsuite_algorithms as algorithms;
pub use sigsuite_sign as sign;

// Convenience re-exports of the core capability surface
pub use sigsuite_api::{
    is_hex_address, Address, CryptoSuite, Error, FixedBytes, Hash, Result, Signer, Verifier,
    ADDRESS_LENGTH, HASH_LENGTH,
};
pub use sigsuite_algorithms::hash::{
    Hasher, Keccak256Hasher, Sha256Hasher, Sha3_256Hasher, Sha3_512Hasher, Sha512Hasher,
    Shake256Hasher,
};
pub use sigsuite_sign::address_from_public_key;
