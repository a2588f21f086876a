//! Signature suites for the sigsuite library
//!
//! This crate provides the concrete [`Signer`](sigsuite_api::Signer) /
//! [`Verifier`](sigsuite_api::Verifier) pairs: ECDSA over NIST P-256 with a
//! caller-selected digest and nonce policy, and Ed25519 with its
//! scheme-mandated deterministic signing. It also derives account
//! addresses from public keys.
//!
//! The curve arithmetic and scheme internals come from the external `p256`
//! and `ed25519-dalek` crates; this crate supplies the orchestration
//! around them.

pub mod address;
pub mod ecdsa;
pub mod eddsa;
pub mod keys;
pub mod nonce;

// Re-exports of the main entry points
pub use self::address::address_from_public_key;
pub use self::ecdsa::{EcdsaSigner, EcdsaVerifier};
pub use self::eddsa::{Ed25519Signer, Ed25519Verifier};
pub use self::keys::{PrivateKey, PublicKey};
pub use self::nonce::{DeterministicEntropy, EntropySource, NonceSource, RandomEntropy};
