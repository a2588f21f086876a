//! Capability traits for signature suites

pub mod signature;

pub use signature::{CryptoSuite, Signer, Verifier};
