//! Message digest capabilities for the sigsuite library
//!
//! The digest internals come from the external `sha2` and `sha3` crates;
//! this crate wraps them behind the object-safe [`hash::Hasher`] capability
//! that the signature suites consume.

pub mod hash;

pub use hash::{
    Hasher, Keccak256Hasher, Sha256Hasher, Sha3_256Hasher, Sha3_512Hasher, Sha512Hasher,
    Shake256Hasher,
};
