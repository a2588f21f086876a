//! Algorithm parameter constants for the sigsuite library
//!
//! Key, signature, and digest widths are gathered here so that every suite
//! receives its parameters as explicit configuration rather than ambient
//! package state.

pub mod ecdsa;
pub mod eddsa;
pub mod hash;
