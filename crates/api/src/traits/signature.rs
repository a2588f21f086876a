//! Signing and verification capability traits
//!
//! These traits define the minimal surface callers need to sign, verify,
//! and identify a signature configuration without depending on the
//! concrete curve or digest a deployment chooses. Implementations hold
//! only immutable key material, so a `Signer` or `Verifier` is safe to
//! share across threads for read-only use.

use crate::error::Result;

/// Identifies the fixed combination of signature scheme, digest, and
/// determinism policy an implementation speaks.
///
/// The identifier format is `<family>_<curve-or-scheme>_<digest>[_det|_indet]`,
/// e.g. `ecdsa_P256_sha3-256_det`, or a bare scheme name such as `ed25519`
/// where the scheme fixes the remaining choices. A signer's suite type is
/// always prefix-compatible with the suite type of a standalone verifier
/// for the same configuration.
pub trait CryptoSuite {
    /// Returns the suite identifier string.
    fn suite_type(&self) -> &str;
}

/// Verification capability
///
/// This abstraction is useful when the caller does not care about the
/// key or signature format and simply needs a verifier of a certain
/// suite type.
pub trait Verifier: CryptoSuite {
    /// Returns `true` iff `signature` is a valid signature over `message`
    /// under this verifier's key.
    ///
    /// Fails closed: a wrong-length signature, an unparsable signature, a
    /// wrong key, a tampered message, or a digest mismatch all yield
    /// `false`. Verification never returns an error.
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool;
}

/// Signing capability
///
/// Anything that can sign can also verify, so `Signer` subsumes
/// [`Verifier`].
pub trait Signer: Verifier {
    /// Sign `message`, returning the raw signature bytes.
    ///
    /// Whether two signatures over the same message are identical is a
    /// property of the suite's determinism policy.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;
}
