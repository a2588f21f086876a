//! Ed25519 signature suite
//!
//! Signing and verification delegate to the external `ed25519-dalek`
//! crate. Ed25519 is deterministic by scheme definition, so unlike the
//! ECDSA suites there is no nonce source to choose: the scheme derives its
//! per-signature value internally from the expanded private key and the
//! message.
//!
//! The private key wire format is the 64-byte keypair encoding
//! `seed || public key`; the trailing 32 bytes always equal the published
//! public key.

use ed25519_dalek::{Signature as DalekSignature, Signer as _, SigningKey, Verifier as _, VerifyingKey};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use sigsuite_api::{CryptoSuite, Error, Result, Signer, Verifier};
use sigsuite_params::eddsa::{
    ED25519_KEYPAIR_SIZE, ED25519_PUBLIC_KEY_SIZE, ED25519_SEED_SIZE, ED25519_SIGNATURE_SIZE,
};

const SUITE_ED25519: &str = "ed25519";

/// Verifier half of the Ed25519 suite.
pub struct Ed25519Verifier {
    public_key: VerifyingKey,
}

/// Constructor for an Ed25519 verifier from a 32-byte public key.
pub fn ed25519_verifier(pub_key: &[u8]) -> Result<Ed25519Verifier> {
    let bytes: &[u8; ED25519_PUBLIC_KEY_SIZE] =
        pub_key.try_into().map_err(|_| Error::InvalidKeyLength {
            context: "ed25519 verifier",
            expected: ED25519_PUBLIC_KEY_SIZE,
            actual: pub_key.len(),
        })?;
    let public_key = VerifyingKey::from_bytes(bytes).map_err(|_| Error::InvalidKey {
        context: "ed25519 verifier: point decompression failed",
    })?;
    Ok(Ed25519Verifier { public_key })
}

impl CryptoSuite for Ed25519Verifier {
    fn suite_type(&self) -> &str {
        SUITE_ED25519
    }
}

impl Verifier for Ed25519Verifier {
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        let bytes: [u8; ED25519_SIGNATURE_SIZE] = match signature.try_into() {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };
        self.public_key
            .verify(message, &DalekSignature::from_bytes(&bytes))
            .is_ok()
    }
}

/// Signer half of the Ed25519 suite.
pub struct Ed25519Signer {
    signing_key: SigningKey,
    verifier: Ed25519Verifier,
}

/// Constructor for an Ed25519 signer from the 64-byte keypair encoding.
pub fn ed25519_signer(priv_key: &[u8]) -> Result<Ed25519Signer> {
    let bytes: &[u8; ED25519_KEYPAIR_SIZE] =
        priv_key.try_into().map_err(|_| Error::InvalidKeyLength {
            context: "ed25519 signer",
            expected: ED25519_KEYPAIR_SIZE,
            actual: priv_key.len(),
        })?;
    let signing_key = SigningKey::from_keypair_bytes(bytes).map_err(|_| Error::InvalidKey {
        context: "ed25519 signer: keypair bytes are inconsistent",
    })?;
    let verifier = Ed25519Verifier {
        public_key: signing_key.verifying_key(),
    };
    Ok(Ed25519Signer {
        signing_key,
        verifier,
    })
}

impl CryptoSuite for Ed25519Signer {
    fn suite_type(&self) -> &str {
        self.verifier.suite_type()
    }
}

impl Verifier for Ed25519Signer {
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        self.verifier.verify(message, signature)
    }
}

impl Signer for Ed25519Signer {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        Ok(self.signing_key.sign(message).to_bytes().to_vec())
    }
}

impl Ed25519Signer {
    /// The 32-byte public key for this signer.
    pub fn public_key(&self) -> [u8; ED25519_PUBLIC_KEY_SIZE] {
        self.verifier.public_key.to_bytes()
    }
}

/// Generate an Ed25519 key pair.
///
/// Returns the 32-byte public key and the 64-byte keypair encoding.
pub fn generate_ed25519_keypair(
) -> Result<([u8; ED25519_PUBLIC_KEY_SIZE], [u8; ED25519_KEYPAIR_SIZE])> {
    let mut seed = Zeroizing::new([0u8; ED25519_SEED_SIZE]);
    OsRng
        .try_fill_bytes(seed.as_mut())
        .map_err(|_| Error::RandomGeneration {
            context: "ed25519 keypair",
        })?;
    let signing_key = SigningKey::from_bytes(&seed);
    Ok((
        signing_key.verifying_key().to_bytes(),
        signing_key.to_keypair_bytes(),
    ))
}

/// Derive an Ed25519 key pair from a 32-byte seed.
///
/// The same seed always produces the same key pair.
pub fn ed25519_keypair_from_seed(
    seed: &[u8],
) -> Result<([u8; ED25519_PUBLIC_KEY_SIZE], [u8; ED25519_KEYPAIR_SIZE])> {
    let seed: &[u8; ED25519_SEED_SIZE] = seed.try_into().map_err(|_| Error::InvalidSeedLength {
        expected: ED25519_SEED_SIZE,
        actual: seed.len(),
    })?;
    let signing_key = SigningKey::from_bytes(seed);
    Ok((
        signing_key.verifying_key().to_bytes(),
        signing_key.to_keypair_bytes(),
    ))
}

/// The public key associated with a 64-byte private keypair encoding.
pub fn ed25519_public_key_from_private(
    priv_key: &[u8],
) -> Result<[u8; ED25519_PUBLIC_KEY_SIZE]> {
    if priv_key.len() != ED25519_KEYPAIR_SIZE {
        return Err(Error::InvalidKeyLength {
            context: "ed25519 public key from private",
            expected: ED25519_KEYPAIR_SIZE,
            actual: priv_key.len(),
        });
    }
    // the trailing 32 bytes of the keypair encoding are the public key
    let mut out = [0u8; ED25519_PUBLIC_KEY_SIZE];
    out.copy_from_slice(&priv_key[ED25519_SEED_SIZE..]);
    Ok(out)
}
