//! ECDSA signature suites over NIST P-256
//!
//! The curve arithmetic and the core prehash sign/verify primitives come
//! from the external `p256` crate. This module supplies the capability
//! wrappers around them: message digesting, nonce sourcing, the raw wire
//! formats (64-byte `X || Y` public keys, 64-byte fixed-width `R || S`
//! signatures), and the named suite constructors.

use ::ecdsa::hazmat::{SignPrimitive, VerifyPrimitive};
use p256::ecdsa::Signature;
use p256::elliptic_curve::bigint::U256;
use p256::elliptic_curve::ops::Reduce;
use p256::elliptic_curve::Field;
use p256::{FieldBytes, Scalar};
use zeroize::Zeroizing;

use sigsuite_algorithms::hash::{Hasher, Sha3_256Hasher, Shake256Hasher};
use sigsuite_api::{CryptoSuite, Error, Result, Signer, Verifier};
use sigsuite_params::ecdsa::{P256_PUBLIC_KEY_SIZE, P256_SCALAR_SIZE, P256_SIGNATURE_SIZE};

use crate::keys::{PrivateKey, PublicKey};
use crate::nonce::NonceSource;

const SUITE_P256_SHA3_256: &str = "ecdsa_P256_sha3-256";
const SUITE_P256_SHA3_256_DET: &str = "ecdsa_P256_sha3-256_det";
const SUITE_P256_SHA3_256_INDET: &str = "ecdsa_P256_sha3-256_indet";
const SUITE_P256_SHAKE256: &str = "ecdsa_P256_shake256";
const SUITE_P256_SHAKE256_DET: &str = "ecdsa_P256_shake256_det";
const SUITE_P256_SHAKE256_INDET: &str = "ecdsa_P256_shake256_indet";

/// ECDSA interprets the message digest as a big-endian integer truncated
/// to the scalar width: a wider digest keeps its leftmost bytes, a
/// narrower one is left-padded with zeros.
fn digest_to_field_bytes(digest: &[u8]) -> FieldBytes {
    let mut z = FieldBytes::default();
    if digest.len() >= P256_SCALAR_SIZE {
        z.copy_from_slice(&digest[..P256_SCALAR_SIZE]);
    } else {
        z[P256_SCALAR_SIZE - digest.len()..].copy_from_slice(digest);
    }
    z
}

/// Verifier half of a P-256 suite.
pub struct EcdsaVerifier {
    public_key: PublicKey,
    hasher: Box<dyn Hasher>,
    suite_type: &'static str,
}

impl EcdsaVerifier {
    fn new(public_key: PublicKey, hasher: Box<dyn Hasher>, suite_type: &'static str) -> Self {
        Self {
            public_key,
            hasher,
            suite_type,
        }
    }

    fn from_raw_public_key(
        pub_data: &[u8],
        hasher: Box<dyn Hasher>,
        suite_type: &'static str,
    ) -> Result<Self> {
        Ok(Self::new(
            PublicKey::from_raw_bytes(pub_data)?,
            hasher,
            suite_type,
        ))
    }

    /// The verifying key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

impl CryptoSuite for EcdsaVerifier {
    fn suite_type(&self) -> &str {
        self.suite_type
    }
}

impl Verifier for EcdsaVerifier {
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        // Fail closed on anything other than a well-formed fixed-width
        // R || S buffer
        if signature.len() != P256_SIGNATURE_SIZE {
            return false;
        }
        let signature = match Signature::from_slice(signature) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        let digest = self.hasher.hash(&[message]);
        let z = digest_to_field_bytes(&digest);
        self.public_key
            .0
            .as_affine()
            .verify_prehashed(&z, &signature)
            .is_ok()
    }
}

/// Signer half of a P-256 suite.
///
/// A signer embeds the verifier for its own key, so it can check the
/// signatures it produces.
pub struct EcdsaSigner {
    private_key: PrivateKey,
    scalar_bytes: Zeroizing<[u8; P256_SCALAR_SIZE]>,
    hasher: Box<dyn Hasher>,
    nonce: NonceSource,
    verifier: EcdsaVerifier,
}

impl EcdsaSigner {
    fn from_scalar_bytes<H>(
        priv_data: &[u8],
        hasher: H,
        nonce: NonceSource,
        suite_type: &'static str,
    ) -> Result<Self>
    where
        H: Hasher + Clone + 'static,
    {
        let private_key = PrivateKey::from_scalar_bytes(priv_data)?;
        let scalar_bytes = private_key.to_scalar_bytes();
        let verifier = EcdsaVerifier::new(
            private_key.public_key(),
            Box::new(hasher.clone()),
            suite_type,
        );
        Ok(Self {
            private_key,
            scalar_bytes,
            hasher: Box::new(hasher),
            nonce,
            verifier,
        })
    }

    /// Raw `X || Y` public key bytes for this signer.
    pub fn public_key(&self) -> [u8; P256_PUBLIC_KEY_SIZE] {
        self.verifier.public_key.to_raw_bytes()
    }
}

impl CryptoSuite for EcdsaSigner {
    fn suite_type(&self) -> &str {
        self.verifier.suite_type()
    }
}

impl Verifier for EcdsaSigner {
    fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        self.verifier.verify(message, signature)
    }
}

impl Signer for EcdsaSigner {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let digest = self.hasher.hash(&[message]);
        let z = digest_to_field_bytes(&digest);

        let mut k_bytes = Zeroizing::new([0u8; P256_SCALAR_SIZE]);
        self.nonce
            .stream(self.hasher.as_ref(), &digest, self.scalar_bytes.as_ref())
            .fill(k_bytes.as_mut())?;

        let k = <Scalar as Reduce<U256>>::reduce_bytes(FieldBytes::from_slice(k_bytes.as_ref()));
        if bool::from(k.is_zero()) {
            // Surfaced, never retried with fresh entropy: a silent retry
            // would break the determinism contract
            return Err(Error::SigningError {
                context: "nonce reduced to the zero scalar",
            });
        }

        let secret_scalar = self.private_key.0.to_nonzero_scalar();
        let (signature, _) = secret_scalar
            .as_ref()
            .try_sign_prehashed(k, &z)
            .map_err(|_| Error::SigningError {
                context: "p256 signing primitive",
            })?;

        // R and S each padded to the scalar width, so the buffer always
        // splits correctly into equal halves
        Ok(signature.to_bytes().to_vec())
    }
}

/// Verifier for the `ecdsa_P256_sha3-256` suite family (64-byte `X || Y`
/// public key).
pub fn p256_sha3_256_verifier(pub_data: &[u8]) -> Result<EcdsaVerifier> {
    EcdsaVerifier::from_raw_public_key(pub_data, Box::new(Sha3_256Hasher), SUITE_P256_SHA3_256)
}

/// Deterministic P-256 signer hashing with SHA-3-256 (32-byte scalar).
pub fn p256_sha3_256_det_signer(priv_data: &[u8]) -> Result<EcdsaSigner> {
    EcdsaSigner::from_scalar_bytes(
        priv_data,
        Sha3_256Hasher,
        NonceSource::Deterministic,
        SUITE_P256_SHA3_256_DET,
    )
}

/// Randomized P-256 signer hashing with SHA-3-256 (32-byte scalar).
pub fn p256_sha3_256_indet_signer(priv_data: &[u8]) -> Result<EcdsaSigner> {
    EcdsaSigner::from_scalar_bytes(
        priv_data,
        Sha3_256Hasher,
        NonceSource::Random,
        SUITE_P256_SHA3_256_INDET,
    )
}

/// Verifier for the `ecdsa_P256_shake256` suite family (64-byte `X || Y`
/// public key).
pub fn p256_shake256_verifier(pub_data: &[u8]) -> Result<EcdsaVerifier> {
    EcdsaVerifier::from_raw_public_key(pub_data, Box::new(Shake256Hasher), SUITE_P256_SHAKE256)
}

/// Deterministic P-256 signer hashing with SHAKE-256 (32-byte scalar).
pub fn p256_shake256_det_signer(priv_data: &[u8]) -> Result<EcdsaSigner> {
    EcdsaSigner::from_scalar_bytes(
        priv_data,
        Shake256Hasher,
        NonceSource::Deterministic,
        SUITE_P256_SHAKE256_DET,
    )
}

/// Randomized P-256 signer hashing with SHAKE-256 (32-byte scalar).
pub fn p256_shake256_indet_signer(priv_data: &[u8]) -> Result<EcdsaSigner> {
    EcdsaSigner::from_scalar_bytes(
        priv_data,
        Shake256Hasher,
        NonceSource::Random,
        SUITE_P256_SHAKE256_INDET,
    )
}
