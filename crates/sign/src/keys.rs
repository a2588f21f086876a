//! P-256 key material
//!
//! Thin wrappers over the external curve library's key types. Key material
//! is owned exclusively by the instance holding it and is immutable after
//! construction; a changed key is always a new instance.

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{PublicKey as CurvePublicKey, SecretKey};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use sigsuite_api::{Error, Result};
use sigsuite_params::ecdsa::{P256_PUBLIC_KEY_SIZE, P256_SCALAR_SIZE};

/// A P-256 public key
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(pub(crate) CurvePublicKey);

impl PublicKey {
    /// Build from raw `X || Y` affine coordinates (64 bytes).
    ///
    /// Fails with [`Error::InvalidKey`] if the coordinates do not name a
    /// point on the curve.
    pub fn from_raw_bytes(pub_data: &[u8]) -> Result<Self> {
        if pub_data.len() != P256_PUBLIC_KEY_SIZE {
            return Err(Error::InvalidKeyLength {
                context: "p256 public key",
                expected: P256_PUBLIC_KEY_SIZE,
                actual: pub_data.len(),
            });
        }
        // SEC1 uncompressed encoding: 0x04 tag followed by X || Y
        let mut sec1 = [0u8; P256_PUBLIC_KEY_SIZE + 1];
        sec1[0] = 0x04;
        sec1[1..].copy_from_slice(pub_data);
        CurvePublicKey::from_sec1_bytes(&sec1)
            .map(Self)
            .map_err(|_| Error::InvalidKey {
                context: "p256 public key: point not on curve",
            })
    }

    /// Raw `X || Y` affine coordinates (64 bytes).
    pub fn to_raw_bytes(&self) -> [u8; P256_PUBLIC_KEY_SIZE] {
        let point = self.0.to_encoded_point(false);
        let mut out = [0u8; P256_PUBLIC_KEY_SIZE];
        // skip the SEC1 uncompressed tag byte
        out.copy_from_slice(&point.as_bytes()[1..]);
        out
    }
}

impl core::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PublicKey")
            .field("curve", &"P-256")
            .finish()
    }
}

/// A P-256 private key
///
/// The underlying scalar is zeroized when the value is dropped.
#[derive(Clone)]
pub struct PrivateKey(pub(crate) SecretKey);

impl PrivateKey {
    /// Generate a fresh private key from the provided RNG.
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self(SecretKey::random(rng))
    }

    /// Build from raw scalar bytes (32 bytes, big-endian).
    ///
    /// Fails with [`Error::InvalidKey`] if the scalar is zero or not below
    /// the curve order.
    pub fn from_scalar_bytes(priv_data: &[u8]) -> Result<Self> {
        if priv_data.len() != P256_SCALAR_SIZE {
            return Err(Error::InvalidKeyLength {
                context: "p256 private key",
                expected: P256_SCALAR_SIZE,
                actual: priv_data.len(),
            });
        }
        SecretKey::from_slice(priv_data)
            .map(Self)
            .map_err(|_| Error::InvalidKey {
                context: "p256 private key: scalar out of range",
            })
    }

    /// The public key associated with this private key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.public_key())
    }

    /// The raw big-endian scalar bytes, zeroized when dropped.
    pub fn to_scalar_bytes(&self) -> Zeroizing<[u8; P256_SCALAR_SIZE]> {
        let bytes = self.0.to_bytes();
        let mut out = Zeroizing::new([0u8; P256_SCALAR_SIZE]);
        out.copy_from_slice(&bytes);
        out
    }
}

impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &"P-256")
            .finish()
    }
}

/// Generate a fresh P-256 key pair.
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> (PrivateKey, PublicKey) {
    let private = PrivateKey::generate(rng);
    let public = private.public_key();
    (private, public)
}
