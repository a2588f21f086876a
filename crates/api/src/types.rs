//! Fixed-width identity value types
//!
//! This module provides the immutable fixed-length byte containers used as
//! digests and account identities. Construction never fails for raw bytes:
//! oversized input is cropped from the left (only the trailing bytes are
//! kept) and undersized input is left-padded with zero bytes. Strict
//! constructors that reject any size other than the declared width are
//! provided for use sites that must not silently crop.

use core::fmt;

use subtle::ConstantTimeEq;

use crate::error::{Error, Result};
use crate::hex;

/// Width of a [`Hash`] in bytes
pub const HASH_LENGTH: usize = 32;

/// Width of an [`Address`] in bytes
pub const ADDRESS_LENGTH: usize = 32;

/// An immutable fixed-width byte container
///
/// The width is a compile-time constant; a value of this type always holds
/// exactly `N` bytes. Equality is byte-wise and constant-time.
#[derive(Clone, Copy)]
pub struct FixedBytes<const N: usize>([u8; N]);

/// The 32 byte hash of arbitrary data.
pub type Hash = FixedBytes<HASH_LENGTH>;

/// A 32 byte account address.
pub type Address = FixedBytes<ADDRESS_LENGTH>;

impl<const N: usize> FixedBytes<N> {
    /// Wrap an exact-width array.
    pub const fn new(raw: [u8; N]) -> Self {
        Self(raw)
    }

    /// Build from raw bytes of any length.
    ///
    /// If `bytes` is longer than `N`, only the trailing `N` bytes are kept
    /// (crop-from-left). If it is shorter, the value is left-padded with
    /// zero bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut out = [0u8; N];
        if bytes.len() > N {
            out.copy_from_slice(&bytes[bytes.len() - N..]);
        } else {
            out[N - bytes.len()..].copy_from_slice(bytes);
        }
        Self(out)
    }

    /// Strict constructor: exactly `N` bytes or [`Error::LengthMismatch`].
    pub fn from_exact_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != N {
            return Err(Error::LengthMismatch {
                context: "FixedBytes::from_exact_bytes",
                expected: N,
                actual: bytes.len(),
            });
        }
        Ok(Self::from_bytes(bytes))
    }

    /// Decode a hex string (optional `0x` prefix) and build leniently,
    /// cropping or padding as [`FixedBytes::from_bytes`] does.
    pub fn from_hex(input: &str) -> Result<Self> {
        Ok(Self::from_bytes(&hex::decode(input)?))
    }

    /// Decode a hex string that must represent exactly `N` bytes.
    pub fn from_exact_hex(input: &str) -> Result<Self> {
        Self::from_exact_bytes(&hex::decode(input)?)
    }

    /// The raw bytes.
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// The raw bytes as an owned vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// The canonical `0x`-prefixed lowercase hex representation.
    pub fn hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// The declared width in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Strict textual validation: an optional `0x`/`0X` prefix followed by
    /// exactly `2 * N` hex digits.
    pub fn is_hex_encoded(input: &str) -> bool {
        let digits = hex::strip_hex_prefix(input);
        digits.len() == 2 * N && hex::is_hex(digits)
    }
}

/// Verifies whether a string can represent a valid hex-encoded address.
pub fn is_hex_address(input: &str) -> bool {
    Address::is_hex_encoded(input)
}

impl<const N: usize> Default for FixedBytes<N> {
    fn default() -> Self {
        Self([0u8; N])
    }
}

impl<const N: usize> PartialEq for FixedBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl<const N: usize> Eq for FixedBytes<N> {}

impl<const N: usize> core::hash::Hash for FixedBytes<N> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
    fn from(raw: [u8; N]) -> Self {
        Self(raw)
    }
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl<const N: usize> fmt::Debug for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedBytes").field(&self.hex()).finish()
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for FixedBytes<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for FixedBytes<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_exact_hex(&text).map_err(serde::de::Error::custom)
    }
}
