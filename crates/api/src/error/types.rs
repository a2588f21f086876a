//! Error type definitions for signature-suite operations

/// Primary error type for signature-suite operations
///
/// Every fallible construction or signing entry point in the ecosystem
/// surfaces one of these variants. Verification never does: all `verify`
/// paths are fail-closed booleans by contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input contained a character outside the hexadecimal alphabet
    MalformedHex {
        context: &'static str,
    },

    /// A fixed-width value was given a payload of the wrong exact size
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Raw key material of the wrong size for the scheme
    InvalidKeyLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An Ed25519 seed of any size other than the scheme's 32 bytes
    InvalidSeedLength {
        expected: usize,
        actual: usize,
    },

    /// Key material of the right size that the scheme rejected
    /// (off-curve point, out-of-range scalar, failed decompression)
    InvalidKey {
        context: &'static str,
    },

    /// The nonce source could not supply as many bytes as requested
    InsufficientEntropy {
        requested: usize,
        available: usize,
    },

    /// The external signing primitive failed
    SigningError {
        context: &'static str,
    },

    /// The operating-system entropy source failed
    RandomGeneration {
        context: &'static str,
    },
}

/// Result type for signature-suite operations
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedHex { context } => {
                write!(f, "Malformed hex: {}", context)
            }
            Self::LengthMismatch {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: length mismatch (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidKeyLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid key length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidSeedLength { expected, actual } => {
                write!(
                    f,
                    "Invalid seed length (expected {}, got {})",
                    expected, actual
                )
            }
            Self::InvalidKey { context } => {
                write!(f, "Invalid key: {}", context)
            }
            Self::InsufficientEntropy {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Insufficient entropy (requested {}, available {})",
                    requested, available
                )
            }
            Self::SigningError { context } => {
                write!(f, "Signing failed: {}", context)
            }
            Self::RandomGeneration { context } => {
                write!(f, "Random generation error: {}", context)
            }
        }
    }
}

impl std::error::Error for Error {}
