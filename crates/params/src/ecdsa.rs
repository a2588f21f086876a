//! Constants for ECDSA over NIST P-256

/// Size of a P-256 private scalar in bytes
pub const P256_SCALAR_SIZE: usize = 32;

/// Size of a raw P-256 public key in bytes (X || Y coordinates)
pub const P256_PUBLIC_KEY_SIZE: usize = 64;

/// Size of a fixed-width P-256 signature in bytes (R || S, each padded to
/// the scalar width)
pub const P256_SIGNATURE_SIZE: usize = 64;
