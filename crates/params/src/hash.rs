//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Output size of SHA3-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-512 in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// Output size of Keccak-256 in bytes
pub const KECCAK256_OUTPUT_SIZE: usize = 32;

/// Fixed output size this library draws from the SHAKE-256 extendable
/// output function, in bytes
pub const SHAKE256_FIXED_OUTPUT_SIZE: usize = 32;
