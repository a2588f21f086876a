//! Constants for the Ed25519 signature scheme

/// Size of an Ed25519 public key in bytes
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of an Ed25519 private seed in bytes
pub const ED25519_SEED_SIZE: usize = 32;

/// Size of the Ed25519 keypair encoding in bytes (seed || public key)
pub const ED25519_KEYPAIR_SIZE: usize = 64;

/// Size of an Ed25519 signature in bytes
pub const ED25519_SIGNATURE_SIZE: usize = 64;
