//! SHAKE-256 hasher with fixed-width output
//!
//! SHAKE is an extendable output function rather than a fixed-width
//! digest. This wrapper pins the output at 32 bytes so the suite machinery
//! can treat it like any other hasher.

use ::sha3::digest::{ExtendableOutput, Update, XofReader};
use ::sha3::Shake256;
use sigsuite_params::hash::SHAKE256_FIXED_OUTPUT_SIZE;

use super::Hasher;

/// SHAKE-256 truncated to a 32 byte digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Shake256Hasher;

impl Hasher for Shake256Hasher {
    fn hash(&self, chunks: &[&[u8]]) -> Vec<u8> {
        let mut xof = Shake256::default();
        for chunk in chunks {
            xof.update(chunk);
        }
        let mut out = vec![0u8; SHAKE256_FIXED_OUTPUT_SIZE];
        xof.finalize_xof().read(&mut out);
        out
    }
}
