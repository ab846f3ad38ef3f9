//! Entropy collaborator supplying placement seeds.

use rand::rngs::OsRng;
use rand::RngCore;

/// Source of placement seeds.
///
/// One fresh seed per conceal operation; a seed is never reused and exists
/// only transiently in memory and inside its sealed form in the image.
/// Production code uses [`OsEntropy`]; tests may inject a fixed source to
/// make slot placement observable.
pub trait EntropySource {
    fn next_seed(&mut self) -> u64;
}

/// Cryptographically secure OS-backed entropy.
#[derive(Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_seed(&mut self) -> u64 {
        OsRng.next_u64()
    }
}
