//! Deterministic pseudo-vectors for out-of-vocabulary words.
//!
//! The vector is drawn from a `StdRng` seeded with the FNV-1a hash of the key,
//! so the same word always maps to the same low-magnitude vector.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Standard deviation of each fallback component.
pub const FALLBACK_SCALE: f32 = 0.1;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over raw bytes.
pub fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Builds the fallback vector for `key`: `dimension` standard-normal samples scaled
/// by [`FALLBACK_SCALE`].
pub fn pseudo_vector(key: &str, dimension: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(fnv1a(key.as_bytes()));
    (0..dimension)
        .map(|_| rng.sample::<f32, _>(StandardNormal) * FALLBACK_SCALE)
        .collect()
}
