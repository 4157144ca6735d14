//! Seedable random number generation.
//!
//! Every run owns its generator; nothing in the crate draws from a
//! process-wide source except [`fresh_seed`] when the caller did not
//! supply one.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a seed from the thread-local entropy source.
pub fn fresh_seed() -> u64 {
    rand::random()
}

/// Derives the seed of the `index`-th independent stream from `base`.
///
/// SplitMix64 finalizer, so neighbouring indices give unrelated streams.
pub fn derive_seed(base: u64, index: u64) -> u64 {
    let mut z = base.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
