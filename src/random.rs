//! Seedable random number generation.
//!
//! Every random draw in the crate goes through an explicitly passed
//! generator. The engine builds one with [`create_rng`] from
//! [`GaConfig::seed`](crate::ga::GaConfig::seed), so two runs with the same
//! seed and inputs produce identical results.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generator type owned by [`GaEngine`](crate::ga::GaEngine).
pub type GaRng = ChaCha8Rng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> GaRng {
    ChaCha8Rng::seed_from_u64(seed)
}
