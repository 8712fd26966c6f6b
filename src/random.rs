//! Seedable RNG construction.
//!
//! Every randomized stage takes an explicit `&mut R where R: Rng` instead of
//! drawing from a process-wide generator, so a fixed seed reproduces an
//! entire run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a seed.
///
/// Used by [`GaRunner`](crate::GaRunner) for `GaConfig::seed` and by tests
/// that need reproducible draws.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
