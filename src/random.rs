//! Random number generator construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a generator seeded from `seed`, or from the OS when `None`.
///
/// The same seed always yields the same sequence.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
