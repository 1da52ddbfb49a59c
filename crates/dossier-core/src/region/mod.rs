//! Region and archetype sampling.

pub mod catalog;
pub mod pool;

pub use catalog::{ARCHETYPES, GLOBAL_REGIONS, sorted_regions};
pub use pool::{RegionPool, SHUFFLE_PASSES, hardened_shuffle};

use rand::Rng;
use rand::seq::SliceRandom;

/// Picks a profession uniformly at random, independent of any filter.
pub fn random_archetype<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ARCHETYPES.choose(rng).copied().unwrap_or("Software Developer")
}
