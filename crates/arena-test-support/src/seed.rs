//! Seed source that always hands out the same seed.

use arena_core::slug::{Seed, SeedSource};

/// A `SeedSource` pinned to one seed, for asserting on minted game codes.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeedSource(pub Seed);

impl SeedSource for FixedSeedSource {
    fn next_seed(&self) -> Seed {
        self.0
    }
}
