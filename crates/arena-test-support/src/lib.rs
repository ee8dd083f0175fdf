//! Shared test doubles and fixtures for The Arena.

mod content;
mod rng;
mod seed;

pub use content::test_content_pack;
pub use rng::{MockRng, SequenceRng};
pub use seed::FixedSeedSource;
