//! Test RNG: scripted `DeterministicRng` implementations for tests.

use arena_core::rng::DeterministicRng;

/// A no-op RNG that always returns `0.0`, so every index draw picks 0 and
/// every Fisher–Yates swap exchanges with the front.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted, which makes it double as a draw counter: a setup
/// that takes one draw too many fails loudly.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            index: 0,
        }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }

    /// Whether every scripted value has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.draws() == self.values.len()
    }
}

impl DeterministicRng for SequenceRng {
    fn next_f64(&mut self) -> f64 {
        let Some(value) = self.values.get(self.index) else {
            panic!("SequenceRng exhausted after {} values", self.values.len());
        };
        self.index += 1;
        *value
    }
}
