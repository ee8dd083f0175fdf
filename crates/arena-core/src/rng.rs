//! Random number generator abstraction for determinism.
//!
//! Every game setup draws from a [`DeterministicRng`]. In play this is a
//! [`Mulberry32`] seeded from a decoded slug; in tests a scripted
//! implementation is injected.

/// Abstraction over a reproducible stream of uniform floats.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Generate an index in `[0, len)` as `floor(next_f64() * len)`.
    ///
    /// Consumes exactly one draw. Returns 0 without drawing when `len` is 0.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let index = (self.next_f64() * len as f64).floor() as usize;
        // A scripted source may hand back exactly 1.0.
        index.min(len - 1)
    }

    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        let span = (max - min) as usize + 1;
        #[allow(clippy::cast_possible_truncation)]
        let offset = self.next_index(span) as u32;
        min + offset
    }
}

/// Additive constant applied to the state word before every draw.
const GOLDEN_STEP: u32 = 0x6d2b_79f5;

/// 2^32, the divisor that maps a 32-bit output into `[0, 1)`.
const U32_RANGE: f64 = 4_294_967_296.0;

/// The mulberry32 generator.
///
/// State is a single 32-bit word. Every operation wraps at 32 bits, so the
/// output matches any other mulberry32 implementation bit for bit. The type
/// is deliberately not `Clone`: replaying a sequence means constructing a
/// new generator from the same seed.
#[derive(Debug)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a generator from `seed`, keeping only its low 32 bits.
    ///
    /// This is the same coercion as a signed 32-bit `seed | 0`, so `-1` and
    /// `0xffff_ffff` seed identical streams.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed as u32,
        }
    }

    /// Advances the state and returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_STEP);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl DeterministicRng for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }
}
