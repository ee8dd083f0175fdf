//! Seeded shuffle and selection helpers shared by every game setup.
//!
//! The number and order of draws each helper makes is fixed: game codes
//! shared yesterday must rebuild the same board today.

use crate::error::DomainError;
use crate::rng::DeterministicRng;

/// Shuffles `items` in place with Fisher–Yates, walking from the last index
/// down and swapping `i` with `floor(next * (i + 1))`.
///
/// Makes exactly `items.len() - 1` draws (none for 0 or 1 items).
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn DeterministicRng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `items`.
#[must_use]
pub fn shuffled<T: Clone>(items: &[T], rng: &mut dyn DeterministicRng) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle(&mut copy, rng);
    copy
}

/// Draws `count` distinct entries from `pool`: a full shuffle of a copy,
/// truncated to `count`.
///
/// The whole pool is shuffled even when `count` is small, so the number of
/// draws depends only on the pool size.
///
/// # Errors
///
/// Returns `DomainError::InsufficientContent` if `count` exceeds the pool.
pub fn sample<T: Clone>(
    pool_name: &str,
    pool: &[T],
    count: usize,
    rng: &mut dyn DeterministicRng,
) -> Result<Vec<T>, DomainError> {
    if count > pool.len() {
        return Err(DomainError::InsufficientContent {
            pool: pool_name.to_owned(),
            needed: count,
            available: pool.len(),
        });
    }
    let mut picked = shuffled(pool, rng);
    picked.truncate(count);
    Ok(picked)
}

/// Picks one entry with a single draw. An empty pool yields `None` and
/// consumes nothing.
pub fn pick<'a, T>(pool: &'a [T], rng: &mut dyn DeterministicRng) -> Option<&'a T> {
    if pool.is_empty() {
        return None;
    }
    pool.get(rng.next_index(pool.len()))
}
