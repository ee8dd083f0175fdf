//! Slug codec: a bijection between seeds and memorable phrases.
//!
//! The dictionary order *is* the encoding. Entries may be appended in a
//! later release but never reordered, renamed or removed, or every link
//! shared before the change decodes to a different game.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CodeError;
use crate::rng::Mulberry32;

/// Ordered slug dictionary. Index `i` encodes seed `i`.
pub const SLUG_DICTIONARY: [&str; 50] = [
    "you-are-gay",
    "skill-issue",
    "gg-ez",
    "touch-grass",
    "no-cap",
    "main-character",
    "big-brain",
    "sus-behavior",
    "its-giving",
    "rent-free",
    "not-the-vibe",
    "lowkey-cooked",
    "ratio-plus-l",
    "caught-lacking",
    "built-different",
    "say-less",
    "bet-bet-bet",
    "down-bad",
    "npc-energy",
    "cringe-arc",
    "ate-and-left",
    "hard-carry",
    "git-gud",
    "rage-quit",
    "one-more-round",
    "trust-the-process",
    "vibe-check",
    "plot-twist",
    "chaos-mode",
    "sweaty-tryhard",
    "clutch-or-kick",
    "no-thoughts",
    "big-yikes",
    "bruh-moment",
    "ok-boomer",
    "galaxy-brain",
    "salty-loser",
    "literally-shaking",
    "nerf-this",
    "send-it",
    "spill-the-tea",
    "certified-fresh",
    "emotional-damage",
    "free-real-estate",
    "mission-failed",
    "side-quest",
    "final-boss",
    "speedrun-any",
    "lag-switch",
    "rizz-lord",
];

/// Size of the seed space.
#[allow(clippy::cast_possible_truncation)]
pub const SLUG_COUNT: u32 = SLUG_DICTIONARY.len() as u32;

/// A seed in `[0, SLUG_COUNT)`.
///
/// Serializes as its integer value; deserializing rejects out-of-range
/// integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Seed(u32);

impl Seed {
    /// Returns the seed if `value` is already in range.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        (value < SLUG_COUNT).then_some(Self(value))
    }

    /// Normalizes any integer into the seed space with a Euclidean modulo,
    /// so `-1` maps to the last slug rather than failing.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_index(index: i64) -> Self {
        Self(index.rem_euclid(i64::from(SLUG_COUNT)) as u32)
    }

    /// The raw seed value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// The slug this seed encodes to.
    #[must_use]
    pub fn slug(self) -> &'static str {
        SLUG_DICTIONARY[self.0 as usize]
    }

    /// A fresh generator positioned at the start of this seed's stream.
    #[must_use]
    pub fn rng(self) -> Mulberry32 {
        Mulberry32::new(i64::from(self.0))
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl TryFrom<u32> for Seed {
    type Error = CodeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CodeError::OutOfRange {
            field: "seed",
            value,
            min: 0,
            max: SLUG_COUNT - 1,
        })
    }
}

impl From<Seed> for u32 {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

/// Encodes any integer to its slug. Total: out-of-range and negative
/// values wrap with a Euclidean modulo.
#[must_use]
pub fn encode(seed: i64) -> &'static str {
    Seed::from_index(seed).slug()
}

/// Looks a slug up in the dictionary. Exact and case-sensitive; anything
/// that is not a dictionary entry yields `None`.
#[must_use]
pub fn decode(slug: &str) -> Option<Seed> {
    SLUG_DICTIONARY
        .iter()
        .position(|entry| *entry == slug)
        .and_then(|index| u32::try_from(index).ok())
        .map(Seed)
}

/// Draws a uniform seed from the thread-local, non-cryptographic RNG.
#[must_use]
pub fn generate() -> Seed {
    generate_with(&mut rand::rng())
}

/// Draws a uniform seed from a caller-supplied RNG.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Seed {
    Seed(rng.random_range(0..SLUG_COUNT))
}

/// Where new seeds come from when a game code is minted.
pub trait SeedSource: Send + Sync {
    /// Returns a new seed.
    fn next_seed(&self) -> Seed;
}

/// Production seed source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSeedSource;

impl SeedSource for ThreadRngSeedSource {
    fn next_seed(&self) -> Seed {
        generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::DeterministicRng;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_dictionary_has_fifty_distinct_kebab_entries() {
        let unique: HashSet<&str> = SLUG_DICTIONARY.iter().copied().collect();
        assert_eq!(unique.len(), 50);
        for entry in SLUG_DICTIONARY {
            assert!(!entry.is_empty());
            assert!(
                entry.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "{entry} is not kebab-case"
            );
            assert!(!entry.starts_with('-') && !entry.ends_with('-'));
        }
    }

    #[test]
    fn test_no_entry_is_a_field_suffix_of_another() {
        for long in SLUG_DICTIONARY {
            for short in SLUG_DICTIONARY {
                if long != short {
                    assert!(
                        !long.ends_with(&format!("-{short}")),
                        "{short} is a suffix of {long}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_dictionary_head_is_stable() {
        assert_eq!(&SLUG_DICTIONARY[..3], &["you-are-gay", "skill-issue", "gg-ez"]);
    }

    #[test]
    fn test_seed_seven_end_to_end() {
        let slug = encode(7);
        assert_eq!(slug, SLUG_DICTIONARY[7]);
        let seed = decode(slug).unwrap();
        assert_eq!(seed.value(), 7);
        let mut rng = seed.rng();
        assert_eq!(rng.next_f64().to_bits(), 0.011_704_753_153_026_104_f64.to_bits());
    }

    #[test]
    fn test_index_zero_decodes_to_some() {
        assert_eq!(decode("you-are-gay"), Seed::new(0));
    }

    #[test]
    fn test_decode_rejects_near_misses() {
        for input in ["", "ZZZZ", "abc", "Skill-Issue", " skill-issue", "skill-issue ", "skill_issue"] {
            assert_eq!(decode(input), None, "{input:?} should not decode");
        }
    }

    #[test]
    fn test_encode_wraps_large_and_negative_seeds() {
        assert_eq!(encode(50), encode(0));
        assert_eq!(encode(57), encode(7));
        assert_eq!(encode(-1), SLUG_DICTIONARY[49]);
        assert_eq!(encode(-50), SLUG_DICTIONARY[0]);
    }

    #[test]
    fn test_seed_new_rejects_out_of_range() {
        assert!(Seed::new(49).is_some());
        assert!(Seed::new(50).is_none());
    }

    #[test]
    fn test_seed_display_is_slug() {
        assert_eq!(Seed::from_index(1).to_string(), "skill-issue");
    }

    #[test]
    fn test_seed_serde_uses_integer_and_validates() {
        let json = serde_json::to_string(&Seed::from_index(12)).unwrap();
        assert_eq!(json, "12");
        let parsed: Seed = serde_json::from_str("12").unwrap();
        assert_eq!(parsed.value(), 12);
        assert!(serde_json::from_str::<Seed>("50").is_err());
    }

    #[test]
    fn test_generate_stays_in_range() {
        for _ in 0..500 {
            assert!(generate().value() < SLUG_COUNT);
        }
        assert!(ThreadRngSeedSource.next_seed().value() < SLUG_COUNT);
    }

    proptest! {
        #[test]
        fn prop_encode_decode_round_trips(seed in 0u32..SLUG_COUNT) {
            let decoded = decode(encode(i64::from(seed))).unwrap();
            prop_assert_eq!(decoded.value(), seed);
        }

        #[test]
        fn prop_non_members_never_decode(input in "\\PC*") {
            prop_assume!(!SLUG_DICTIONARY.contains(&input.as_str()));
            prop_assert_eq!(decode(&input), None);
        }

        #[test]
        fn prop_encode_is_total(seed in any::<i64>()) {
            prop_assert!(SLUG_DICTIONARY.contains(&encode(seed)));
        }
    }
}
