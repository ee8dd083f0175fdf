//! Truth or Dare: shuffled prompt decks and a shuffled turn order.
//!
//! Code layout: `{players}-{category}-{slug}`.

use arena_content::ContentPack;
use arena_core::code::{self, CodeFields};
use arena_core::error::{CodeError, DomainError};
use arena_core::rng::DeterministicRng;
use arena_core::shuffle::{shuffle, shuffled};
use arena_core::slug::Seed;
use serde::{Deserialize, Serialize};

use crate::mode::{GameMode, check_category};

const MIN_PLAYERS: u32 = 2;
const MAX_PLAYERS: u32 = 20;

/// Truth or Dare configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthOrDareConfig {
    /// Players in the circle (2–20).
    pub players: u32,
    /// Deck category (`mild`, `spicy`, ...) or `random`.
    pub category: String,
}

/// Decks and seating for one session. Prompts are drawn from the front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthOrDareSession {
    /// Shuffled truth prompts.
    pub truths: Vec<String>,
    /// Shuffled dare prompts.
    pub dares: Vec<String>,
    /// Seat indices in play order.
    pub turn_order: Vec<u32>,
}

/// The Truth or Dare game mode.
#[derive(Debug, Clone, Copy)]
pub struct TruthOrDare;

impl GameMode for TruthOrDare {
    const ID: &'static str = "truth-or-dare";
    type Config = TruthOrDareConfig;
    type State = TruthOrDareSession;

    fn validate(config: &Self::Config) -> Result<(), CodeError> {
        code::check_bounds("players", config.players, MIN_PLAYERS, MAX_PLAYERS)?;
        check_category(&config.category)
    }

    fn format_code(config: &Self::Config, seed: Seed) -> String {
        code::join(&[&config.players.to_string(), &config.category], seed)
    }

    fn parse_code(code: &str) -> Result<(Self::Config, Seed), CodeError> {
        let fields = CodeFields::parse(code, 1, true)?;
        let config = TruthOrDareConfig {
            players: code::parse_bounded("players", fields.field(0, "players")?, MIN_PLAYERS, MAX_PLAYERS)?,
            category: fields.category()?.to_owned(),
        };
        Self::validate(&config)?;
        Ok((config, fields.seed))
    }

    /// Draw order: shuffle truths, shuffle dares, shuffle seats.
    fn setup(
        config: &Self::Config,
        content: &ContentPack,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self::State, DomainError> {
        let deck = content.truth_or_dare(&config.category)?;
        let truths = shuffled(&deck.truths, rng);
        let dares = shuffled(&deck.dares, rng);

        let mut turn_order: Vec<u32> = (0..config.players).collect();
        shuffle(&mut turn_order, rng);

        Ok(TruthOrDareSession {
            truths,
            dares,
            turn_order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_test_support::{SequenceRng, test_content_pack};

    fn config(players: u32) -> TruthOrDareConfig {
        TruthOrDareConfig {
            players,
            category: "mild".to_owned(),
        }
    }

    #[test]
    fn test_code_round_trip() {
        let seed = Seed::from_index(20);
        let code = TruthOrDare::format_code(&config(6), seed);
        assert_eq!(code, "6-mild-ate-and-left");
        assert_eq!(TruthOrDare::parse_code(&code).unwrap(), (config(6), seed));
    }

    #[test]
    fn test_rejects_single_player() {
        assert!(matches!(
            TruthOrDare::parse_code("1-mild-gg-ez"),
            Err(CodeError::OutOfRange { field: "players", .. })
        ));
    }

    #[test]
    fn test_draw_order_is_truths_dares_seats() {
        // 4 truths -> 3 draws, 3 dares -> 2 draws, 3 seats -> 2 draws.
        let mut rng = SequenceRng::new(vec![0.9, 0.9, 0.9, 0.0, 0.0, 0.9, 0.9]);

        let session = TruthOrDare::setup(&config(3), &test_content_pack(), &mut rng).unwrap();

        assert!(rng.is_exhausted());
        assert_eq!(session.truths, vec!["t1", "t2", "t3", "t4"]);
        assert_eq!(session.dares, vec!["d2", "d3", "d1"]);
        assert_eq!(session.turn_order, vec![0, 1, 2]);
    }

    #[test]
    fn test_unknown_deck_is_reported() {
        let err = TruthOrDare::setup(
            &TruthOrDareConfig {
                players: 3,
                category: "extreme".to_owned(),
            },
            &test_content_pack(),
            &mut Seed::from_index(0).rng(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::UnknownCategory(name) if name == "extreme"));
    }
}
