//! Imposter: everyone gets the secret word except the imposters.
//!
//! Code layout: `{players}-{imposters}-{category}-{slug}`.

use arena_content::ContentPack;
use arena_core::code::{self, CodeFields};
use arena_core::error::{CodeError, DomainError};
use arena_core::rng::DeterministicRng;
use arena_core::shuffle::{pick, shuffle};
use arena_core::slug::Seed;
use serde::{Deserialize, Serialize};

use crate::mode::{GameMode, check_category};

const MIN_PLAYERS: u32 = 3;
const MAX_PLAYERS: u32 = 12;
const MIN_IMPOSTERS: u32 = 1;
const MAX_IMPOSTERS: u32 = 3;

/// Imposter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImposterConfig {
    /// Seats at the table (3–12).
    pub players: u32,
    /// Imposters among them (1–3, always a strict minority).
    pub imposters: u32,
    /// Word category, or `random`.
    pub category: String,
}

/// What one seat is told.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum SeatCard {
    /// A regular player who knows the word.
    Crew {
        /// The secret word.
        word: String,
    },
    /// An imposter who must bluff.
    Imposter,
}

/// A dealt round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImposterRound {
    /// The word shared by the crew.
    pub secret_word: String,
    /// Imposter seat indices, ascending.
    pub imposters: Vec<u32>,
    /// Seat that gives the first clue.
    pub first_speaker: u32,
    /// Number of seats.
    pub players: u32,
}

impl ImposterRound {
    /// The card shown to `seat`.
    #[must_use]
    pub fn card_for(&self, seat: u32) -> SeatCard {
        if self.imposters.contains(&seat) {
            SeatCard::Imposter
        } else {
            SeatCard::Crew {
                word: self.secret_word.clone(),
            }
        }
    }
}

/// The Imposter game mode.
#[derive(Debug, Clone, Copy)]
pub struct Imposter;

impl GameMode for Imposter {
    const ID: &'static str = "imposter";
    type Config = ImposterConfig;
    type State = ImposterRound;

    fn validate(config: &Self::Config) -> Result<(), CodeError> {
        code::check_bounds("players", config.players, MIN_PLAYERS, MAX_PLAYERS)?;
        code::check_bounds("imposters", config.imposters, MIN_IMPOSTERS, MAX_IMPOSTERS)?;
        if config.imposters * 2 >= config.players {
            return Err(CodeError::Constraint(format!(
                "{} imposters need more than {} players",
                config.imposters,
                config.imposters * 2
            )));
        }
        check_category(&config.category)
    }

    fn format_code(config: &Self::Config, seed: Seed) -> String {
        code::join(
            &[
                &config.players.to_string(),
                &config.imposters.to_string(),
                &config.category,
            ],
            seed,
        )
    }

    fn parse_code(code: &str) -> Result<(Self::Config, Seed), CodeError> {
        let fields = CodeFields::parse(code, 2, true)?;
        let config = ImposterConfig {
            players: code::parse_bounded("players", fields.field(0, "players")?, MIN_PLAYERS, MAX_PLAYERS)?,
            imposters: code::parse_bounded(
                "imposters",
                fields.field(1, "imposters")?,
                MIN_IMPOSTERS,
                MAX_IMPOSTERS,
            )?,
            category: fields.category()?.to_owned(),
        };
        Self::validate(&config)?;
        Ok((config, fields.seed))
    }

    /// Draw order: pick the secret word, shuffle the seats (the first
    /// `imposters` seats of the shuffle are imposters), pick the first
    /// speaker.
    fn setup(
        config: &Self::Config,
        content: &ContentPack,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self::State, DomainError> {
        let pool = content.words(&config.category)?;
        let secret_word = pick(&pool, rng)
            .cloned()
            .ok_or_else(|| DomainError::InsufficientContent {
                pool: format!("words/{}", config.category),
                needed: 1,
                available: 0,
            })?;

        let mut seats: Vec<u32> = (0..config.players).collect();
        shuffle(&mut seats, rng);
        let mut imposters = seats[..config.imposters as usize].to_vec();
        imposters.sort_unstable();

        #[allow(clippy::cast_possible_truncation)]
        let first_speaker = rng.next_index(config.players as usize) as u32;

        Ok(ImposterRound {
            secret_word,
            imposters,
            first_speaker,
            players: config.players,
        })
    }
}
