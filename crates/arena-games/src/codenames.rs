//! Codenames: a 5×5 word board with a secret key card.
//!
//! Code layout: `{teams}-{category}-{slug}`.

use arena_content::ContentPack;
use arena_core::code::{self, CodeFields};
use arena_core::error::{CodeError, DomainError};
use arena_core::rng::DeterministicRng;
use arena_core::shuffle::{sample, shuffle};
use arena_core::slug::Seed;
use serde::{Deserialize, Serialize};

use crate::mode::{GameMode, check_category};

/// Cards on the board.
pub const BOARD_SIZE: usize = 25;

const MIN_TEAMS: u32 = 2;
const MAX_TEAMS: u32 = 4;

/// Codenames configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodenamesConfig {
    /// Number of competing teams (2–4).
    pub teams: u32,
    /// Word category, or `random`.
    pub category: String,
}

/// What a card hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardRole {
    /// An agent belonging to `team`.
    Team {
        /// Owning team index.
        team: u32,
    },
    /// A bystander.
    Neutral,
    /// Ends the game for the team that reveals it.
    Assassin,
}

/// One board card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// The word shown to everyone.
    pub word: String,
    /// The role only spymasters see.
    pub role: CardRole,
}

/// A generated board. `cards` is row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodenamesBoard {
    /// Number of teams.
    pub teams: u32,
    /// Team that plays first and owns one extra agent.
    pub starting_team: u32,
    /// The 25 cards.
    pub cards: Vec<Card>,
}

impl CodenamesBoard {
    /// Number of agents `team` must find.
    #[must_use]
    pub fn agents_for(&self, team: u32) -> usize {
        self.cards
            .iter()
            .filter(|card| card.role == CardRole::Team { team })
            .count()
    }
}

/// Agents per team before the starting team's bonus agent, and the
/// neutral count, such that every board holds exactly 25 cards.
fn key_card_counts(teams: u32) -> (usize, usize) {
    let per_team = match teams {
        2 => 8,
        3 => 6,
        _ => 5,
    };
    let agents = per_team * teams as usize + 1;
    (per_team, BOARD_SIZE - agents - 1)
}

/// The Codenames game mode.
#[derive(Debug, Clone, Copy)]
pub struct Codenames;

impl GameMode for Codenames {
    const ID: &'static str = "codenames";
    type Config = CodenamesConfig;
    type State = CodenamesBoard;

    fn validate(config: &Self::Config) -> Result<(), CodeError> {
        code::check_bounds("teams", config.teams, MIN_TEAMS, MAX_TEAMS)?;
        check_category(&config.category)
    }

    fn format_code(config: &Self::Config, seed: Seed) -> String {
        code::join(&[&config.teams.to_string(), &config.category], seed)
    }

    fn parse_code(code: &str) -> Result<(Self::Config, Seed), CodeError> {
        let fields = CodeFields::parse(code, 1, true)?;
        let teams = code::parse_bounded("teams", fields.field(0, "teams")?, MIN_TEAMS, MAX_TEAMS)?;
        let config = CodenamesConfig {
            teams,
            category: fields.category()?.to_owned(),
        };
        Self::validate(&config)?;
        Ok((config, fields.seed))
    }

    /// Draw order: sample 25 words (a full shuffle of the pool), pick the
    /// starting team, shuffle the key card.
    fn setup(
        config: &Self::Config,
        content: &ContentPack,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self::State, DomainError> {
        let pool = content.words(&config.category)?;
        let words = sample(&format!("words/{}", config.category), &pool, BOARD_SIZE, rng)?;

        #[allow(clippy::cast_possible_truncation)]
        let starting_team = rng.next_index(config.teams as usize) as u32;

        let (per_team, neutral) = key_card_counts(config.teams);
        let mut roles = Vec::with_capacity(BOARD_SIZE);
        for team in 0..config.teams {
            let agents = if team == starting_team { per_team + 1 } else { per_team };
            roles.extend(std::iter::repeat_n(CardRole::Team { team }, agents));
        }
        roles.extend(std::iter::repeat_n(CardRole::Neutral, neutral));
        roles.push(CardRole::Assassin);
        shuffle(&mut roles, rng);

        let cards = words
            .into_iter()
            .zip(roles)
            .map(|(word, role)| Card { word, role })
            .collect();

        Ok(CodenamesBoard {
            teams: config.teams,
            starting_team,
            cards,
        })
    }
}
