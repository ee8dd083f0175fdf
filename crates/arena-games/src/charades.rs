//! Charades: teams take turns acting out prompts.
//!
//! Code layout: `{teams}-{difficulty}-{rounds}-{category}-{slug}`.

use std::fmt;

use arena_content::ContentPack;
use arena_core::code::{self, CodeFields};
use arena_core::error::{CodeError, DomainError};
use arena_core::rng::DeterministicRng;
use arena_core::shuffle::sample;
use arena_core::slug::Seed;
use serde::{Deserialize, Serialize};

use crate::mode::{GameMode, check_category};
use crate::turns::{self, Turn};

const MIN_TEAMS: u32 = 2;
const MAX_TEAMS: u32 = 4;
const MIN_ROUNDS: u32 = 1;
const MAX_ROUNDS: u32 = 20;

/// Which half of a charades deck to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Single words.
    Easy,
    /// Short phrases.
    Medium,
}

impl Difficulty {
    /// The code spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
        }
    }

    /// Parses the code spelling. Case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns `CodeError::UnknownVariant` for anything but `easy` or
    /// `medium`.
    pub fn parse(raw: &str) -> Result<Self, CodeError> {
        match raw {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            _ => Err(CodeError::UnknownVariant {
                field: "difficulty",
                value: raw.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Charades configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharadesConfig {
    /// Competing teams (2–4).
    pub teams: u32,
    /// Prompt difficulty.
    pub difficulty: Difficulty,
    /// Rounds; every team acts once per round (1–20).
    pub rounds: u32,
    /// Deck category, or `random`.
    pub category: String,
}

/// The full turn schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharadesSchedule {
    /// Team that acts first in every round.
    pub starting_team: u32,
    /// `teams * rounds` turns, round by round.
    pub turns: Vec<Turn>,
}

/// The Charades game mode.
#[derive(Debug, Clone, Copy)]
pub struct Charades;

impl GameMode for Charades {
    const ID: &'static str = "charades";
    type Config = CharadesConfig;
    type State = CharadesSchedule;

    fn validate(config: &Self::Config) -> Result<(), CodeError> {
        code::check_bounds("teams", config.teams, MIN_TEAMS, MAX_TEAMS)?;
        code::check_bounds("rounds", config.rounds, MIN_ROUNDS, MAX_ROUNDS)?;
        check_category(&config.category)
    }

    fn format_code(config: &Self::Config, seed: Seed) -> String {
        code::join(
            &[
                &config.teams.to_string(),
                config.difficulty.as_str(),
                &config.rounds.to_string(),
                &config.category,
            ],
            seed,
        )
    }

    fn parse_code(code: &str) -> Result<(Self::Config, Seed), CodeError> {
        let fields = CodeFields::parse(code, 3, true)?;
        let config = CharadesConfig {
            teams: code::parse_bounded("teams", fields.field(0, "teams")?, MIN_TEAMS, MAX_TEAMS)?,
            difficulty: Difficulty::parse(fields.field(1, "difficulty")?)?,
            rounds: code::parse_bounded("rounds", fields.field(2, "rounds")?, MIN_ROUNDS, MAX_ROUNDS)?,
            category: fields.category()?.to_owned(),
        };
        Self::validate(&config)?;
        Ok((config, fields.seed))
    }

    /// Draw order: sample `teams * rounds` prompts from the difficulty's
    /// list (a full shuffle), pick the starting team.
    fn setup(
        config: &Self::Config,
        content: &ContentPack,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self::State, DomainError> {
        let deck = content.charades(&config.category)?;
        let pool = match config.difficulty {
            Difficulty::Easy => &deck.easy,
            Difficulty::Medium => &deck.medium,
        };
        let needed = (config.teams * config.rounds) as usize;
        let prompts = sample(
            &format!("charades/{}/{}", config.category, config.difficulty),
            pool,
            needed,
            rng,
        )?;

        #[allow(clippy::cast_possible_truncation)]
        let starting_team = rng.next_index(config.teams as usize) as u32;

        Ok(CharadesSchedule {
            starting_team,
            turns: turns::schedule(prompts, config.teams, starting_team),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::start_game;
    use arena_test_support::{SequenceRng, test_content_pack};

    fn config(teams: u32, difficulty: Difficulty, rounds: u32, category: &str) -> CharadesConfig {
        CharadesConfig {
            teams,
            difficulty,
            rounds,
            category: category.to_owned(),
        }
    }

    #[test]
    fn test_code_round_trip_with_hyphenated_category() {
        let seed = Seed::from_index(1);
        let wanted = config(2, Difficulty::Medium, 4, "pop-culture");

        let code = Charades::format_code(&wanted, seed);

        assert_eq!(code, "2-medium-4-pop-culture-skill-issue");
        assert_eq!(Charades::parse_code(&code).unwrap(), (wanted, seed));
    }

    #[test]
    fn test_rejects_malformed_codes() {
        let cases = [
            "1-medium-4-random-abc",
            "5-medium-4-random-abc",
            "2-hard-4-random-abc",
            "2-easy-0-random-abc",
            "2-medium-4-random-ZZZZ",
            "",
        ];
        for code in cases {
            assert!(Charades::parse_code(code).is_err(), "{code:?} should be rejected");
        }
    }

    #[test]
    fn test_rejections_name_the_field_when_slug_is_valid() {
        assert!(matches!(
            Charades::parse_code("1-medium-4-random-gg-ez"),
            Err(CodeError::OutOfRange { field: "teams", value: 1, .. })
        ));
        assert!(matches!(
            Charades::parse_code("5-medium-4-random-gg-ez"),
            Err(CodeError::OutOfRange { field: "teams", value: 5, .. })
        ));
        assert!(matches!(
            Charades::parse_code("2-hard-4-random-gg-ez"),
            Err(CodeError::UnknownVariant { field: "difficulty", .. })
        ));
        assert!(matches!(
            Charades::parse_code("2-easy-0-random-gg-ez"),
            Err(CodeError::OutOfRange { field: "rounds", value: 0, .. })
        ));
        assert!(matches!(
            Charades::parse_code("2-Medium-4-random-gg-ez"),
            Err(CodeError::UnknownVariant { .. })
        ));
        assert_eq!(Charades::parse_code(""), Err(CodeError::Empty));
    }

    #[test]
    fn test_draw_order_is_prompts_then_starter() {
        // chores/easy has 8 prompts -> 7 draws, then 1 for the starter.
        let mut values = vec![0.0; 7];
        values.push(0.75);
        let mut rng = SequenceRng::new(values);

        let schedule = Charades::setup(
            &config(2, Difficulty::Easy, 2, "chores"),
            &test_content_pack(),
            &mut rng,
        )
        .unwrap();

        assert!(rng.is_exhausted());
        assert_eq!(schedule.starting_team, 1);
        let layout: Vec<(u32, u32, &str)> = schedule
            .turns
            .iter()
            .map(|turn| (turn.round, turn.team, turn.prompt.as_str()))
            .collect();
        assert_eq!(
            layout,
            vec![(1, 1, "mop"), (1, 0, "dust"), (2, 1, "wash"), (2, 0, "iron")]
        );
    }

    #[test]
    fn test_medium_deck_too_small() {
        let err = Charades::setup(
            &config(3, Difficulty::Medium, 2, "chores"),
            &test_content_pack(),
            &mut Seed::from_index(0).rng(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InsufficientContent { needed: 6, available: 4, .. }));
    }

    #[test]
    fn test_start_game_is_reproducible() {
        let pack = test_content_pack();
        let first = start_game::<Charades>("2-easy-3-chores-big-brain", &pack).unwrap();
        let second = start_game::<Charades>("2-easy-3-chores-big-brain", &pack).unwrap();
        assert_eq!(first.state, second.state);
        assert_eq!(first.state.turns.len(), 6);
    }
}
