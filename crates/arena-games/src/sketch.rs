//! Sketch: teams take turns drawing a word for their teammates to guess.
//!
//! Code layout: `{teams}-{rounds}-{category}-{slug}`.
//!
//! During play, strokes and guesses are broadcast to the room as
//! [`SketchMessage`]s; the transport is provided by the client.

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
const MAX_TEAMS: u32 = 6;
const MIN_ROUNDS: u32 = 1;
const MAX_ROUNDS: u32 = 20;

/// Sketch configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SketchConfig {
    /// Competing teams (2–6).
    pub teams: u32,
    /// Rounds; every team draws once per round (1–20).
    pub rounds: u32,
    /// Word category, or `random`.
    pub category: String,
}

/// The drawing schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SketchSchedule {
    /// Team that draws first in every round.
    pub starting_team: u32,
    /// `teams * rounds` turns, round by round.
    pub turns: Vec<Turn>,
}

/// A point on the shared canvas, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

/// Realtime room message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SketchMessage {
    /// A finished pen stroke.
    Stroke {
        /// Polyline points.
        points: Vec<Point>,
        /// CSS color string.
        color: String,
        /// Brush diameter.
        size: f32,
    },
    /// A guess typed by a player.
    Guess {
        /// Guess text as typed.
        text: String,
        /// Guessing team.
        team: u32,
    },
    /// Wipe the canvas.
    Clear,
}

/// Whether `guess` names `word`: surrounding whitespace is ignored and
/// letters compare case-insensitively.
#[must_use]
pub fn is_correct_guess(guess: &str, word: &str) -> bool {
    let guess = guess.trim();
    !guess.is_empty() && guess.to_lowercase() == word.trim().to_lowercase()
}

/// The Sketch game mode.
#[derive(Debug, Clone, Copy)]
pub struct Sketch;

impl GameMode for Sketch {
    const ID: &'static str = "sketch";
    type Config = SketchConfig;
    type State = SketchSchedule;

    fn validate(config: &Self::Config) -> Result<(), CodeError> {
        code::check_bounds("teams", config.teams, MIN_TEAMS, MAX_TEAMS)?;
        code::check_bounds("rounds", config.rounds, MIN_ROUNDS, MAX_ROUNDS)?;
        check_category(&config.category)
    }

    fn format_code(config: &Self::Config, seed: Seed) -> String {
        code::join(
            &[
                &config.teams.to_string(),
                &config.rounds.to_string(),
                &config.category,
            ],
            seed,
        )
    }

    fn parse_code(code: &str) -> Result<(Self::Config, Seed), CodeError> {
        let fields = CodeFields::parse(code, 2, true)?;
        let config = SketchConfig {
            teams: code::parse_bounded("teams", fields.field(0, "teams")?, MIN_TEAMS, MAX_TEAMS)?,
            rounds: code::parse_bounded("rounds", fields.field(1, "rounds")?, MIN_ROUNDS, MAX_ROUNDS)?,
            category: fields.category()?.to_owned(),
        };
        Self::validate(&config)?;
        Ok((config, fields.seed))
    }

    /// Draw order: sample `teams * rounds` words (a full shuffle), pick
    /// the starting team.
    fn setup(
        config: &Self::Config,
        content: &ContentPack,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self::State, DomainError> {
        let pool = content.words(&config.category)?;
        let words = sample(
            &format!("words/{}", config.category),
            &pool,
            (config.teams * config.rounds) as usize,
            rng,
        )?;

        #[allow(clippy::cast_possible_truncation)]
        let starting_team = rng.next_index(config.teams as usize) as u32;

        Ok(SketchSchedule {
            starting_team,
            turns: turns::schedule(words, config.teams, starting_team),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_test_support::{SequenceRng, test_content_pack};

    fn config(teams: u32, rounds: u32) -> SketchConfig {
        SketchConfig {
            teams,
            rounds,
            category: "two-word".to_owned(),
        }
    }

    #[test]
    fn test_code_round_trip() {
        let seed = Seed::from_index(16);
        let code = Sketch::format_code(&config(6, 1), seed);
        assert_eq!(code, "6-1-two-word-bet-bet-bet");
        assert_eq!(Sketch::parse_code(&code).unwrap(), (config(6, 1), seed));
    }

    #[test]
    fn test_allows_six_teams_but_not_seven() {
        assert!(Sketch::parse_code("6-1-animals-gg-ez").is_ok());
        assert!(matches!(
            Sketch::parse_code("7-1-animals-gg-ez"),
            Err(CodeError::OutOfRange { field: "teams", .. })
        ));
    }

    #[test]
    fn test_draw_order_is_words_then_starter() {
        // two-word has 10 entries -> 9 draws, then the starter.
        let mut values = vec![0.99; 9];
        values.push(0.5);
        let mut rng = SequenceRng::new(values);

        let schedule = Sketch::setup(&config(4, 1), &test_content_pack(), &mut rng).unwrap();

        assert!(rng.is_exhausted());
        assert_eq!(schedule.starting_team, 2);
        let words: Vec<&str> = schedule.turns.iter().map(|t| t.prompt.as_str()).collect();
        assert_eq!(words, vec!["salt", "pepper", "oil", "vinegar"]);
        let teams: Vec<u32> = schedule.turns.iter().map(|t| t.team).collect();
        assert_eq!(teams, vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_guess_matching() {
        assert!(is_correct_guess("  Pepper ", "pepper"));
        assert!(!is_correct_guess("peppers", "pepper"));
        assert!(!is_correct_guess("   ", ""));
    }

    #[test]
    fn test_message_wire_shape() {
        let stroke = SketchMessage::Stroke {
            points: vec![Point { x: 1.0, y: 2.5 }],
            color: "#ff0000".to_owned(),
            size: 4.0,
        };
        let json = serde_json::to_value(&stroke).unwrap();
        assert_eq!(json["type"], "stroke");
        assert_eq!(json["points"][0]["y"], 2.5);

        let guess: SketchMessage =
            serde_json::from_str(r#"{"type":"guess","text":"salt","team":1}"#).unwrap();
        assert_eq!(
            guess,
            SketchMessage::Guess {
                text: "salt".to_owned(),
                team: 1
            }
        );

        let clear: SketchMessage = serde_json::from_str(r#"{"type":"clear"}"#).unwrap();
        assert_eq!(clear, SketchMessage::Clear);
    }
}
