//! Never Have I Ever: one prompt per round.
//!
//! Code layout: `{rounds}-{category}-{slug}`.

use arena_content::ContentPack;
use arena_core::code::{self, CodeFields};
use arena_core::error::{CodeError, DomainError};
use arena_core::rng::DeterministicRng;
use arena_core::shuffle::sample;
use arena_core::slug::Seed;
use serde::{Deserialize, Serialize};

use crate::mode::{GameMode, check_category};

const MIN_ROUNDS: u32 = 1;
const MAX_ROUNDS: u32 = 100;

/// Never Have I Ever configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeverHaveIEverConfig {
    /// Number of prompts to play (1–100).
    pub rounds: u32,
    /// Prompt category, or `random`.
    pub category: String,
}

/// The prompts for a session, in play order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeverHaveIEverSession {
    /// One prompt per round.
    pub prompts: Vec<String>,
}

/// The Never Have I Ever game mode.
#[derive(Debug, Clone, Copy)]
pub struct NeverHaveIEver;

impl GameMode for NeverHaveIEver {
    const ID: &'static str = "never-have-i-ever";
    type Config = NeverHaveIEverConfig;
    type State = NeverHaveIEverSession;

    fn validate(config: &Self::Config) -> Result<(), CodeError> {
        code::check_bounds("rounds", config.rounds, MIN_ROUNDS, MAX_ROUNDS)?;
        check_category(&config.category)
    }

    fn format_code(config: &Self::Config, seed: Seed) -> String {
        code::join(&[&config.rounds.to_string(), &config.category], seed)
    }

    fn parse_code(code: &str) -> Result<(Self::Config, Seed), CodeError> {
        let fields = CodeFields::parse(code, 1, true)?;
        let config = NeverHaveIEverConfig {
            rounds: code::parse_bounded("rounds", fields.field(0, "rounds")?, MIN_ROUNDS, MAX_ROUNDS)?,
            category: fields.category()?.to_owned(),
        };
        Self::validate(&config)?;
        Ok((config, fields.seed))
    }

    /// Draw order: sample `rounds` prompts (a full shuffle of the pool).
    fn setup(
        config: &Self::Config,
        content: &ContentPack,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self::State, DomainError> {
        let pool = content.never_have_i_ever(&config.category)?;
        let prompts = sample(
            &format!("never_have_i_ever/{}", config.category),
            &pool,
            config.rounds as usize,
            rng,
        )?;
        Ok(NeverHaveIEverSession { prompts })
    }
}
