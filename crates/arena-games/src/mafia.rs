//! Mafia: secret role assignment.
//!
//! Code layout: `{players}-{mafia}-{doctor}-{detective}-{slug}`, where the
//! last two fields are `0`/`1` flags. No category: Mafia needs no content.

use arena_content::ContentPack;
use arena_core::code::{self, CodeFields};
use arena_core::error::{CodeError, DomainError};
use arena_core::rng::DeterministicRng;
use arena_core::shuffle::shuffle;
use arena_core::slug::Seed;
use serde::{Deserialize, Serialize};

use crate::mode::GameMode;

const MIN_PLAYERS: u32 = 5;
const MAX_PLAYERS: u32 = 20;
const MIN_MAFIA: u32 = 1;

/// A secret role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MafiaRole {
    /// Eliminates a player each night.
    Mafia,
    /// Protects one player each night.
    Doctor,
    /// Investigates one player each night.
    Detective,
    /// No night action.
    Villager,
}

/// Mafia configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MafiaConfig {
    /// Seats at the table (5–20).
    pub players: u32,
    /// Mafia members, always a strict minority.
    pub mafia: u32,
    /// Whether a doctor is dealt.
    pub doctor: bool,
    /// Whether a detective is dealt.
    pub detective: bool,
}

/// Roles by seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MafiaDeal {
    /// `roles[seat]` is that seat's role.
    pub roles: Vec<MafiaRole>,
}

impl MafiaDeal {
    /// Seats holding `role`, ascending.
    #[must_use]
    pub fn seats_with(&self, role: MafiaRole) -> Vec<u32> {
        self.roles
            .iter()
            .zip(0u32..)
            .filter(|(held, _)| **held == role)
            .map(|(_, seat)| seat)
            .collect()
    }
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// The Mafia game mode.
#[derive(Debug, Clone, Copy)]
pub struct Mafia;

impl GameMode for Mafia {
    const ID: &'static str = "mafia";
    type Config = MafiaConfig;
    type State = MafiaDeal;

    fn validate(config: &Self::Config) -> Result<(), CodeError> {
        code::check_bounds("players", config.players, MIN_PLAYERS, MAX_PLAYERS)?;
        code::check_bounds("mafia", config.mafia, MIN_MAFIA, (config.players - 1) / 2)?;
        Ok(())
    }

    fn format_code(config: &Self::Config, seed: Seed) -> String {
        code::join(
            &[
                &config.players.to_string(),
                &config.mafia.to_string(),
                flag(config.doctor),
                flag(config.detective),
            ],
            seed,
        )
    }

    fn parse_code(code: &str) -> Result<(Self::Config, Seed), CodeError> {
        let fields = CodeFields::parse(code, 4, false)?;
        let players = code::parse_bounded("players", fields.field(0, "players")?, MIN_PLAYERS, MAX_PLAYERS)?;
        let config = MafiaConfig {
            players,
            mafia: code::parse_bounded("mafia", fields.field(1, "mafia")?, MIN_MAFIA, (players - 1) / 2)?,
            doctor: code::parse_flag("doctor", fields.field(2, "doctor")?)?,
            detective: code::parse_flag("detective", fields.field(3, "detective")?)?,
        };
        Ok((config, fields.seed))
    }

    /// Draw order: one shuffle of the role list
    /// `[mafia.., doctor?, detective?, villager..]`.
    fn setup(
        config: &Self::Config,
        _content: &ContentPack,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self::State, DomainError> {
        let mut roles = Vec::with_capacity(config.players as usize);
        roles.extend(std::iter::repeat_n(MafiaRole::Mafia, config.mafia as usize));
        if config.doctor {
            roles.push(MafiaRole::Doctor);
        }
        if config.detective {
            roles.push(MafiaRole::Detective);
        }
        let villagers = (config.players as usize).saturating_sub(roles.len());
        roles.extend(std::iter::repeat_n(MafiaRole::Villager, villagers));

        shuffle(&mut roles, rng);
        Ok(MafiaDeal { roles })
    }
}
