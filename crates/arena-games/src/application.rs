//! Application functions: mint a code, or rebuild a game from one.

use arena_content::ContentPack;
use arena_core::error::DomainError;
use arena_core::slug::Seed;
use serde::Serialize;
use tracing::debug;

use crate::mode::GameMode;

/// A game rebuilt from its code.
#[derive(Debug, Serialize)]
pub struct StartedGame<C, S> {
    /// The code the game was built from.
    pub code: String,
    /// The decoded seed.
    pub seed: Seed,
    /// The parsed config.
    pub config: C,
    /// The generated state.
    pub state: S,
}

/// Validates `config` and renders its game code for `seed`.
///
/// The code is parsed back and the setup is run once against `content`,
/// so a minted code is always one that [`start_game`] accepts.
///
/// # Errors
///
/// Returns `DomainError::InvalidGameCode` for out-of-bounds configs,
/// `DomainError::Validation` if the config does not survive encoding, and
/// the setup's content errors.
pub fn create_game_code<G: GameMode>(
    config: &G::Config,
    seed: Seed,
    content: &ContentPack,
) -> Result<String, DomainError> {
    G::validate(config)?;
    let code = G::format_code(config, seed);

    let (parsed, parsed_seed) = G::parse_code(&code)?;
    if parsed != *config || parsed_seed != seed {
        return Err(DomainError::Validation(format!(
            "{} config does not survive encoding as {code:?}",
            G::ID
        )));
    }

    G::setup(config, content, &mut seed.rng())?;
    Ok(code)
}

/// Parses `code`, seeds a fresh generator from its slug and runs the setup.
///
/// # Errors
///
/// Returns `DomainError::InvalidGameCode` for malformed codes and the
/// setup's content errors.
pub fn start_game<G: GameMode>(
    code: &str,
    content: &ContentPack,
) -> Result<StartedGame<G::Config, G::State>, DomainError> {
    let (config, seed) = G::parse_code(code)?;
    debug!(game = G::ID, seed = seed.value(), "starting game");

    let mut rng = seed.rng();
    let state = G::setup(&config, content, &mut rng)?;

    Ok(StartedGame {
        code: code.to_owned(),
        seed,
        config,
        state,
    })
}
