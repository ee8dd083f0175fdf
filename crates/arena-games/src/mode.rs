//! The trait every game implements.

use std::fmt::Debug;

use arena_content::ContentPack;
use arena_core::error::{CodeError, DomainError};
use arena_core::rng::DeterministicRng;
use arena_core::slug::Seed;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A game's code schema and seeded setup.
pub trait GameMode {
    /// URL-safe identifier, e.g. `codenames`.
    const ID: &'static str;

    /// Validated configuration carried in the game code.
    type Config: Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Game state produced by [`GameMode::setup`].
    type State: Debug + Serialize + Send + 'static;

    /// Checks the config against the game's bounds.
    ///
    /// # Errors
    ///
    /// Returns a `CodeError` naming the offending field.
    fn validate(config: &Self::Config) -> Result<(), CodeError>;

    /// Renders a code for an already validated config.
    fn format_code(config: &Self::Config, seed: Seed) -> String;

    /// Parses and validates a code.
    ///
    /// # Errors
    ///
    /// Returns a `CodeError` for any malformed, out-of-bounds or
    /// inconsistent field, or an unknown slug.
    fn parse_code(code: &str) -> Result<(Self::Config, Seed), CodeError>;

    /// Builds the game state. Deterministic in `(config, content, rng)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCategory` or
    /// `DomainError::InsufficientContent` when the content pack cannot
    /// satisfy the config.
    fn setup(
        config: &Self::Config,
        content: &ContentPack,
        rng: &mut dyn DeterministicRng,
    ) -> Result<Self::State, DomainError>;
}

/// Rejects categories that cannot be carried in a code.
pub(crate) fn check_category(category: &str) -> Result<(), CodeError> {
    if category.is_empty() {
        return Err(CodeError::EmptyCategory);
    }
    Ok(())
}
