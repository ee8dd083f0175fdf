//! Domain error types.

use thiserror::Error;

/// Why a game code failed to parse.
///
/// Every variant is a recoverable, user-facing condition: a shared link can
/// always be stale, mistyped or tampered with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// The code was the empty string.
    #[error("game code is empty")]
    Empty,

    /// Fewer hyphen-separated fields than the game's layout needs.
    #[error("game code has {found} fields, expected {expected}")]
    MissingFields {
        /// Fields the layout requires.
        expected: usize,
        /// Fields actually present.
        found: usize,
    },

    /// A positional field was present but empty (e.g. `2--skill-issue`).
    #[error("field `{0}` is empty")]
    EmptyField(&'static str),

    /// The category span between the fixed fields and the slug was empty.
    #[error("category is empty")]
    EmptyCategory,

    /// A numeric field did not parse as an unsigned decimal.
    #[error("field `{field}` is not a number: {value:?}")]
    InvalidNumber {
        /// Field name.
        field: &'static str,
        /// Raw field text.
        value: String,
    },

    /// A numeric field parsed but is outside the game's bounds.
    #[error("field `{field}` must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Field name.
        field: &'static str,
        /// Parsed value.
        value: u32,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },

    /// An enumerated field held a value outside its fixed set.
    #[error("field `{field}` has unknown value {value:?}")]
    UnknownVariant {
        /// Field name.
        field: &'static str,
        /// Raw field text.
        value: String,
    },

    /// The terminal slug is not in the dictionary.
    #[error("unknown slug {0:?}")]
    UnknownSlug(String),

    /// Fields are individually valid but inconsistent with each other.
    #[error("{0}")]
    Constraint(String),
}

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The game code could not be parsed or validated.
    #[error("invalid game code: {0}")]
    InvalidGameCode(#[from] CodeError),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested category does not exist in the content pack.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A content pool is too small for the requested selection.
    #[error("not enough content in {pool}: needed {needed}, available {available}")]
    InsufficientContent {
        /// Which pool was exhausted.
        pool: String,
        /// Entries the setup needed.
        needed: usize,
        /// Entries the pool holds.
        available: usize,
    },
}
