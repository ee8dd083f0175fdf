//! Content loading errors.

use thiserror::Error;

/// Errors raised while loading or validating a content pack.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The pack file could not be read.
    #[error("failed to read content pack: {0}")]
    Io(#[from] std::io::Error),

    /// The pack is not valid YAML for the expected shape.
    #[error("failed to parse content pack: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A category has no entries.
    #[error("category `{section}/{category}` is empty")]
    EmptyCategory {
        /// Pack section, e.g. `words`.
        section: &'static str,
        /// Category key.
        category: String,
    },

    /// An entry appears twice in one category.
    #[error("duplicate entry {entry:?} in `{section}/{category}`")]
    DuplicateEntry {
        /// Pack section.
        section: &'static str,
        /// Category key.
        category: String,
        /// The repeated entry.
        entry: String,
    },

    /// A category uses the reserved name `random`, or is not usable in a
    /// game code.
    #[error("category name {category:?} in `{section}` is not allowed")]
    ReservedCategory {
        /// Pack section.
        section: &'static str,
        /// Category key.
        category: String,
    },
}
