//! Arena Content: the word banks and prompt tables games select from.
//!
//! Game setups are only reproducible when every client selects from the
//! same tables, so a pack carries a fingerprint clients can compare.

pub mod error;
pub mod pack;

pub use error::ContentError;
pub use pack::{CharadesDeck, ContentPack, QuizImage, RANDOM_CATEGORY, TruthOrDareDeck};
