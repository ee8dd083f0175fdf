//! The Arena: per-game code schemas and seeded setups.
//!
//! Each game is a [`GameMode`]: a code layout, its validation bounds, and a
//! setup function that turns a config plus a seeded RNG into plain game
//! state. The order of RNG draws inside each setup is part of the game's
//! contract and is documented on its `setup`.

pub mod application;
pub mod charades;
pub mod codenames;
pub mod imposter;
pub mod mafia;
pub mod mode;
pub mod never_have_i_ever;
pub mod picture_quiz;
pub mod sketch;
pub mod truth_or_dare;
pub mod turns;

pub use application::{StartedGame, create_game_code, start_game};
pub use charades::Charades;
pub use codenames::Codenames;
pub use imposter::Imposter;
pub use mafia::Mafia;
pub use mode::GameMode;
pub use never_have_i_ever::NeverHaveIEver;
pub use picture_quiz::PictureQuiz;
pub use sketch::Sketch;
pub use truth_or_dare::TruthOrDare;

/// Identifiers of every game, in menu order.
pub const GAME_IDS: [&str; 8] = [
    Codenames::ID,
    Imposter::ID,
    TruthOrDare::ID,
    NeverHaveIEver::ID,
    Charades::ID,
    Mafia::ID,
    Sketch::ID,
    PictureQuiz::ID,
];
