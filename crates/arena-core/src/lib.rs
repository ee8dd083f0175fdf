//! Arena Core: seeded game codes and deterministic randomness.
//!
//! A game instance is fully described by its game code: a handful of
//! configuration fields plus a slug that encodes a small integer seed.
//! Decoding the slug and feeding the seed into [`rng::Mulberry32`] rebuilds
//! the exact same sequence of draws on every client. This crate holds no
//! game rules and no content.

pub mod code;
pub mod error;
pub mod rng;
pub mod shuffle;
pub mod slug;
