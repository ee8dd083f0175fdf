//! Route modules.

pub mod content;
pub mod games;
pub mod health;
pub mod slugs;
