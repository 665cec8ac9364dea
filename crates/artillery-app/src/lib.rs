//! Terminal front end for the artillery duel.
//!
//! Parses flags, assembles the game config and drives the engine from
//! stdin/stdout or an answers file.

pub mod cli;
pub mod console;
pub mod session;

pub use artillery_core as core;
