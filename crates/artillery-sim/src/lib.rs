//! Game engine for the artillery duel.
//!
//! Setup collection, shot physics, the round controller and wind drift.
//! All I/O goes through the `Console` trait and all randomness through
//! `RandomSource`, so a whole game can be scripted and replayed.

pub mod console;
pub mod engine;
pub mod physics;
pub mod registry;
pub mod report;
pub mod rng;
pub mod round;
pub mod setup;
pub mod wind;

pub use artillery_core as core;
pub use engine::Game;
