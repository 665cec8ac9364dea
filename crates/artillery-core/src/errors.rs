//! Error types.
//!
//! Fired-into-ground, wrong-way and too-close shots are `ShotOutcome`s,
//! never errors.

use thiserror::Error;

use crate::types::PlayerId;

/// Why a raw answer could not be read as the requested kind of value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no answer given")]
    Empty,
    #[error("not a number")]
    NotANumber,
}

/// Parse a finite decimal number. `nan` and `inf` are rejected.
pub fn parse_number(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber),
    }
}

/// Parse a whole number such as a player designation.
pub fn parse_integer(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    trimmed.parse::<i64>().map_err(|_| InputError::NotANumber)
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("gravity must be a positive number (got {0})")]
    Gravity(f64),
    #[error("noise divisor must be a positive number (got {0})")]
    NoiseDivisor(f64),
    #[error("{field} must be zero or positive (got {value})")]
    Negative { field: &'static str, value: f64 },
}

/// A setup that breaks one of the game's standing invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    #[error("a game needs two or three players (got {0})")]
    PlayerCount(usize),
    #[error("layout covers {layout} players but {players} were configured")]
    LayoutMismatch { layout: usize, players: usize },
    #[error("muzzle velocity of {player} must be positive (got {velocity})")]
    Velocity { player: PlayerId, velocity: f64 },
    #[error("distance {a} to {b} must be positive (got {distance})")]
    Distance { a: PlayerId, b: PlayerId, distance: f64 },
    #[error("players {a} and {b} share a position")]
    SharedPosition { a: PlayerId, b: PlayerId },
    #[error("illegal triangle: side {a} to {b} is not shorter than the other two combined")]
    IllegalTriangle { a: PlayerId, b: PlayerId },
    #[error("{shooter} cannot reach {target}")]
    Unreachable { shooter: PlayerId, target: PlayerId },
}

/// A direct shot request that the current game state cannot accept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShotError {
    #[error("the game is already over")]
    GameOver,
    #[error("no player {0} in this game")]
    UnknownPlayer(PlayerId),
    #[error("{0} cannot shoot self")]
    SelfTarget(PlayerId),
    #[error("{0} is defunct")]
    Defunct(PlayerId),
    #[error("muzzle velocity must be positive (got {0})")]
    Velocity(f64),
    #[error("firing angle {0} is outside the accepted range")]
    Angle(f64),
}
