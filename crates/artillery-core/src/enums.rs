//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

use crate::types::PlayerId;

/// Player lifecycle. `Active -> Defunct` happens at most once per game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    #[default]
    Active,
    Defunct,
}

/// Which ballistic rules resolve a shot. Selected once at setup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicsModel {
    /// Three-player duel rules: angle-gated, range formula plus symmetric
    /// noise, hit within a fraction of the target distance.
    #[default]
    Duel,
    /// Wind duel rules: time of flight, velocity variance, per-player wind,
    /// hit within a fixed threshold.
    Wind,
}

impl PhysicsModel {
    pub fn uses_wind(self) -> bool {
        matches!(self, Self::Wind)
    }
}

/// Unit system. Gravity, thresholds and wording follow it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

impl UnitSystem {
    /// Distance word used in shot reports ("FEET").
    pub fn distance_word(self) -> &'static str {
        match self {
            Self::Imperial => "FEET",
            Self::Metric => "METERS",
        }
    }

    /// Abbreviated distance unit used in prompts ("FT.").
    pub fn distance_abbrev(self) -> &'static str {
        match self {
            Self::Imperial => "FT.",
            Self::Metric => "M.",
        }
    }

    pub fn velocity_abbrev(self) -> &'static str {
        match self {
            Self::Imperial => "FT./SEC.",
            Self::Metric => "M/SEC.",
        }
    }
}

/// Classified result of a single shot.
///
/// Game events, not errors: some of these eliminate the shooter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ShotOutcome {
    /// Landed within tolerance of the target. Target eliminated.
    Hit { impact: f64 },
    /// Landed inside the shooter's own danger zone. Shooter eliminated.
    TooClose { impact: f64 },
    /// Angle outside the legal domain. Shooter eliminated, nothing computed.
    FiredIntoGround,
    /// Angle pointed away from the target. Shot lost, nobody eliminated.
    FiredWrongWay,
    /// Landed short of the target.
    Undershot { impact: f64, short_by: f64 },
    /// Landed beyond the target.
    Overshot { impact: f64, long_by: f64 },
}

impl ShotOutcome {
    /// Distance or position where the round came down, if computed.
    pub fn impact(&self) -> Option<f64> {
        match *self {
            Self::Hit { impact }
            | Self::TooClose { impact }
            | Self::Undershot { impact, .. }
            | Self::Overshot { impact, .. } => Some(impact),
            Self::FiredIntoGround | Self::FiredWrongWay => None,
        }
    }

    pub fn eliminates_shooter(&self) -> bool {
        matches!(self, Self::TooClose { .. } | Self::FiredIntoGround)
    }

    pub fn eliminates_target(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }
}

/// Why a player left the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EliminationCause {
    /// Hit by another player's shot.
    Hit { by: PlayerId },
    /// Fired into the ground.
    FiredIntoGround,
    /// Own shot landed too close.
    TooClose,
}

/// Top-level game state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    InProgress,
    /// At most one player remains. `winner` is `None` only if nobody does.
    Finished { winner: Option<PlayerId> },
    /// Players declined to continue.
    Abandoned,
}
