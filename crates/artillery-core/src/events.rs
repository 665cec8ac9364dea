//! Events emitted by the engine. The display is rendered from these.

use serde::{Deserialize, Serialize};

use crate::enums::{EliminationCause, ShotOutcome};
use crate::types::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new pass over the active players begins.
    RoundStarted { round: u32 },
    /// Shooter and target are fixed for the next shot.
    TargetChosen { shooter: PlayerId, target: PlayerId },
    /// Wind currently acting on a player's shots.
    WindReport { player: PlayerId, wind: f64 },
    /// A shot came down (or was lost) with this classification.
    ShotResolved {
        shooter: PlayerId,
        target: PlayerId,
        angle: f64,
        outcome: ShotOutcome,
    },
    /// A player is out for the rest of the game.
    PlayerEliminated {
        player: PlayerId,
        cause: EliminationCause,
    },
    /// Wind drifted at the end of a round.
    WindChanged { player: PlayerId, from: f64, to: f64 },
    /// At most one player remains.
    GameOver { winner: Option<PlayerId> },
}
