//! Player registry, the only mutable shared state of a game.
//!
//! Status and wind are written only from inside this crate (round controller
//! and wind drift). Everything outside gets read-only views.

use artillery_core::enums::PlayerStatus;
use artillery_core::types::{PlayerId, RangeTable};

use crate::setup::{GameSetup, Layout};

/// One participant.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub status: PlayerStatus,
    pub muzzle_velocity: f64,
    /// Wind acting on this player's shots.
    pub wind: f64,
}

impl Player {
    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }
}

#[derive(Debug, Clone)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    ranges: RangeTable,
    positions: Option<Vec<f64>>,
}

impl PlayerRegistry {
    /// Build from a validated setup. `winds` is indexed like the players.
    pub fn new(setup: &GameSetup, winds: &[f64]) -> Self {
        let players = PlayerId::all(setup.player_count())
            .map(|id| Player {
                id,
                status: PlayerStatus::Active,
                muzzle_velocity: setup.velocities[id.index()],
                wind: winds.get(id.index()).copied().unwrap_or(0.0),
            })
            .collect();
        let positions = match &setup.layout {
            Layout::Positions(p) => Some(p.clone()),
            Layout::Distances(_) => None,
        };
        Self {
            players,
            ranges: setup.range_table(),
            positions,
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        id.index() < self.players.len()
    }

    pub fn is_active(&self, id: PlayerId) -> bool {
        self.player(id).is_some_and(Player::is_active)
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Active players in ascending order.
    pub fn active_remaining(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.id)
            .collect()
    }

    pub fn distance(&self, a: PlayerId, b: PlayerId) -> f64 {
        self.ranges.get(a, b)
    }

    pub fn ranges(&self) -> &RangeTable {
        &self.ranges
    }

    /// Shooter and target positions along the range.
    ///
    /// Without explicit positions the shooter stands at zero and the target
    /// at the pairwise distance.
    pub fn firing_line(&self, shooter: PlayerId, target: PlayerId) -> (f64, f64) {
        match &self.positions {
            Some(p) => (p[shooter.index()], p[target.index()]),
            None => (0.0, self.distance(shooter, target)),
        }
    }

    /// Eliminate a player. Must be called at most once per player.
    pub(crate) fn set_defunct(&mut self, id: PlayerId) {
        let player = &mut self.players[id.index()];
        debug_assert!(player.is_active(), "player {id} eliminated twice");
        player.status = PlayerStatus::Defunct;
    }

    pub(crate) fn set_wind(&mut self, id: PlayerId, wind: f64) {
        self.players[id.index()].wind = wind;
    }
}
