//! Fundamental identity and geometry types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_PLAYERS;

/// Opaque player identity. Zero-based internally, shown 1-based to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Build from a zero-based index. Returns `None` past the player limit.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < MAX_PLAYERS).then_some(Self(index as u8))
    }

    /// Build from the 1-based number a player types at a prompt.
    pub fn from_number(number: i64) -> Option<Self> {
        if number < 1 {
            return None;
        }
        Self::from_index((number - 1) as usize)
    }

    /// Zero-based index into per-player storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based number used in all player-facing text.
    pub fn number(self) -> u32 {
        self.0 as u32 + 1
    }

    /// All ids for a game of `count` players, in firing order.
    pub fn all(count: usize) -> impl Iterator<Item = PlayerId> {
        (0..count.min(MAX_PLAYERS)).map(|i| PlayerId(i as u8))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Symmetric table of pairwise distances between players.
///
/// `get(a, b) == get(b, a)` always holds because `set` writes both cells.
/// The diagonal is never read by the engine and stays at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeTable {
    size: usize,
    cells: Vec<f64>,
}

impl RangeTable {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0.0; size * size],
        }
    }

    /// Derive the table from positions along the range.
    pub fn from_positions(positions: &[f64]) -> Self {
        let mut table = Self::new(positions.len());
        for a in PlayerId::all(positions.len()) {
            for b in PlayerId::all(positions.len()) {
                if a < b {
                    table.set(a, b, (positions[b.index()] - positions[a.index()]).abs());
                }
            }
        }
        table
    }

    /// Number of players covered by the table.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Set the distance between `a` and `b` in both directions.
    pub fn set(&mut self, a: PlayerId, b: PlayerId, distance: f64) {
        let (i, j) = (a.index(), b.index());
        self.cells[i * self.size + j] = distance;
        self.cells[j * self.size + i] = distance;
    }

    pub fn get(&self, a: PlayerId, b: PlayerId) -> f64 {
        self.cells[a.index() * self.size + b.index()]
    }

    /// Every unordered pair `(a, b)` with `a < b`.
    pub fn pairs(&self) -> Vec<(PlayerId, PlayerId)> {
        let mut pairs = Vec::new();
        for a in PlayerId::all(self.size) {
            for b in PlayerId::all(self.size) {
                if a < b {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }
}
