//! Game setup: player count, layout, muzzle velocities.
//!
//! `GameSetup` can be built directly (scripted runs, tests) or collected
//! interactively with `collect`. Either way it must pass `validate` before a
//! game starts.

use artillery_core::config::GameConfig;
use artillery_core::constants::{
    MAX_PLAYERS, MIN_PLAYERS, STANDARD_FIRST_POSITION, STANDARD_POSITION_SPACING,
};
use artillery_core::enums::PhysicsModel;
use artillery_core::errors::{parse_integer, parse_number, InputError, SetupError};
use artillery_core::types::{PlayerId, RangeTable};

use crate::console::{request, Console, SessionError};
use crate::physics::max_range;

/// Where the players stand relative to each other.
#[derive(Debug, Clone, PartialEq)]
pub enum Layout {
    /// Pairwise distances only.
    Distances(RangeTable),
    /// Absolute positions along a single line.
    Positions(Vec<f64>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSetup {
    /// Muzzle velocity per player, in player order.
    pub velocities: Vec<f64>,
    pub layout: Layout,
}

impl GameSetup {
    pub fn with_distances(velocities: Vec<f64>, ranges: RangeTable) -> Self {
        Self {
            velocities,
            layout: Layout::Distances(ranges),
        }
    }

    pub fn with_positions(velocities: Vec<f64>, positions: Vec<f64>) -> Self {
        Self {
            velocities,
            layout: Layout::Positions(positions),
        }
    }

    /// 500, 1500, 2500, ... distance units.
    pub fn standard_positions(count: usize) -> Vec<f64> {
        (0..count)
            .map(|i| STANDARD_FIRST_POSITION + i as f64 * STANDARD_POSITION_SPACING)
            .collect()
    }

    pub fn player_count(&self) -> usize {
        self.velocities.len()
    }

    pub fn range_table(&self) -> RangeTable {
        match &self.layout {
            Layout::Distances(table) => table.clone(),
            Layout::Positions(positions) => RangeTable::from_positions(positions),
        }
    }

    pub fn validate(&self, config: &GameConfig) -> Result<(), SetupError> {
        let count = self.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::PlayerCount(count));
        }
        let layout_size = match &self.layout {
            Layout::Distances(table) => table.size(),
            Layout::Positions(positions) => positions.len(),
        };
        if layout_size != count {
            return Err(SetupError::LayoutMismatch {
                layout: layout_size,
                players: count,
            });
        }

        for player in PlayerId::all(count) {
            let velocity = self.velocities[player.index()];
            if !(velocity.is_finite() && velocity > 0.0) {
                return Err(SetupError::Velocity { player, velocity });
            }
        }

        let table = self.range_table();
        if let Layout::Positions(positions) = &self.layout {
            for (a, b) in table.pairs() {
                if positions[a.index()] == positions[b.index()] {
                    return Err(SetupError::SharedPosition { a, b });
                }
            }
        }
        for (a, b) in table.pairs() {
            let distance = table.get(a, b);
            if !(distance.is_finite() && distance > 0.0) {
                return Err(SetupError::Distance { a, b, distance });
            }
        }
        // Collinear positions are always degenerate triangles.
        if matches!(self.layout, Layout::Distances(_)) {
            check_triangle(&table)?;
        }

        match find_unreachable(&self.velocities, &table, config.physics.gravity) {
            Some((shooter, target)) => Err(SetupError::Unreachable { shooter, target }),
            None => Ok(()),
        }
    }
}

/// Every side of a three-player triangle must be shorter than the other two
/// combined. Two players always pass.
pub fn check_triangle(table: &RangeTable) -> Result<(), SetupError> {
    if table.size() != 3 {
        return Ok(());
    }
    let ids: Vec<PlayerId> = PlayerId::all(3).collect();
    for (a, b) in table.pairs() {
        let Some(&c) = ids.iter().find(|&&p| p != a && p != b) else {
            continue;
        };
        if table.get(a, b) >= table.get(a, c) + table.get(b, c) {
            return Err(SetupError::IllegalTriangle { a, b });
        }
    }
    Ok(())
}

/// First ordered pair whose shooter cannot reach the target, scanning
/// shooters then targets in ascending order.
pub fn find_unreachable(
    velocities: &[f64],
    table: &RangeTable,
    gravity: f64,
) -> Option<(PlayerId, PlayerId)> {
    let count = velocities.len();
    for shooter in PlayerId::all(count) {
        let reach = max_range(velocities[shooter.index()], gravity);
        for target in PlayerId::all(count) {
            if shooter != target && reach <= table.get(shooter, target) {
                return Some((shooter, target));
            }
        }
    }
    None
}

// --- Interactive collection ---

/// Prompt order for distances: 1→2, 2→3, 3→1.
fn distance_prompt_pairs(count: usize) -> Vec<(PlayerId, PlayerId)> {
    let ids: Vec<PlayerId> = PlayerId::all(count).collect();
    if count == 2 {
        return vec![(ids[0], ids[1])];
    }
    (0..count).map(|i| (ids[i], ids[(i + 1) % count])).collect()
}

/// Collect a complete, valid setup from the console.
pub fn collect<C: Console + ?Sized>(
    console: &mut C,
    config: &GameConfig,
) -> Result<GameSetup, SessionError> {
    let count = request(console, "NO. OF PLAYERS", |answer| match parse_integer(answer) {
        Ok(n) if (MIN_PLAYERS as i64..=MAX_PLAYERS as i64).contains(&n) => Ok(n as usize),
        _ => Err("ERROR--TWO OR THREE PLAYERS!".to_string()),
    })?;

    let layout = match config.model {
        PhysicsModel::Duel => Layout::Distances(collect_distances(console, config, count)?),
        PhysicsModel::Wind => Layout::Positions(collect_positions(console, config, count)?),
    };
    let table = match &layout {
        Layout::Distances(table) => table.clone(),
        Layout::Positions(positions) => RangeTable::from_positions(positions),
    };

    console.say("");
    let mut velocities = Vec::with_capacity(count);
    for player in PlayerId::all(count) {
        let prompt = format!(
            "MUZZLE VELOCITY ({}) OF {player}",
            config.units.velocity_abbrev()
        );
        velocities.push(ask_velocity(console, &prompt)?);
    }

    while let Some((shooter, target)) =
        find_unreachable(&velocities, &table, config.physics.gravity)
    {
        tracing::info!(%shooter, %target, "opponent out of range, asking for new velocity");
        console.say(&format!("ERROR--{shooter} CANNOT REACH {target}"));
        let prompt = format!("WHAT IS THE MUZZLE VELOCITY OF {shooter}");
        velocities[shooter.index()] = ask_velocity(console, &prompt)?;
    }

    let setup = GameSetup { velocities, layout };
    debug_assert_eq!(setup.validate(config), Ok(()));
    Ok(setup)
}

fn ask_velocity<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<f64, SessionError> {
    request(console, prompt, |answer| match parse_number(answer) {
        Ok(v) if v > 0.0 => Ok(v),
        _ => Err("ERROR--MUZZLE VELOCITY MUST BE POSITIVE.".to_string()),
    })
}

fn collect_distances<C: Console + ?Sized>(
    console: &mut C,
    config: &GameConfig,
    count: usize,
) -> Result<RangeTable, SessionError> {
    loop {
        let mut table = RangeTable::new(count);
        for (a, b) in distance_prompt_pairs(count) {
            let prompt = format!("DISTANCE ({}) {a} TO {b}", config.units.distance_abbrev());
            let distance = request(console, &prompt, |answer| match parse_number(answer) {
                Ok(d) if d > 0.0 => Ok(d),
                _ => Err("ERROR--DISTANCE MUST BE POSITIVE.".to_string()),
            })?;
            table.set(a, b, distance);
        }
        match check_triangle(&table) {
            Ok(()) => return Ok(table),
            Err(err) => {
                tracing::info!(%err, "re-collecting ranges");
                console.say("ERROR--ILLEGAL TRIANGLE. RE-ENTER RANGES.");
            }
        }
    }
}

fn collect_positions<C: Console + ?Sized>(
    console: &mut C,
    config: &GameConfig,
    count: usize,
) -> Result<Vec<f64>, SessionError> {
    let standard = GameSetup::standard_positions(count);
    let mut positions: Vec<f64> = Vec::with_capacity(count);
    for player in PlayerId::all(count) {
        let default = standard[player.index()];
        let prompt = format!(
            "POSITION OF {player} ({}, BLANK FOR {default})",
            config.units.distance_abbrev()
        );
        let position = request(console, &prompt, |answer| {
            let position = match parse_number(answer) {
                Ok(p) => p,
                Err(InputError::Empty) => default,
                Err(InputError::NotANumber) => {
                    return Err("ERROR--ENTER A POSITION ALONG THE RANGE.".to_string())
                }
            };
            if positions.contains(&position) {
                return Err("ERROR--PLAYERS CANNOT SHARE A POSITION.".to_string());
            }
            Ok(position)
        })?;
        positions.push(position);
    }
    Ok(positions)
}
