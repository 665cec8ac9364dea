//! Interactive session and the one-shot test mode.

use anyhow::{bail, ensure, Context};

use artillery_core::config::GameConfig;
use artillery_core::constants::{MAX_PLAYERS, MIN_PLAYERS, STANDARD_FIRST_POSITION};
use artillery_core::enums::PhysicsModel;
use artillery_core::events::GameEvent;
use artillery_core::types::{PlayerId, RangeTable};
use artillery_sim::console::{confirm, request, Console, SessionError};
use artillery_sim::report;
use artillery_sim::setup::{self, GameSetup};
use artillery_sim::Game;

use crate::cli::TestShot;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub games: u32,
    /// Input ran out before the players chose to stop.
    pub input_closed: bool,
}

/// Banner, optional instructions, then games until the players stop.
///
/// Running out of input ends the session quietly.
pub fn play<C: Console + ?Sized>(
    console: &mut C,
    config: &GameConfig,
    seed: u64,
) -> anyhow::Result<SessionSummary> {
    let mut games = 0;
    match play_games(console, config, seed, &mut games) {
        Ok(()) => Ok(SessionSummary {
            games,
            input_closed: false,
        }),
        Err(err) if err.downcast_ref::<SessionError>() == Some(&SessionError::InputClosed) => {
            tracing::info!(games, "input closed, ending session");
            Ok(SessionSummary {
                games,
                input_closed: true,
            })
        }
        Err(err) => Err(err),
    }
}

fn play_games<C: Console + ?Sized>(
    console: &mut C,
    config: &GameConfig,
    seed: u64,
    games: &mut u32,
) -> anyhow::Result<()> {
    console.display(&report::banner());
    let wants_help = request(console, "DO YOU WISH SOME ASSISTANCE", |answer| {
        Ok(answer.trim().eq_ignore_ascii_case("YES"))
    })?;
    if wants_help {
        console.display(&report::instructions(config));
    }

    loop {
        console.say("");
        let setup = setup::collect(console, config)?;
        // A fresh stream per game keeps replays independent of earlier games.
        let mut game = Game::seeded(*config, &setup, seed.wrapping_add(u64::from(*games)))?;
        console.say("");
        let phase = game.run(console)?;
        *games += 1;
        tracing::info!(game = *games, ?phase, rounds = game.round(), "game finished");

        console.say("");
        if !confirm(console, "DO YOU WANT TO PLAY AGAIN")? {
            return Ok(());
        }
    }
}

/// Resolve one shot from player 1 at player 2 with everything pre-set and
/// return the report lines.
///
/// Duel players are `distance` apart from each other. Wind players stand on
/// a line every `distance` units starting at the standard first position.
pub fn test_shot(config: &GameConfig, shot: &TestShot, seed: u64) -> anyhow::Result<Vec<String>> {
    ensure!(
        (MIN_PLAYERS..=MAX_PLAYERS).contains(&shot.players),
        "test mode needs two or three players (got {})",
        shot.players
    );
    let velocities = vec![shot.velocity; shot.players];
    let setup = match config.model {
        PhysicsModel::Duel => {
            let mut table = RangeTable::new(shot.players);
            for (a, b) in table.pairs() {
                table.set(a, b, shot.distance);
            }
            GameSetup::with_distances(velocities, table)
        }
        PhysicsModel::Wind => {
            let positions = (0..shot.players)
                .map(|i| STANDARD_FIRST_POSITION + i as f64 * shot.distance)
                .collect();
            GameSetup::with_positions(velocities, positions)
        }
    };

    let mut game = Game::seeded(*config, &setup, seed).context("invalid test setup")?;
    let mut ids = PlayerId::all(shot.players);
    let (Some(shooter), Some(target)) = (ids.next(), ids.next()) else {
        bail!("test mode needs a shooter and a target");
    };
    if let Some(wind) = shot.wind {
        game.set_wind(shooter, wind)?;
    }

    let mut lines = Vec::new();
    if config.model.uses_wind() {
        let wind = game.registry().player(shooter).map_or(0.0, |p| p.wind);
        lines.extend(report::describe(
            &GameEvent::WindReport {
                player: shooter,
                wind,
            },
            config,
        ));
    }
    game.fire(shooter, target, shot.angle, None)?;
    for event in game.events() {
        lines.extend(report::describe(event, config));
    }
    Ok(lines)
}
