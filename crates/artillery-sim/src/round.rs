//! Round controller.
//!
//! One round is a pass over the active players in ascending order:
//! choose a target, read an angle (and a velocity when configured), resolve
//! the shot, apply the outcome. The round stops early as soon as at most one
//! player is left. Wind drifts only after every shooter has fired.

use artillery_core::config::GameConfig;
use artillery_core::constants::{ANGLE_SENTINEL, WIND_MAX_ANGLE};
use artillery_core::enums::{EliminationCause, PhysicsModel, ShotOutcome};
use artillery_core::errors::{parse_integer, parse_number};
use artillery_core::events::GameEvent;
use artillery_core::types::PlayerId;

use crate::console::{request, Console, SessionError};
use crate::physics::{self, ShotInput};
use crate::registry::PlayerRegistry;
use crate::report;
use crate::rng::RandomSource;
use crate::wind;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Every active player fired and more than one remains.
    Continue,
    /// At most one player remains. The round was cut short.
    GameOver { winner: Option<PlayerId> },
}

/// One shot, fully specified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub shooter: PlayerId,
    pub target: PlayerId,
    /// Elevation in degrees.
    pub angle: f64,
    /// Overrides the shooter's setup velocity for this shot only.
    pub velocity: Option<f64>,
}

/// Mutable state a round works on.
pub struct RoundContext<'a, R: RandomSource, C: Console + ?Sized> {
    pub config: &'a GameConfig,
    pub registry: &'a mut PlayerRegistry,
    pub rng: &'a mut R,
    pub console: &'a mut C,
    pub events: &'a mut Vec<GameEvent>,
}

impl<R: RandomSource, C: Console + ?Sized> RoundContext<'_, R, C> {
    /// Record an event and show it.
    fn emit(&mut self, event: GameEvent) {
        let lines = report::describe(&event, self.config);
        if !lines.is_empty() {
            self.console.display(&lines);
        }
        self.events.push(event);
    }

    /// Show every event recorded since `from`.
    fn show_since(&mut self, from: usize) {
        for event in &self.events[from..] {
            let lines = report::describe(event, self.config);
            if !lines.is_empty() {
                self.console.display(&lines);
            }
        }
    }
}

/// Play round number `round`.
pub fn play_round<R, C>(
    ctx: &mut RoundContext<'_, R, C>,
    round: u32,
) -> Result<RoundOutcome, SessionError>
where
    R: RandomSource,
    C: Console + ?Sized,
{
    ctx.emit(GameEvent::RoundStarted { round });
    if ctx.config.model.uses_wind() {
        for player in ctx.registry.active_remaining() {
            let wind = ctx.registry.player(player).map_or(0.0, |p| p.wind);
            ctx.emit(GameEvent::WindReport { player, wind });
        }
    }

    for shooter in PlayerId::all(ctx.registry.len()) {
        // May have been knocked out earlier this round.
        if !ctx.registry.is_active(shooter) {
            continue;
        }

        let target = choose_target(ctx, shooter)?;
        let angle = ask_angle(ctx.console, ctx.config)?;
        let velocity = if ctx.config.velocity_each_shot {
            Some(ask_shot_velocity(ctx.console, ctx.config)?)
        } else {
            None
        };

        let shot = Shot {
            shooter,
            target,
            angle,
            velocity,
        };
        let first_new = ctx.events.len();
        resolve_shot(ctx.config, ctx.registry, ctx.rng, &shot, ctx.events);
        ctx.show_since(first_new);

        if ctx.registry.active_count() <= 1 {
            let winner = ctx.registry.active_remaining().first().copied();
            tracing::info!(round, winner = ?winner, "game over");
            ctx.emit(GameEvent::GameOver { winner });
            return Ok(RoundOutcome::GameOver { winner });
        }
        ctx.console.say("");
    }

    if ctx.config.model.uses_wind() {
        for (player, from, to) in wind::update_winds(ctx.registry, &ctx.config.wind, ctx.rng) {
            ctx.emit(GameEvent::WindChanged { player, from, to });
        }
    }
    tracing::info!(round, active = ctx.registry.active_count(), "round complete");
    Ok(RoundOutcome::Continue)
}

/// Resolve one shot without prompting and apply its outcome.
///
/// The caller guarantees the shooter and target are distinct active players.
/// Events for the shot and any elimination are appended to `events`.
pub fn resolve_shot<R: RandomSource>(
    config: &GameConfig,
    registry: &mut PlayerRegistry,
    rng: &mut R,
    shot: &Shot,
    events: &mut Vec<GameEvent>,
) -> ShotOutcome {
    let (shooter_position, target_position) = registry.firing_line(shot.shooter, shot.target);
    let shooter = &registry.players()[shot.shooter.index()];
    let input = ShotInput {
        angle: shot.angle,
        muzzle_velocity: shot.velocity.unwrap_or(shooter.muzzle_velocity),
        shooter_position,
        target_position,
        wind: if config.model.uses_wind() {
            shooter.wind
        } else {
            0.0
        },
    };

    let perturbation = physics::draw_perturbation(config.model, &input, &config.physics, rng);
    let outcome = physics::resolve(config.model, &input, perturbation, &config.physics);
    tracing::debug!(
        shooter = %shot.shooter,
        target = %shot.target,
        angle = shot.angle,
        velocity = input.muzzle_velocity,
        perturbation,
        ?outcome,
        "shot resolved"
    );

    events.push(GameEvent::ShotResolved {
        shooter: shot.shooter,
        target: shot.target,
        angle: shot.angle,
        outcome,
    });

    let eliminated = match outcome {
        ShotOutcome::FiredIntoGround => Some((shot.shooter, EliminationCause::FiredIntoGround)),
        ShotOutcome::TooClose { .. } => Some((shot.shooter, EliminationCause::TooClose)),
        ShotOutcome::Hit { .. } => Some((shot.target, EliminationCause::Hit { by: shot.shooter })),
        ShotOutcome::FiredWrongWay
        | ShotOutcome::Undershot { .. }
        | ShotOutcome::Overshot { .. } => None,
    };
    if let Some((player, cause)) = eliminated {
        tracing::info!(%player, ?cause, "player eliminated");
        registry.set_defunct(player);
        events.push(GameEvent::PlayerEliminated { player, cause });
    }
    outcome
}

/// Two players: the other one. Three: ask, rejecting bad designations.
fn choose_target<R, C>(
    ctx: &mut RoundContext<'_, R, C>,
    shooter: PlayerId,
) -> Result<PlayerId, SessionError>
where
    R: RandomSource,
    C: Console + ?Sized,
{
    let count = ctx.registry.len();
    if count == 2 {
        let target = PlayerId::all(count)
            .find(|&p| p != shooter)
            .unwrap_or(shooter);
        ctx.emit(GameEvent::TargetChosen { shooter, target });
        return Ok(target);
    }

    let designations = PlayerId::all(count)
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let registry = &*ctx.registry;
    let prompt = format!("PLAYER {shooter} SHOOTING AT");
    let target = request(ctx.console, &prompt, |answer| {
        // Unreadable answers become player 0, which no one is.
        let number = parse_integer(answer).unwrap_or(0);
        let target = PlayerId::from_number(number)
            .filter(|&p| registry.contains(p))
            .ok_or_else(|| format!("ERROR--PLAYERS DESIGNATED {designations}."))?;
        if target == shooter {
            return Err("ERROR--CANNOT SHOOT SELF.".to_string());
        }
        if !registry.is_active(target) {
            return Err(format!("ERROR-- {target} IS DEFUNCT"));
        }
        Ok(target)
    })?;
    // Already echoed by the prompt; log it without repeating it on screen.
    ctx.events.push(GameEvent::TargetChosen { shooter, target });
    Ok(target)
}

fn ask_angle<C: Console + ?Sized>(
    console: &mut C,
    config: &GameConfig,
) -> Result<f64, SessionError> {
    match config.model {
        // Every answer is a shot. Unreadable ones fire into the ground.
        PhysicsModel::Duel => request(console, "FIRING ANGLE", |answer| {
            Ok(parse_number(answer).unwrap_or(ANGLE_SENTINEL))
        }),
        PhysicsModel::Wind => request(console, "FIRING ANGLE (0-90)", |answer| {
            match parse_number(answer) {
                Ok(angle) if (0.0..=WIND_MAX_ANGLE).contains(&angle) => Ok(angle),
                _ => Err("ERROR--ANGLE MUST BE BETWEEN 0 AND 90 DEGREES.".to_string()),
            }
        }),
    }
}

fn ask_shot_velocity<C: Console + ?Sized>(
    console: &mut C,
    config: &GameConfig,
) -> Result<f64, SessionError> {
    let prompt = format!("MUZZLE VELOCITY ({})", config.units.velocity_abbrev());
    request(console, &prompt, |answer| match parse_number(answer) {
        Ok(v) if v > 0.0 => Ok(v),
        _ => Err("ERROR--MUZZLE VELOCITY MUST BE POSITIVE.".to_string()),
    })
}
