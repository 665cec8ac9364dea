//! Game engine.
//!
//! `Game` owns the player registry, the random source and the event log.
//! It can be driven interactively one round at a time through a `Console`,
//! or shot by shot through `fire` with every parameter supplied up front.
//! Same seed and same answers give the same event log.

use artillery_core::config::GameConfig;
use artillery_core::constants::{DEFAULT_SEED, WIND_MAX_ANGLE};
use artillery_core::enums::{GamePhase, PhysicsModel, ShotOutcome};
use artillery_core::errors::{SetupError, ShotError};
use artillery_core::events::GameEvent;
use artillery_core::types::PlayerId;

use crate::console::{confirm, Console, SessionError};
use crate::registry::PlayerRegistry;
use crate::rng::{RandomSource, SeededRandom};
use crate::round::{self, RoundContext, RoundOutcome, Shot};
use crate::setup::GameSetup;
use crate::wind;

/// Prompt shown between rounds.
const CONTINUE_PROMPT: &str = "DO YOU WISH TO CONTINUE";

pub struct Game<R: RandomSource = SeededRandom> {
    config: GameConfig,
    registry: PlayerRegistry,
    rng: R,
    round: u32,
    phase: GamePhase,
    events: Vec<GameEvent>,
}

impl Game<SeededRandom> {
    /// Start a game with a seeded ChaCha source.
    pub fn seeded(config: GameConfig, setup: &GameSetup, seed: u64) -> Result<Self, SetupError> {
        Self::new(config, setup, SeededRandom::new(seed))
    }

    /// Start a game with the default seed.
    pub fn with_default_seed(config: GameConfig, setup: &GameSetup) -> Result<Self, SetupError> {
        Self::seeded(config, setup, DEFAULT_SEED)
    }
}

impl<R: RandomSource> Game<R> {
    /// Validate `setup` and start round 1.
    ///
    /// In the wind model every player's starting wind is drawn here.
    pub fn new(config: GameConfig, setup: &GameSetup, mut rng: R) -> Result<Self, SetupError> {
        setup.validate(&config)?;
        let winds = if config.model.uses_wind() {
            wind::initial_winds(setup.player_count(), &config.wind, &mut rng)
        } else {
            Vec::new()
        };
        let registry = PlayerRegistry::new(setup, &winds);
        tracing::info!(
            players = registry.len(),
            model = ?config.model,
            units = ?config.units,
            "game started"
        );
        Ok(Self {
            config,
            registry,
            rng,
            round: 1,
            phase: GamePhase::InProgress,
            events: Vec::new(),
        })
    }

    /// Fire one shot with no prompting.
    ///
    /// Ends the game when the shot leaves at most one player standing. Wind
    /// does not change; call `finish_round` once every shooter has fired.
    pub fn fire(
        &mut self,
        shooter: PlayerId,
        target: PlayerId,
        angle: f64,
        velocity: Option<f64>,
    ) -> Result<ShotOutcome, ShotError> {
        if self.phase != GamePhase::InProgress {
            return Err(ShotError::GameOver);
        }
        for player in [shooter, target] {
            if !self.registry.contains(player) {
                return Err(ShotError::UnknownPlayer(player));
            }
        }
        if shooter == target {
            return Err(ShotError::SelfTarget(shooter));
        }
        for player in [shooter, target] {
            if !self.registry.is_active(player) {
                return Err(ShotError::Defunct(player));
            }
        }
        if let Some(v) = velocity {
            if !v.is_finite() || v <= 0.0 {
                return Err(ShotError::Velocity(v));
            }
        }
        // Out-of-band duel angles are a game event (fired into the ground).
        let angle_ok = match self.config.model {
            PhysicsModel::Duel => angle.is_finite(),
            PhysicsModel::Wind => (0.0..=WIND_MAX_ANGLE).contains(&angle),
        };
        if !angle_ok {
            return Err(ShotError::Angle(angle));
        }

        self.events.push(GameEvent::TargetChosen { shooter, target });
        let shot = Shot {
            shooter,
            target,
            angle,
            velocity,
        };
        let outcome = round::resolve_shot(
            &self.config,
            &mut self.registry,
            &mut self.rng,
            &shot,
            &mut self.events,
        );
        if self.registry.active_count() <= 1 {
            let winner = self.registry.active_remaining().first().copied();
            self.events.push(GameEvent::GameOver { winner });
            self.phase = GamePhase::Finished { winner };
        }
        Ok(outcome)
    }

    /// Pin a player's wind, clamped to the configured limit.
    pub fn set_wind(&mut self, player: PlayerId, wind: f64) -> Result<(), ShotError> {
        if !self.registry.contains(player) {
            return Err(ShotError::UnknownPlayer(player));
        }
        let limit = self.config.wind.limit;
        self.registry.set_wind(player, wind.clamp(-limit, limit));
        Ok(())
    }

    /// Close the current round after direct `fire` calls: drift the wind
    /// and advance the round counter.
    pub fn finish_round(&mut self) {
        if self.phase != GamePhase::InProgress {
            return;
        }
        if self.config.model.uses_wind() {
            for (player, from, to) in
                wind::update_winds(&mut self.registry, &self.config.wind, &mut self.rng)
            {
                self.events.push(GameEvent::WindChanged { player, from, to });
            }
        }
        self.round += 1;
    }

    /// Play the current round interactively.
    pub fn play_round<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
    ) -> Result<RoundOutcome, SessionError> {
        match self.phase {
            GamePhase::InProgress => {}
            GamePhase::Finished { winner } => return Ok(RoundOutcome::GameOver { winner }),
            GamePhase::Abandoned => return Ok(RoundOutcome::GameOver { winner: None }),
        }

        let mut ctx = RoundContext {
            config: &self.config,
            registry: &mut self.registry,
            rng: &mut self.rng,
            console,
            events: &mut self.events,
        };
        let outcome = round::play_round(&mut ctx, self.round)?;
        match outcome {
            RoundOutcome::Continue => self.round += 1,
            RoundOutcome::GameOver { winner } => self.phase = GamePhase::Finished { winner },
        }
        Ok(outcome)
    }

    /// Play rounds until someone wins or the players stop.
    pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<GamePhase, SessionError> {
        loop {
            match self.play_round(console)? {
                RoundOutcome::GameOver { .. } => break,
                RoundOutcome::Continue => {
                    if !confirm(console, CONTINUE_PROMPT)? {
                        tracing::info!(round = self.round, "game abandoned");
                        self.phase = GamePhase::Abandoned;
                        break;
                    }
                    console.say("");
                }
            }
        }
        Ok(self.phase)
    }

    /// The last player standing, once the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            GamePhase::Finished { winner } => winner,
            _ => None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::InProgress
    }

    /// Every event so far, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// The round being played (1-based).
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
