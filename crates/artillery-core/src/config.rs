//! Game configuration.
//!
//! Every tunable the engine reads lives here so both unit systems run
//! through the same code path. Values default from `constants`.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{PhysicsModel, UnitSystem};
use crate::errors::ConfigError;

/// Ballistics parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Gravitational acceleration in the configured units.
    pub gravity: f64,
    /// Duel model: hit band as a fraction of target distance.
    pub hit_tolerance_fraction: f64,
    /// Duel model: noise samples are drawn from `[0, distance / noise_divisor)`.
    pub noise_divisor: f64,
    /// Wind model: absolute hit band around the target position.
    pub hit_threshold: f64,
    /// Wind model: per-shot velocity variance is drawn from `[-v, v)`.
    pub velocity_variance: f64,
}

impl PhysicsParams {
    pub fn for_units(units: UnitSystem) -> Self {
        match units {
            UnitSystem::Imperial => Self {
                gravity: GRAVITY_IMPERIAL,
                hit_tolerance_fraction: HIT_TOLERANCE_FRACTION,
                noise_divisor: NOISE_DIVISOR,
                hit_threshold: HIT_THRESHOLD_IMPERIAL,
                velocity_variance: VELOCITY_VARIANCE_IMPERIAL,
            },
            UnitSystem::Metric => Self {
                gravity: GRAVITY_METRIC,
                hit_tolerance_fraction: HIT_TOLERANCE_FRACTION,
                noise_divisor: NOISE_DIVISOR,
                hit_threshold: HIT_THRESHOLD_METRIC,
                velocity_variance: VELOCITY_VARIANCE_METRIC,
            },
        }
    }
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self::for_units(UnitSystem::default())
    }
}

/// Wind evolution parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindParams {
    /// Symmetric clamp applied after every update.
    pub limit: f64,
    /// Largest change per round, drawn from `[-step, step)`.
    pub step: f64,
    /// Initial wind is drawn from `[-initial, initial)`.
    pub initial: f64,
}

impl WindParams {
    pub fn for_units(units: UnitSystem) -> Self {
        match units {
            UnitSystem::Imperial => Self {
                limit: WIND_LIMIT_IMPERIAL,
                step: WIND_STEP_IMPERIAL,
                initial: WIND_LIMIT_IMPERIAL,
            },
            UnitSystem::Metric => Self {
                limit: WIND_LIMIT_METRIC,
                step: WIND_STEP_METRIC,
                initial: WIND_LIMIT_METRIC,
            },
        }
    }
}

impl Default for WindParams {
    fn default() -> Self {
        Self::for_units(UnitSystem::default())
    }
}

/// Complete configuration for one game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub model: PhysicsModel,
    pub units: UnitSystem,
    pub physics: PhysicsParams,
    pub wind: WindParams,
    /// Ask for a muzzle velocity on every shot instead of using the setup value.
    pub velocity_each_shot: bool,
}

impl GameConfig {
    /// Unit-consistent configuration for a model.
    pub fn new(model: PhysicsModel, units: UnitSystem) -> Self {
        Self {
            model,
            units,
            physics: PhysicsParams::for_units(units),
            wind: WindParams::for_units(units),
            velocity_each_shot: false,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        if !(p.gravity.is_finite() && p.gravity > 0.0) {
            return Err(ConfigError::Gravity(p.gravity));
        }
        if !(p.hit_tolerance_fraction.is_finite() && p.hit_tolerance_fraction >= 0.0) {
            return Err(ConfigError::Negative {
                field: "hit_tolerance_fraction",
                value: p.hit_tolerance_fraction,
            });
        }
        if !(p.noise_divisor.is_finite() && p.noise_divisor > 0.0) {
            return Err(ConfigError::NoiseDivisor(p.noise_divisor));
        }
        for (field, value) in [
            ("hit_threshold", p.hit_threshold),
            ("velocity_variance", p.velocity_variance),
            ("wind.limit", self.wind.limit),
            ("wind.step", self.wind.step),
            ("wind.initial", self.wind.initial),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(PhysicsModel::default(), UnitSystem::default())
    }
}
