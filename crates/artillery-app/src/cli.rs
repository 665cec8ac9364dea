//! Command line flags and config assembly.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde_json::Value;

use artillery_core::config::GameConfig;
use artillery_core::constants::{DEFAULT_SEED, STANDARD_POSITION_SPACING};
use artillery_core::enums::{PhysicsModel, UnitSystem};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    /// Flat duel: a hit lands within 5% of the distance
    Duel,
    /// Positions on a line, wind and velocity variance
    Wind,
}

impl From<ModelArg> for PhysicsModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Duel => PhysicsModel::Duel,
            ModelArg::Wind => PhysicsModel::Wind,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum UnitsArg {
    Imperial,
    Metric,
}

impl From<UnitsArg> for UnitSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Imperial => UnitSystem::Imperial,
            UnitsArg::Metric => UnitSystem::Metric,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "artillery")]
#[command(about = "Turn-based artillery duel for two or three players")]
pub struct Cli {
    /// Ballistics model
    #[arg(long, value_enum, default_value_t = ModelArg::Duel)]
    pub model: ModelArg,
    /// Unit system for distances, velocities and gravity
    #[arg(long, value_enum, default_value_t = UnitsArg::Imperial)]
    pub units: UnitsArg,
    /// RNG seed for determinism
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
    /// JSON file overlaid on the model/units preset
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Read answers from this file instead of stdin
    #[arg(long)]
    pub answers: Option<PathBuf>,
    /// Ask for a muzzle velocity with every shot
    #[arg(long)]
    pub velocity_each_shot: bool,

    /// Resolve a single shot from player 1 at player 2 and exit
    #[arg(long)]
    pub test: bool,
    /// Players in the test game
    #[arg(long, default_value_t = 2)]
    pub players: usize,
    /// Spacing between neighbouring players in the test game
    #[arg(long, default_value_t = STANDARD_POSITION_SPACING)]
    pub distance: f64,
    /// Muzzle velocity of every player in the test game
    #[arg(long, default_value_t = 300.0)]
    pub velocity: f64,
    /// Firing angle of the test shot
    #[arg(long, default_value_t = 45.0)]
    pub angle: f64,
    /// Wind on the shooter in the test game (wind model only)
    #[arg(long, allow_negative_numbers = true)]
    pub wind: Option<f64>,
}

/// Parameters of a `--test` shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestShot {
    pub players: usize,
    pub distance: f64,
    pub velocity: f64,
    pub angle: f64,
    pub wind: Option<f64>,
}

impl Cli {
    /// Preset for `--model`/`--units`, overlaid with `--config` and flags.
    pub fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = GameConfig::new(self.model.into(), self.units.into());
        if let Some(path) = &self.config {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            config = overlay_json(&config, &text)
                .with_context(|| format!("parsing config {}", path.display()))?;
        }
        if self.velocity_each_shot {
            config.velocity_each_shot = true;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn test_shot(&self) -> TestShot {
        TestShot {
            players: self.players,
            distance: self.distance,
            velocity: self.velocity,
            angle: self.angle,
            wind: self.wind,
        }
    }
}

/// Apply a partial JSON document on top of `base`. Keys missing from the
/// document keep the base value, nested objects merge key by key.
pub fn overlay_json(base: &GameConfig, text: &str) -> anyhow::Result<GameConfig> {
    let patch: Value = serde_json::from_str(text)?;
    let mut merged = serde_json::to_value(base)?;
    merge(&mut merged, patch);
    Ok(serde_json::from_value(merged)?)
}

fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_imperial_duel() {
        let cli = Cli::try_parse_from(["artillery"]).unwrap();
        let config = cli.game_config().unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(!cli.test);
    }

    #[test]
    fn model_and_units_select_preset() {
        let cli =
            Cli::try_parse_from(["artillery", "--model", "wind", "--units", "metric"]).unwrap();
        let config = cli.game_config().unwrap();
        assert_eq!(config, GameConfig::new(PhysicsModel::Wind, UnitSystem::Metric));
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "artillery", "--test", "--model", "wind", "--players", "3", "--angle", "30",
            "--wind", "-12.5",
        ])
        .unwrap();
        let shot = cli.test_shot();
        assert!(cli.test);
        assert_eq!(shot.players, 3);
        assert_eq!(shot.angle, 30.0);
        assert_eq!(shot.wind, Some(-12.5));
        assert_eq!(shot.distance, STANDARD_POSITION_SPACING);
    }

    #[test]
    fn overlay_keeps_unlisted_fields() {
        let base = GameConfig::new(PhysicsModel::Wind, UnitSystem::Imperial);
        let merged = overlay_json(&base, r#"{"wind": {"step": 2.5}, "velocity_each_shot": true}"#)
            .unwrap();
        assert_eq!(merged.wind.step, 2.5);
        assert_eq!(merged.wind.limit, base.wind.limit);
        assert_eq!(merged.physics, base.physics);
        assert_eq!(merged.model, PhysicsModel::Wind);
        assert!(merged.velocity_each_shot);
    }

    #[test]
    fn overlay_rejects_bad_json() {
        assert!(overlay_json(&GameConfig::default(), "{not json").is_err());
    }

    #[test]
    fn unknown_model_is_rejected() {
        assert!(Cli::try_parse_from(["artillery", "--model", "mortar"]).is_err());
    }
}
