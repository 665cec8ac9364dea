//! Shot resolution: pure ballistics and hit classification.
//!
//! Nothing here draws randomness or touches game state. The round
//! controller draws the perturbation with `draw_perturbation` and passes it
//! in, so every function is total over its declared domain and testable with
//! exact numbers.

use std::f64::consts::PI;

use artillery_core::config::PhysicsParams;
use artillery_core::constants::{DUEL_MAX_LEGAL_ANGLE, DUEL_WRONG_WAY_ANGLE};
use artillery_core::enums::{PhysicsModel, ShotOutcome};

use crate::rng::RandomSource;

/// Everything the calculator needs to know about one shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotInput {
    /// Elevation in degrees.
    pub angle: f64,
    pub muzzle_velocity: f64,
    pub shooter_position: f64,
    pub target_position: f64,
    /// Wind acting along the line of fire (positive = tailwind).
    pub wind: f64,
}

impl ShotInput {
    pub fn distance(&self) -> f64 {
        (self.target_position - self.shooter_position).abs()
    }

    fn direction(&self) -> f64 {
        if self.target_position < self.shooter_position {
            -1.0
        } else {
            1.0
        }
    }
}

/// Greatest horizontal distance a muzzle velocity can reach on flat ground.
pub fn max_range(muzzle_velocity: f64, gravity: f64) -> f64 {
    muzzle_velocity * muzzle_velocity / gravity
}

// --- Duel model ---

/// Range of a duel shot before noise.
///
/// Degrees convert with `π/90`, i.e. the argument is twice the elevation in
/// radians. This is the classic `sin 2θ · v² / g` range formula.
pub fn duel_range(angle: f64, muzzle_velocity: f64, gravity: f64) -> f64 {
    (angle * PI / 90.0).sin() * max_range(muzzle_velocity, gravity)
}

/// Resolve a duel shot. `noise` is the difference of two draws in
/// `[0, distance / noise_divisor)`.
pub fn duel_shot(input: &ShotInput, noise: f64, params: &PhysicsParams) -> ShotOutcome {
    let angle = input.angle;
    if !(0.0..=DUEL_MAX_LEGAL_ANGLE).contains(&angle) {
        return ShotOutcome::FiredIntoGround;
    }
    if angle >= DUEL_WRONG_WAY_ANGLE {
        return ShotOutcome::FiredWrongWay;
    }

    let distance = input.distance();
    let impact = duel_range(angle, input.muzzle_velocity, params.gravity) + noise;
    let tolerance = params.hit_tolerance_fraction * distance;

    if impact < tolerance {
        ShotOutcome::TooClose { impact }
    } else if (impact - distance).abs() < tolerance {
        ShotOutcome::Hit { impact }
    } else if impact < distance {
        ShotOutcome::Undershot {
            impact,
            short_by: distance - impact,
        }
    } else {
        ShotOutcome::Overshot {
            impact,
            long_by: impact - distance,
        }
    }
}

// --- Wind model ---

/// Flight time of a shell fired at `angle` degrees.
pub fn time_of_flight(velocity: f64, angle: f64, gravity: f64) -> f64 {
    2.0 * velocity * angle.to_radians().sin() / gravity
}

/// Ground distance covered in `time` seconds, including wind drift.
pub fn horizontal_distance(velocity: f64, angle: f64, time: f64, wind: f64) -> f64 {
    velocity * angle.to_radians().cos() * time + 0.5 * wind * time * time
}

/// Resolve a wind-model shot. `variance` is added to the muzzle velocity.
///
/// The resulting velocity is floored at zero so the shell never flies
/// backwards through the gun.
pub fn wind_shot(input: &ShotInput, variance: f64, params: &PhysicsParams) -> ShotOutcome {
    let velocity = (input.muzzle_velocity + variance).max(0.0);
    let time = time_of_flight(velocity, input.angle, params.gravity);
    let travel = horizontal_distance(velocity, input.angle, time, input.wind);

    let direction = input.direction();
    let impact = input.shooter_position + direction * travel;
    // Positive: beyond the target, measured along the line of fire.
    let miss = (impact - input.target_position) * direction;

    if miss.abs() <= params.hit_threshold {
        ShotOutcome::Hit { impact }
    } else if miss > 0.0 {
        ShotOutcome::Overshot {
            impact,
            long_by: miss,
        }
    } else {
        ShotOutcome::Undershot {
            impact,
            short_by: -miss,
        }
    }
}

// --- Strategy dispatch ---

/// Draw the model's random perturbation for one shot.
///
/// Duel: `u1 - u2` with both in `[0, distance / divisor)`. Nothing is drawn
/// for angles that never reach the range formula.
/// Wind: one velocity variance in `[-variance, variance)`.
pub fn draw_perturbation(
    model: PhysicsModel,
    input: &ShotInput,
    params: &PhysicsParams,
    rng: &mut impl RandomSource,
) -> f64 {
    match model {
        PhysicsModel::Duel if !(0.0..DUEL_WRONG_WAY_ANGLE).contains(&input.angle) => 0.0,
        PhysicsModel::Duel => {
            let spread = input.distance() / params.noise_divisor;
            rng.uniform(0.0, spread) - rng.uniform(0.0, spread)
        }
        PhysicsModel::Wind => rng.uniform(-params.velocity_variance, params.velocity_variance),
    }
}

/// Resolve a shot under the configured model.
pub fn resolve(
    model: PhysicsModel,
    input: &ShotInput,
    perturbation: f64,
    params: &PhysicsParams,
) -> ShotOutcome {
    match model {
        PhysicsModel::Duel => duel_shot(input, perturbation, params),
        PhysicsModel::Wind => wind_shot(input, perturbation, params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artillery_core::enums::UnitSystem;

    fn shot(angle: f64, velocity: f64, distance: f64) -> ShotInput {
        ShotInput {
            angle,
            muzzle_velocity: velocity,
            shooter_position: 0.0,
            target_position: distance,
            wind: 0.0,
        }
    }

    fn imperial() -> PhysicsParams {
        PhysicsParams::for_units(UnitSystem::Imperial)
    }

    fn metric() -> PhysicsParams {
        PhysicsParams::for_units(UnitSystem::Metric)
    }

    // ---- Duel ----

    #[test]
    fn duel_45_degrees_reaches_max_range() {
        // 45 * π/90 = π/2, so the shell flies the full v²/g = 1242.2 ft.
        let outcome = duel_shot(&shot(45.0, 200.0, 1000.0), 0.0, &imperial());
        match outcome {
            ShotOutcome::Overshot { impact, long_by } => {
                assert!((impact - 1242.24).abs() < 0.01, "impact {impact}");
                assert!((long_by - 242.24).abs() < 0.01, "long by {long_by}");
            }
            other => panic!("expected overshot, got {other:?}"),
        }
    }

    #[test]
    fn duel_shallow_angle_undershoots() {
        // 22.5 * π/90 = π/4: 1242.24 * sin(π/4) = 878.4 ft.
        let outcome = duel_shot(&shot(22.5, 200.0, 1000.0), 0.0, &imperial());
        match outcome {
            ShotOutcome::Undershot { impact, short_by } => {
                assert!((impact - 878.4).abs() < 0.1, "impact {impact}");
                assert!((short_by - 121.6).abs() < 0.1, "short by {short_by}");
            }
            other => panic!("expected undershot, got {other:?}"),
        }
    }

    #[test]
    fn duel_negative_or_steep_angle_fires_into_ground() {
        let params = imperial();
        assert_eq!(
            duel_shot(&shot(-1.0, 200.0, 1000.0), 0.0, &params),
            ShotOutcome::FiredIntoGround
        );
        assert_eq!(
            duel_shot(&shot(180.5, 200.0, 1000.0), 0.0, &params),
            ShotOutcome::FiredIntoGround
        );
    }

    #[test]
    fn duel_wrong_way_band() {
        let params = imperial();
        for angle in [90.0, 135.0, 180.0] {
            assert_eq!(
                duel_shot(&shot(angle, 200.0, 1000.0), 0.0, &params),
                ShotOutcome::FiredWrongWay,
                "angle {angle}"
            );
        }
    }

    #[test]
    fn duel_flat_shot_is_too_close() {
        let outcome = duel_shot(&shot(0.0, 200.0, 1000.0), 0.0, &imperial());
        assert!(outcome.eliminates_shooter(), "got {outcome:?}");
    }

    #[test]
    fn duel_hit_within_five_percent() {
        let params = imperial();
        // Max range exactly 1000 at 45 degrees.
        let velocity = (1000.0 * params.gravity).sqrt();
        let outcome = duel_shot(&shot(45.0, velocity, 1000.0), 40.0, &params);
        assert!(matches!(outcome, ShotOutcome::Hit { .. }), "got {outcome:?}");

        let outcome = duel_shot(&shot(45.0, velocity, 1000.0), 60.0, &params);
        assert!(
            matches!(outcome, ShotOutcome::Overshot { .. }),
            "60 ft long is outside the band, got {outcome:?}"
        );
    }

    #[test]
    fn duel_uses_distance_regardless_of_side() {
        let params = imperial();
        let velocity = (1000.0 * params.gravity).sqrt();
        let mut input = shot(45.0, velocity, 1000.0);
        input.shooter_position = 2500.0;
        input.target_position = 1500.0;
        assert!(matches!(
            duel_shot(&input, 0.0, &params),
            ShotOutcome::Hit { .. }
        ));
    }

    // ---- Wind ----

    #[test]
    fn wind_reference_shot_overshoots() {
        let params = metric();
        let tof = time_of_flight(300.0, 45.0, params.gravity);
        assert!((tof - 43.25).abs() < 0.01, "tof {tof}");

        let outcome = wind_shot(&shot(45.0, 300.0, 1000.0), 0.0, &params);
        let expected_travel = 300.0 * 300.0 / params.gravity;
        match outcome {
            ShotOutcome::Overshot { impact, long_by } => {
                assert!((impact - expected_travel).abs() < 1e-6);
                assert!((long_by - (expected_travel - 1000.0)).abs() < 1e-6);
            }
            other => panic!("expected overshot, got {other:?}"),
        }
    }

    #[test]
    fn wind_time_of_flight_non_negative_over_domain() {
        let params = imperial();
        for velocity in [1.0, 50.0, 300.0, 2000.0] {
            for step in 0..=90 {
                let tof = time_of_flight(velocity, step as f64, params.gravity);
                assert!(tof >= -1e-12, "tof {tof} at v={velocity} angle={step}");
            }
        }
    }

    #[test]
    fn wind_tailwind_carries_further() {
        let params = metric();
        let calm = shot(30.0, 100.0, 5000.0);
        let windy = ShotInput { wind: 5.0, ..calm };
        let calm_impact = wind_shot(&calm, 0.0, &params).impact().unwrap();
        let windy_impact = wind_shot(&windy, 0.0, &params).impact().unwrap();
        assert!(windy_impact > calm_impact);
    }

    #[test]
    fn wind_hit_threshold_is_inclusive() {
        let params = metric();
        let travel = 100.0 * 100.0 / params.gravity;
        let target = travel + params.hit_threshold - 1e-6;
        let outcome = wind_shot(&shot(45.0, 100.0, target), 0.0, &params);
        assert!(matches!(outcome, ShotOutcome::Hit { .. }), "got {outcome:?}");
    }

    #[test]
    fn wind_fires_toward_target_on_the_left() {
        let params = metric();
        let travel = 100.0 * 100.0 / params.gravity;
        let input = ShotInput {
            angle: 45.0,
            muzzle_velocity: 100.0,
            shooter_position: 2500.0,
            target_position: 2500.0 - travel - 200.0,
            wind: 0.0,
        };
        match wind_shot(&input, 0.0, &params) {
            ShotOutcome::Undershot { impact, short_by } => {
                assert!((impact - (2500.0 - travel)).abs() < 1e-6);
                assert!((short_by - 200.0).abs() < 1e-6);
            }
            other => panic!("expected undershot, got {other:?}"),
        }
    }

    #[test]
    fn wind_negative_total_velocity_lands_at_gun() {
        let params = imperial();
        let outcome = wind_shot(&shot(45.0, 10.0, 1000.0), -50.0, &params);
        assert_eq!(outcome.impact(), Some(0.0));
    }

    // ---- Dispatch ----

    #[test]
    fn perturbation_is_zero_at_midpoint() {
        let mut rng = crate::rng::FixedRandom::midpoint();
        let input = shot(45.0, 200.0, 1000.0);
        for model in [PhysicsModel::Duel, PhysicsModel::Wind] {
            assert_eq!(draw_perturbation(model, &input, &imperial(), &mut rng), 0.0);
        }
    }

    #[test]
    fn no_noise_drawn_for_illegal_duel_angle() {
        let mut rng = crate::rng::FixedRandom::with_fractions([0.9, 0.1]);
        let input = shot(120.0, 200.0, 1000.0);
        assert_eq!(draw_perturbation(PhysicsModel::Duel, &input, &imperial(), &mut rng), 0.0);
        // Both queued fractions are still there for the next legal shot.
        let legal = shot(30.0, 200.0, 1000.0);
        let noise = draw_perturbation(PhysicsModel::Duel, &legal, &imperial(), &mut rng);
        assert!((noise - 0.8).abs() < 1e-12, "noise {noise}");
    }

    #[test]
    fn duel_noise_bounded_by_distance() {
        let mut rng = crate::rng::SeededRandom::new(3);
        let input = shot(45.0, 200.0, 2000.0);
        for _ in 0..500 {
            let noise = draw_perturbation(PhysicsModel::Duel, &input, &imperial(), &mut rng);
            assert!(noise.abs() < 2.0, "noise {noise}");
        }
    }
}
