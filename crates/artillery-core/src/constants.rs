//! Game constants and tuning parameters.

// --- Players ---

/// Fewest players a game accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game accepts.
pub const MAX_PLAYERS: usize = 3;

// --- Gravity ---

/// Standard gravity in ft/s².
pub const GRAVITY_IMPERIAL: f64 = 32.2;

/// Standard gravity in m/s².
pub const GRAVITY_METRIC: f64 = 9.81;

// --- Duel model ---

/// Hit band as a fraction of the distance to the target (5%).
pub const HIT_TOLERANCE_FRACTION: f64 = 0.05;

/// Each noise sample is drawn from `[0, distance / NOISE_DIVISOR)`.
pub const NOISE_DIVISOR: f64 = 1000.0;

/// Angles below zero or above this are fired into the ground.
pub const DUEL_MAX_LEGAL_ANGLE: f64 = 180.0;

/// Angles at or above this fire away from the target.
pub const DUEL_WRONG_WAY_ANGLE: f64 = 90.0;

/// Numeric stand-in for an unreadable angle. Lands in the fired-into-ground branch.
pub const ANGLE_SENTINEL: f64 = -1.0;

// --- Wind model ---

/// Highest accepted elevation in the wind model (degrees).
pub const WIND_MAX_ANGLE: f64 = 90.0;

/// Hit threshold around the target position (feet).
pub const HIT_THRESHOLD_IMPERIAL: f64 = 50.0;

/// Hit threshold around the target position (meters).
pub const HIT_THRESHOLD_METRIC: f64 = 15.0;

/// Per-shot muzzle velocity variance bound (ft/s).
pub const VELOCITY_VARIANCE_IMPERIAL: f64 = 50.0;

/// Per-shot muzzle velocity variance bound (m/s).
pub const VELOCITY_VARIANCE_METRIC: f64 = 15.0;

// --- Wind ---

/// Wind is clamped to `[-WIND_LIMIT, WIND_LIMIT]` after every update (imperial).
pub const WIND_LIMIT_IMPERIAL: f64 = 50.0;

/// Metric wind clamp.
pub const WIND_LIMIT_METRIC: f64 = 20.0;

/// Largest per-round wind change (imperial).
pub const WIND_STEP_IMPERIAL: f64 = 10.0;

/// Largest per-round wind change (metric).
pub const WIND_STEP_METRIC: f64 = 4.0;

// --- Layout ---

/// First standard position on the range.
pub const STANDARD_FIRST_POSITION: f64 = 500.0;

/// Spacing between standard positions.
pub const STANDARD_POSITION_SPACING: f64 = 1000.0;

// --- Randomness ---

/// Seed used when none is supplied and determinism is wanted.
pub const DEFAULT_SEED: u64 = 42;
