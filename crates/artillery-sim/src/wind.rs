//! Per-player wind: starting values and end-of-round drift.

use artillery_core::config::WindParams;
use artillery_core::types::PlayerId;

use crate::registry::PlayerRegistry;
use crate::rng::RandomSource;

/// Starting wind for each of `count` players, drawn from `[-initial, initial)`
/// and clamped to the limit.
pub fn initial_winds(count: usize, params: &WindParams, rng: &mut impl RandomSource) -> Vec<f64> {
    (0..count)
        .map(|_| rng.uniform(-params.initial, params.initial).clamp(-params.limit, params.limit))
        .collect()
}

/// Drift every player's wind by an independent step in `[-step, step)`,
/// then clamp to `[-limit, limit]`. Returns `(player, from, to)` per player.
///
/// Defunct players drift too; their wind is simply never read again.
pub fn update_winds(
    registry: &mut PlayerRegistry,
    params: &WindParams,
    rng: &mut impl RandomSource,
) -> Vec<(PlayerId, f64, f64)> {
    let mut changes = Vec::with_capacity(registry.len());
    for id in PlayerId::all(registry.len()) {
        let from = registry.player(id).map_or(0.0, |p| p.wind);
        let to = (from + rng.uniform(-params.step, params.step)).clamp(-params.limit, params.limit);
        registry.set_wind(id, to);
        changes.push((id, from, to));
    }
    changes
}
