//! Per-kind enemy behavior parameters and cooldown rolls.

use rand::Rng;

use sidescroller_core::constants::{BOSS_DEFAULT_HEALTH, COOLDOWN_JITTER, PROJECTILE_COOLDOWN};
use sidescroller_core::enums::EnemyKind;

/// Static behavior and presentation traits of an enemy kind.
#[derive(Debug, Clone, Copy)]
pub struct EnemyBehaviorProfile {
    /// Stomps drain `health` instead of killing outright.
    pub has_health_pool: bool,
    /// Health that fills the health bar. Zero when there is no bar.
    pub bar_health: i32,
}

pub fn get_profile(kind: EnemyKind) -> EnemyBehaviorProfile {
    match kind {
        EnemyKind::Boss => EnemyBehaviorProfile {
            has_health_pool: true,
            bar_health: BOSS_DEFAULT_HEALTH,
        },
        EnemyKind::Mushroom | EnemyKind::Basic => EnemyBehaviorProfile {
            has_health_pool: false,
            bar_health: 0,
        },
    }
}

/// First shot delay, in `[0, PROJECTILE_COOLDOWN)` frames.
pub fn initial_cooldown<R: Rng>(rng: &mut R) -> i32 {
    rng.gen_range(0..PROJECTILE_COOLDOWN)
}

/// Delay after a shot: the base cooldown plus `[0, COOLDOWN_JITTER)`.
pub fn next_cooldown<R: Rng>(rng: &mut R) -> i32 {
    PROJECTILE_COOLDOWN + rng.gen_range(0..COOLDOWN_JITTER)
}
