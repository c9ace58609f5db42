//! Enemy behavior state machine.
//!
//! Pure functions over plain data. No ECS dependency: the sim crate
//! gathers the inputs, calls these, and writes the results back.

use glam::Vec2;

use sidescroller_core::constants::{ENEMY_REST_TOLERANCE, PROJECTILE_SIZE};
use sidescroller_core::enums::EnemyKind;
use sidescroller_core::types::Aabb;

use crate::profiles::get_profile;

/// Input to the patrol step for a single enemy.
pub struct PatrolContext<'a> {
    pub body: Aabb,
    pub velocity_x: f32,
    /// Platforms in authoring order. The first match wins.
    pub platforms: &'a [Aabb],
}

/// Output of the patrol step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolUpdate {
    pub x: f32,
    pub velocity_x: f32,
    /// Direction flipped at a platform edge this frame.
    pub reversed: bool,
}

/// The platform the body is standing on, if any.
pub fn resting_platform<'a>(body: &Aabb, platforms: &'a [Aabb]) -> Option<&'a Aabb> {
    platforms.iter().find(|p| {
        body.overlaps_horizontally(p) && (body.bottom() - p.top()).abs() < ENEMY_REST_TOLERANCE
    })
}

/// Walk along the supporting platform, turning around at its edges.
/// Returns `None` when the enemy is not on a platform; it then holds still.
pub fn patrol(ctx: &PatrolContext) -> Option<PatrolUpdate> {
    let platform = resting_platform(&ctx.body, ctx.platforms)?;

    let width = ctx.body.size.x;
    let mut x = ctx.body.pos.x + ctx.velocity_x;
    let mut velocity_x = ctx.velocity_x;
    let mut reversed = false;

    if x <= platform.left() || x + width >= platform.right() {
        velocity_x = -velocity_x;
        reversed = true;
        if x < platform.left() {
            x = platform.left();
        }
        if x + width > platform.right() {
            x = platform.right() - width;
        }
    }

    Some(PatrolUpdate {
        x,
        velocity_x,
        reversed,
    })
}

/// Result of advancing a fire timer by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireDecision {
    Hold { frames_remaining: i32 },
    /// Timer ran out. The caller fires and rolls a new cooldown.
    Fire,
}

/// Decrement the timer; fire once it reaches zero.
pub fn countdown(frames_remaining: i32) -> FireDecision {
    let next = frames_remaining - 1;
    if next <= 0 {
        FireDecision::Fire
    } else {
        FireDecision::Hold {
            frames_remaining: next,
        }
    }
}

/// Velocity of a shot from `from` toward `to` at `speed`.
/// Coincident points produce a motionless shot.
pub fn aim(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let dir = to - from;
    let len = dir.length();
    let len = if len > 0.0 { len } else { 1.0 };
    dir / len * speed
}

/// Projectile box centered on the shooter.
pub fn muzzle(shooter: &Aabb) -> Aabb {
    Aabb {
        pos: shooter.center() - PROJECTILE_SIZE * 0.5,
        size: PROJECTILE_SIZE,
    }
}

/// A downward-moving player whose feet intrude less than half the
/// enemy's height counts as landing on it.
pub fn is_stomp(player: &Aabb, player_velocity_y: f32, enemy: &Aabb) -> bool {
    player.overlaps(enemy)
        && player_velocity_y > 0.0
        && player.bottom() - enemy.top() < enemy.size.y * 0.5
}

/// What a stomp did to the enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StompOutcome {
    Killed,
    Wounded { health_remaining: i32 },
}

/// Apply one stomp to an enemy of `kind` holding `health` points.
pub fn resolve_stomp(kind: EnemyKind, health: i32) -> StompOutcome {
    if !get_profile(kind).has_health_pool {
        return StompOutcome::Killed;
    }
    let remaining = health - 1;
    if remaining <= 0 {
        StompOutcome::Killed
    } else {
        StompOutcome::Wounded {
            health_remaining: remaining,
        }
    }
}
