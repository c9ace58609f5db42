//! Snapshot system: queries the ECS world and builds a FrameSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use sidescroller_core::components::*;
use sidescroller_core::events::GameEvent;
use sidescroller_core::render::{Camera, DrawCommand};
use sidescroller_core::state::*;
use sidescroller_core::types::Aabb;

use crate::engine::FrameContext;

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: &FrameContext<'_>,
    camera: Camera,
    events: Vec<GameEvent>,
    draw: Vec<DrawCommand>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        level_index: ctx.level_index,
        level_name: ctx.level_name.to_owned(),
        health: ctx.health,
        camera,
        player: build_player(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        events,
        draw,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Aabb, &Velocity, &PlayerMotion)>()
        .iter()
        .next()
        .map(|(_, (_, body, velocity, motion))| PlayerView {
            pos: body.pos,
            size: body.size,
            velocity: velocity.0,
            on_ground: motion.on_ground,
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Aabb, &Velocity, &FireTimer)>()
        .iter()
        .map(|(_, (enemy, body, velocity, timer))| EnemyView {
            slot: enemy.slot,
            kind: enemy.kind,
            state: enemy.state,
            pos: body.pos,
            velocity_x: velocity.0.x,
            health: enemy.health,
            fire_in: timer.frames_remaining,
        })
        .collect();
    enemies.sort_by_key(|e| e.slot);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<(u64, ProjectileView)> = world
        .query::<(&Projectile, &Aabb, &Velocity)>()
        .iter()
        .map(|(_, (projectile, body, velocity))| {
            (
                projectile.seq,
                ProjectileView {
                    pos: body.pos,
                    velocity: velocity.0,
                },
            )
        })
        .collect();
    projectiles.sort_by_key(|(seq, _)| *seq);
    projectiles.into_iter().map(|(_, view)| view).collect()
}
