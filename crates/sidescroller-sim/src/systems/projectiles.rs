//! Projectile lifecycle: move, expire out of bounds, hit the player.
//!
//! Shots are processed newest first. Every shot touching the player's
//! box is consumed and costs a life. Putting the player back at the
//! spawn point is the engine's job: any hit restarts the level.

use hecs::World;
use tracing::debug;

use sidescroller_core::components::{Projectile, Velocity};
use sidescroller_core::constants::*;
use sidescroller_core::events::GameEvent;
use sidescroller_core::types::Aabb;

use crate::queries;

/// Run the projectile system. Returns the number of player hits.
pub fn run(
    world: &mut World,
    health: &mut u8,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<hecs::Entity>,
) -> usize {
    despawn_buffer.clear();

    let Some(player_box) = queries::player_body(world) else {
        return 0;
    };
    let mut hits = 0;

    {
        let mut rows: Vec<(hecs::Entity, (&Projectile, &mut Aabb, &Velocity))> = world
            .query_mut::<(&Projectile, &mut Aabb, &Velocity)>()
            .into_iter()
            .collect();
        rows.sort_by(|(_, (a, ..)), (_, (b, ..))| b.seq.cmp(&a.seq));

        for (entity, (_projectile, body, velocity)) in rows {
            body.pos += velocity.0;

            if out_of_bounds(body) {
                despawn_buffer.push(entity);
                continue;
            }

            if body.overlaps(&player_box) {
                despawn_buffer.push(entity);
                *health = damaged(*health);
                hits += 1;
                debug!(health = *health, "player hit");
                events.push(GameEvent::PlayerHit { health: *health });
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    hits
}

/// Health after one hit. Losing the last life refills to full.
pub fn damaged(health: u8) -> u8 {
    if health > 1 {
        health - 1
    } else {
        MAX_HEALTH
    }
}

/// Beyond the world rectangle by more than the margin on any side.
pub fn out_of_bounds(body: &Aabb) -> bool {
    body.pos.x < -PROJECTILE_OOB_MARGIN
        || body.pos.x > WORLD_WIDTH + PROJECTILE_OOB_MARGIN
        || body.pos.y < -PROJECTILE_OOB_MARGIN
        || body.pos.y > WORLD_HEIGHT + PROJECTILE_OOB_MARGIN
}
