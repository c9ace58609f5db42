//! Enemy behavior system: patrol and fire, once per frame.
//!
//! Calls the enemy FSM from sidescroller-enemy-ai for each living enemy,
//! writes the patrol result back, and spawns any shots fired.

use glam::Vec2;
use hecs::World;
use rand::Rng;

use sidescroller_core::components::{Enemy, FireTimer, Velocity};
use sidescroller_core::constants::PROJECTILE_SPEED;
use sidescroller_core::events::GameEvent;
use sidescroller_core::types::Aabb;

use sidescroller_enemy_ai::fsm::{aim, countdown, muzzle, patrol, FireDecision, PatrolContext};
use sidescroller_enemy_ai::profiles::next_cooldown;

use crate::queries;
use crate::world_setup;

/// Run enemy behavior. Returns the number of projectiles fired.
pub fn run<R: Rng>(
    world: &mut World,
    rng: &mut R,
    next_projectile_seq: &mut u64,
    events: &mut Vec<GameEvent>,
) -> usize {
    let platforms = queries::platform_boxes(world);
    let Some(player) = queries::player_body(world) else {
        return 0;
    };
    let target = player.center();

    // Shots are buffered: hecs cannot spawn while a query borrows the world.
    let mut shots: Vec<(usize, Aabb, Vec2)> = Vec::new();

    {
        let mut rows: Vec<(&Enemy, &mut Aabb, &mut Velocity, &mut FireTimer)> = world
            .query_mut::<(&Enemy, &mut Aabb, &mut Velocity, &mut FireTimer)>()
            .into_iter()
            .map(|(_, row)| row)
            .collect();
        rows.sort_by_key(|(enemy, ..)| enemy.slot);

        for (enemy, body, velocity, timer) in rows {
            if !enemy.is_alive() {
                continue;
            }

            let ctx = PatrolContext {
                body: *body,
                velocity_x: velocity.0.x,
                platforms: &platforms,
            };
            if let Some(update) = patrol(&ctx) {
                body.pos.x = update.x;
                velocity.0.x = update.velocity_x;
            }

            match countdown(timer.frames_remaining) {
                FireDecision::Hold { frames_remaining } => {
                    timer.frames_remaining = frames_remaining;
                }
                FireDecision::Fire => {
                    let shot_velocity = aim(body.center(), target, PROJECTILE_SPEED);
                    shots.push((enemy.slot, muzzle(body), shot_velocity));
                    timer.frames_remaining = next_cooldown(rng);
                }
            }
        }
    }

    let fired = shots.len();
    for (slot, body, velocity) in shots {
        world_setup::spawn_projectile(world, *next_projectile_seq, body, velocity);
        *next_projectile_seq += 1;
        events.push(GameEvent::ProjectileFired { slot });
    }
    fired
}
