//! Stomp resolution: the player landing on enemies.
//!
//! Enemies are checked in slot order against the player's live vertical
//! velocity. The first stomp bounces the player upward, so later enemies
//! in the same frame no longer see a falling player.

use hecs::World;
use tracing::debug;

use sidescroller_core::components::{Enemy, Velocity};
use sidescroller_core::constants::{JUMP_VELOCITY, STOMP_BOUNCE_FACTOR};
use sidescroller_core::enums::{EnemyKind, EnemyState};
use sidescroller_core::events::GameEvent;
use sidescroller_core::types::Aabb;

use sidescroller_enemy_ai::fsm::{is_stomp, resolve_stomp, StompOutcome};

use crate::queries;

/// Run the stomp system. Returns the number of stomps applied.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) -> usize {
    let Some((player_entity, player_box, player_velocity)) = queries::player(world) else {
        return 0;
    };
    let mut velocity_y = player_velocity.0.y;
    let mut stomps = 0;

    {
        let mut rows: Vec<(&mut Enemy, &Aabb)> = world
            .query_mut::<(&mut Enemy, &Aabb)>()
            .into_iter()
            .map(|(_, row)| row)
            .collect();
        rows.sort_by_key(|(enemy, _)| enemy.slot);

        for (enemy, body) in rows {
            if !enemy.is_alive() || !is_stomp(&player_box, velocity_y, body) {
                continue;
            }

            match resolve_stomp(enemy.kind, enemy.health) {
                StompOutcome::Killed => {
                    if enemy.kind == EnemyKind::Boss {
                        enemy.health = (enemy.health - 1).max(0);
                    }
                    enemy.state = EnemyState::Dead;
                    debug!(slot = enemy.slot, kind = enemy.kind.as_str(), "enemy stomped");
                    events.push(GameEvent::EnemyStomped {
                        slot: enemy.slot,
                        kind: enemy.kind,
                    });
                }
                StompOutcome::Wounded { health_remaining } => {
                    enemy.health = health_remaining;
                    debug!(slot = enemy.slot, health_remaining, "boss hit");
                    events.push(GameEvent::BossHit {
                        slot: enemy.slot,
                        health_remaining,
                    });
                }
            }

            velocity_y = JUMP_VELOCITY * STOMP_BOUNCE_FACTOR;
            stomps += 1;
        }
    }

    if stomps > 0 {
        if let Ok(mut velocity) = world.get::<&mut Velocity>(player_entity) {
            velocity.0.y = velocity_y;
        }
    }
    stomps
}
