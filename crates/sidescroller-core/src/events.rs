//! Events emitted by the simulation for host-side feedback.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An enemy was killed by a stomp.
    EnemyStomped { slot: usize, kind: EnemyKind },
    /// A boss took a stomp and survived.
    BossHit { slot: usize, health_remaining: i32 },
    /// An enemy fired at the player.
    ProjectileFired { slot: usize },
    /// A projectile hit the player, who respawned with `health` lives.
    PlayerHit { health: u8 },
    /// The player reached the flagpole.
    LevelComplete { level_index: usize },
}
