//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems, and
//! `Aabb` (from `types`) doubles as the position/size component.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, EnemyState};
use crate::types::Color;

/// Per-frame velocity in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Fill color used when drawing the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tint(pub Color);

/// Marks the player entity. Exactly one exists per level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Ground contact state carried between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMotion {
    /// Resting on the ground or a platform this frame.
    pub on_ground: bool,
    /// Jump is armed; cleared by a jump, re-armed on contact or key release.
    pub can_jump: bool,
}

impl Default for PlayerMotion {
    fn default() -> Self {
        Self {
            on_ground: false,
            can_jump: true,
        }
    }
}

/// A one-sided ledge. `index` is the authoring order, used for
/// first-match lookups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub index: usize,
}

/// Marks the full-width ground strip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ground;

/// Marks the level exit trigger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Flagpole;

/// Colors used by the multi-part enemy visuals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyPalette {
    pub body: Color,
    pub cap: Color,
    pub stem: Color,
    pub dot: Color,
}

/// Enemy state. Dead enemies stay in the world so `slot` stays stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Position in the level's enemy list.
    pub slot: usize,
    pub kind: EnemyKind,
    pub state: EnemyState,
    /// Remaining hit points. Only consulted for bosses.
    pub health: i32,
    pub palette: EnemyPalette,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.state == EnemyState::Alive
    }
}

/// Frames until the owning enemy fires again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireTimer {
    pub frames_remaining: i32,
}

/// A shot in flight. `seq` increases with spawn order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub seq: u64,
}
