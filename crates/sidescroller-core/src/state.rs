//! Frame snapshot: the complete visible state handed to the host each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, EnemyState, SessionPhase};
use crate::events::GameEvent;
use crate::render::{Camera, DrawCommand};
use crate::types::SimTime;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: SessionPhase,
    pub level_index: usize,
    pub level_name: String,
    /// Player lives, 1..=3.
    pub health: u8,
    pub camera: Camera,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<GameEvent>,
    /// Ordered draw list for this frame.
    pub draw: Vec<DrawCommand>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub on_ground: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub slot: usize,
    pub kind: EnemyKind,
    pub state: EnemyState,
    pub pos: Vec2,
    pub velocity_x: f32,
    pub health: i32,
    /// Frames until the next shot.
    pub fire_in: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub pos: Vec2,
    pub velocity: Vec2,
}
