//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for
//! read-only passes). They do not own state.

pub mod camera;
pub mod enemy_behavior;
pub mod goal;
pub mod player_physics;
pub mod projectiles;
pub mod render;
pub mod snapshot;
pub mod stomp;
