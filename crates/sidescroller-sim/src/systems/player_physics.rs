//! Player movement: input, gravity, one-sided landings and jumping.
//!
//! Contact checks run against the position *before* the vertical
//! integration of this frame, using `velocity.y` as a one-frame lookahead.
//! Very fast falls can still pass through a 20-unit platform.

use glam::Vec2;
use hecs::World;

use sidescroller_core::components::{Player, PlayerMotion, Velocity};
use sidescroller_core::constants::*;
use sidescroller_core::input::InputState;
use sidescroller_core::types::Aabb;

use crate::queries;

/// Run one physics step for the player.
pub fn run(world: &mut World, input: &InputState) {
    let ground = queries::ground_box(world);
    let platforms = queries::platform_boxes(world);

    for (_entity, (_player, body, velocity, motion)) in
        world.query_mut::<(&Player, &mut Aabb, &mut Velocity, &mut PlayerMotion)>()
    {
        step(body, &mut velocity.0, motion, input, ground.as_ref(), &platforms);
    }
}

/// Advance a player body by one frame.
pub fn step(
    body: &mut Aabb,
    velocity: &mut Vec2,
    motion: &mut PlayerMotion,
    input: &InputState,
    ground: Option<&Aabb>,
    platforms: &[Aabb],
) {
    // Right wins when both are held.
    velocity.x = 0.0;
    if input.left {
        velocity.x = -PLAYER_SPEED;
    }
    if input.right {
        velocity.x = PLAYER_SPEED;
    }

    velocity.y += GRAVITY;

    body.pos.x += velocity.x;
    if body.pos.x < 0.0 {
        body.pos.x = 0.0;
    }
    if body.right() > WORLD_WIDTH {
        body.pos.x = WORLD_WIDTH - body.size.x;
    }

    motion.on_ground = false;

    if let Some(ground) = ground {
        if body.bottom() >= ground.top() && body.overlaps_horizontally(ground) {
            land(body, velocity, motion, ground.top());
        }
    }

    for platform in platforms {
        if body.overlaps_horizontally(platform)
            && body.bottom() <= platform.top() + PLATFORM_LANDING_TOLERANCE
            && body.bottom() + velocity.y >= platform.top()
        {
            land(body, velocity, motion, platform.top());
        }
    }

    if input.jump && motion.on_ground && motion.can_jump {
        velocity.y = JUMP_VELOCITY;
        motion.can_jump = false;
    }
    if !input.jump && motion.on_ground {
        motion.can_jump = true;
    }

    body.pos.y += velocity.y;
}

fn land(body: &mut Aabb, velocity: &mut Vec2, motion: &mut PlayerMotion, surface_top: f32) {
    body.pos.y = surface_top - body.size.y;
    velocity.y = 0.0;
    motion.on_ground = true;
    motion.can_jump = true;
}
