//! Read-only lookups shared by several systems.

use hecs::{Entity, World};

use sidescroller_core::components::{Flagpole, Ground, Platform, Player, Velocity};
use sidescroller_core::types::Aabb;

/// Platform boxes in authoring order.
pub fn platform_boxes(world: &World) -> Vec<Aabb> {
    let mut platforms: Vec<(usize, Aabb)> = world
        .query::<(&Platform, &Aabb)>()
        .iter()
        .map(|(_, (platform, body))| (platform.index, *body))
        .collect();
    platforms.sort_by_key(|(index, _)| *index);
    platforms.into_iter().map(|(_, body)| body).collect()
}

pub fn ground_box(world: &World) -> Option<Aabb> {
    world
        .query::<(&Ground, &Aabb)>()
        .iter()
        .next()
        .map(|(_, (_, body))| *body)
}

pub fn flagpole_box(world: &World) -> Option<Aabb> {
    world
        .query::<(&Flagpole, &Aabb)>()
        .iter()
        .next()
        .map(|(_, (_, body))| *body)
}

pub fn player_body(world: &World) -> Option<Aabb> {
    player(world).map(|(_, body, _)| body)
}

/// The player entity with its box and velocity.
pub fn player(world: &World) -> Option<(Entity, Aabb, Velocity)> {
    world
        .query::<(&Player, &Aabb, &Velocity)>()
        .iter()
        .next()
        .map(|(entity, (_, body, velocity))| (entity, *body, *velocity))
}
