//! Entity spawn factories for building a level.
//!
//! A level is always built into an empty world: static geometry
//! (platforms, ground, flagpole), the player from the descriptor, and
//! the level's enemies snapped onto the platforms beneath them.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use sidescroller_core::components::*;
use sidescroller_core::constants::*;
use sidescroller_core::enums::EnemyState;
use sidescroller_core::level::{snap_to_platform, EnemyBlueprint, LevelDescriptor, PlayerRecord};
use sidescroller_core::types::{Aabb, Color};

use sidescroller_enemy_ai::profiles::initial_cooldown;

/// Per-level values the engine keeps outside the world.
#[derive(Debug, Clone)]
pub struct LevelSetup {
    pub name: String,
    pub theme: Color,
    pub enemy_count: usize,
}

/// Clear the world and populate it for `level_index` of `descriptor`.
/// A missing level yields an enemy-free world with the default theme.
pub fn setup_level<R: Rng>(
    world: &mut World,
    rng: &mut R,
    descriptor: &LevelDescriptor,
    level_index: usize,
) -> LevelSetup {
    world.clear();

    let platforms = platform_layout();
    for (index, body) in platforms.iter().enumerate() {
        world.spawn((Platform { index }, *body, Tint(Color::new(PLATFORM_COLOR))));
    }
    world.spawn((Ground, ground_box(), Tint(Color::new(GROUND_COLOR))));
    world.spawn((Flagpole, flagpole_box(), Tint(Color::new(FLAGPOLE_COLOR))));
    spawn_player(world, &descriptor.player);

    let level = descriptor.level(level_index);
    let enemies = level.map(|l| l.enemies.as_slice()).unwrap_or_default();
    for (slot, record) in enemies.iter().enumerate() {
        spawn_enemy(world, rng, slot, record.blueprint(), &platforms);
    }

    LevelSetup {
        name: level.map(|l| l.name.clone()).unwrap_or_default(),
        theme: level
            .map(|l| l.theme())
            .unwrap_or_else(|| Color::new(DEFAULT_THEME_COLOR)),
        enemy_count: enemies.len(),
    }
}

/// The fixed platform set, in authoring order.
pub fn platform_layout() -> Vec<Aabb> {
    PLATFORM_LAYOUT
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let width = if i == WIDE_PLATFORM_INDEX {
                WIDE_PLATFORM_WIDTH
            } else {
                PLATFORM_SIZE.x
            };
            Aabb::new(x, y, width, PLATFORM_SIZE.y)
        })
        .collect()
}

pub fn ground_box() -> Aabb {
    Aabb::new(0.0, GROUND_TOP, WORLD_WIDTH, GROUND_HEIGHT)
}

pub fn flagpole_box() -> Aabb {
    Aabb::new(
        WORLD_WIDTH - FLAGPOLE_INSET,
        GROUND_TOP - FLAGPOLE_HEIGHT,
        FLAGPOLE_WIDTH,
        FLAGPOLE_HEIGHT,
    )
}

pub fn spawn_player(world: &mut World, record: &PlayerRecord) -> Entity {
    world.spawn((
        Player,
        record.body(),
        Velocity(record.velocity.into()),
        PlayerMotion::default(),
        Tint(record.color()),
    ))
}

/// Spawn one enemy with a random first-shot delay.
pub fn spawn_enemy<R: Rng>(
    world: &mut World,
    rng: &mut R,
    slot: usize,
    blueprint: EnemyBlueprint,
    platforms: &[Aabb],
) -> Entity {
    let body = snap_to_platform(blueprint.body, platforms);
    let state = if blueprint.alive {
        EnemyState::Alive
    } else {
        EnemyState::Dead
    };

    world.spawn((
        Enemy {
            slot,
            kind: blueprint.kind,
            state,
            health: blueprint.health,
            palette: EnemyPalette {
                body: blueprint.color,
                cap: blueprint.cap_color,
                stem: blueprint.stem_color,
                dot: blueprint.dot_color,
            },
        },
        body,
        Velocity(Vec2::new(blueprint.velocity_x, 0.0)),
        FireTimer {
            frames_remaining: initial_cooldown(rng),
        },
    ))
}

pub fn spawn_projectile(
    world: &mut World,
    seq: u64,
    body: Aabb,
    velocity: Vec2,
) -> Entity {
    world.spawn((
        Projectile { seq },
        body,
        Velocity(velocity),
        Tint(Color::new(PROJECTILE_COLOR)),
    ))
}
