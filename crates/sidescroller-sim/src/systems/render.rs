//! Render system: turns the world into an ordered draw list.
//!
//! Draw order: background, ground strips, platforms, enemies,
//! projectiles, flagpole and flag, player, then screen-space HUD.
//! Read-only over the world.

use hecs::World;

use sidescroller_core::components::*;
use sidescroller_core::constants::*;
use sidescroller_core::enums::EnemyKind;
use sidescroller_core::render::{Camera, DrawCommand, TextAlign};
use sidescroller_core::types::{Aabb, Color, Viewport};

use sidescroller_enemy_ai::profiles::get_profile;

const BOSS_FACE_COLOR: &str = "#fff";
const BOSS_MOUTH_COLOR: &str = "#f00";
const HEALTH_BAR_BACK_COLOR: &str = "#000";
const HEALTH_BAR_FILL_COLOR: &str = "#0f0";
const HUD_FONT_PX: f32 = 24.0;
const BANNER_FONT_PX: f32 = 48.0;

/// Scene-wide values that are not stored in the world.
pub struct RenderInputs<'a> {
    pub camera: Camera,
    pub viewport: Viewport,
    pub theme: &'a Color,
    pub health: u8,
    /// Draw the level-complete banner on top.
    pub complete: bool,
}

pub fn draw_frame(world: &World, inputs: &RenderInputs<'_>) -> Vec<DrawCommand> {
    let camera = inputs.camera;
    let mut draw = Vec::with_capacity(64);

    draw.push(DrawCommand::SetTransform {
        scale_x: camera.scale_x,
        scale_y: camera.scale_y,
    });
    draw.push(DrawCommand::Clear {
        width: WORLD_WIDTH,
        height: WORLD_HEIGHT,
    });

    draw.push(DrawCommand::PushCamera {
        offset_x: camera.offset_x,
    });
    draw.push(DrawCommand::rect(
        camera.offset_x,
        0.0,
        camera.view_width,
        WORLD_HEIGHT,
        inputs.theme.clone(),
    ));
    draw_ground(world, &mut draw);
    draw_platforms(world, &mut draw);
    draw_enemies(world, &mut draw);
    draw_projectiles(world, &mut draw);
    draw_flagpole(world, &mut draw);
    draw_player(world, &mut draw);
    draw.push(DrawCommand::PopCamera);

    draw.push(DrawCommand::Text {
        text: format!("Health: {}", inputs.health),
        x: 20.0,
        y: 40.0,
        size_px: HUD_FONT_PX,
        align: TextAlign::Left,
        color: Color::new(HUD_TEXT_COLOR),
    });

    if inputs.complete {
        draw.push(DrawCommand::ResetTransform);
        draw.push(DrawCommand::Text {
            text: "Level Complete!".to_owned(),
            x: inputs.viewport.width / 2.0,
            y: inputs.viewport.height / 2.0,
            size_px: BANNER_FONT_PX,
            align: TextAlign::Center,
            color: Color::new(HUD_TEXT_COLOR),
        });
    }

    draw
}

fn draw_ground(world: &World, draw: &mut Vec<DrawCommand>) {
    for (_, (_, ground)) in world.query::<(&Ground, &Aabb)>().iter() {
        let strip_width = ground.size.x / GROUND_STRIP_COUNT as f32;
        for i in 0..GROUND_STRIP_COUNT {
            draw.push(DrawCommand::rect(
                ground.pos.x + i as f32 * strip_width,
                ground.pos.y,
                strip_width,
                ground.size.y,
                GROUND_STRIP_COLORS[i % GROUND_STRIP_COLORS.len()],
            ));
        }
    }
}

fn draw_platforms(world: &World, draw: &mut Vec<DrawCommand>) {
    let mut platforms: Vec<(usize, Aabb, Color)> = world
        .query::<(&Platform, &Aabb, &Tint)>()
        .iter()
        .map(|(_, (platform, body, tint))| (platform.index, *body, tint.0.clone()))
        .collect();
    platforms.sort_by_key(|(index, ..)| *index);

    for (_, body, color) in platforms {
        draw.push(DrawCommand::rect(body.pos.x, body.pos.y, body.size.x, body.size.y, color));
    }
}

fn draw_enemies(world: &World, draw: &mut Vec<DrawCommand>) {
    let mut query = world.query::<(&Enemy, &Aabb)>();
    let mut enemies: Vec<(&Enemy, &Aabb)> = query
        .iter()
        .map(|(_, row)| row)
        .filter(|(enemy, _)| enemy.is_alive())
        .collect();
    enemies.sort_by_key(|(enemy, _)| enemy.slot);

    for (enemy, body) in enemies {
        match enemy.kind {
            EnemyKind::Mushroom => draw_mushroom(enemy, body, draw),
            EnemyKind::Boss => draw_boss(enemy, body, draw),
            EnemyKind::Basic => draw.push(DrawCommand::rect(
                body.pos.x,
                body.pos.y,
                body.size.x,
                body.size.y,
                enemy.palette.body.clone(),
            )),
        }
    }
}

/// Ellipse cap over a narrow stem, with three dots on the cap.
fn draw_mushroom(enemy: &Enemy, body: &Aabb, draw: &mut Vec<DrawCommand>) {
    let Aabb { pos, size } = *body;
    let cap_height = size.y * 0.6;
    let stem_height = size.y * 0.4;

    draw.push(DrawCommand::FillEllipse {
        cx: pos.x + size.x / 2.0,
        cy: pos.y + cap_height / 2.0,
        rx: size.x / 2.0,
        ry: cap_height / 2.0,
        color: enemy.palette.cap.clone(),
    });
    draw.push(DrawCommand::rect(
        pos.x + size.x * 0.25,
        pos.y + cap_height,
        size.x * 0.5,
        stem_height,
        enemy.palette.stem.clone(),
    ));
    for i in 0..3 {
        draw.push(DrawCommand::circle(
            pos.x + size.x * (0.3 + 0.2 * i as f32),
            pos.y + cap_height * 0.6,
            size.x * 0.09,
            enemy.palette.dot.clone(),
        ));
    }
}

/// Block body with a face and a health bar above it.
fn draw_boss(enemy: &Enemy, body: &Aabb, draw: &mut Vec<DrawCommand>) {
    let Aabb { pos, size } = *body;

    draw.push(DrawCommand::rect(pos.x, pos.y, size.x, size.y, enemy.palette.body.clone()));
    draw.push(DrawCommand::rect(
        pos.x + size.x * 0.25,
        pos.y + size.y * 0.3,
        12.0,
        12.0,
        BOSS_FACE_COLOR,
    ));
    draw.push(DrawCommand::rect(
        pos.x + size.x * 0.65,
        pos.y + size.y * 0.3,
        12.0,
        12.0,
        BOSS_FACE_COLOR,
    ));
    draw.push(DrawCommand::rect(
        pos.x + size.x * 0.35,
        pos.y + size.y * 0.7,
        28.0,
        8.0,
        BOSS_MOUTH_COLOR,
    ));

    let bar_health = get_profile(enemy.kind).bar_health.max(1) as f32;
    draw.push(DrawCommand::rect(pos.x, pos.y - 16.0, size.x, 10.0, HEALTH_BAR_BACK_COLOR));
    draw.push(DrawCommand::rect(
        pos.x,
        pos.y - 16.0,
        size.x * enemy.health as f32 / bar_health,
        10.0,
        HEALTH_BAR_FILL_COLOR,
    ));
}

fn draw_projectiles(world: &World, draw: &mut Vec<DrawCommand>) {
    let mut projectiles: Vec<(u64, Aabb, Color)> = world
        .query::<(&Projectile, &Aabb, &Tint)>()
        .iter()
        .map(|(_, (projectile, body, tint))| (projectile.seq, *body, tint.0.clone()))
        .collect();
    projectiles.sort_by_key(|(seq, ..)| *seq);

    for (_, body, color) in projectiles {
        let center = body.center();
        draw.push(DrawCommand::circle(center.x, center.y, body.size.x / 2.0, color));
    }
}

fn draw_flagpole(world: &World, draw: &mut Vec<DrawCommand>) {
    for (_, (_, pole, tint)) in world.query::<(&Flagpole, &Aabb, &Tint)>().iter() {
        draw.push(DrawCommand::rect(
            pole.pos.x,
            pole.pos.y,
            pole.size.x,
            pole.size.y,
            tint.0.clone(),
        ));
        let x = pole.right();
        draw.push(DrawCommand::FillPolygon {
            points: vec![
                [x, pole.pos.y + 20.0],
                [x + 40.0, pole.pos.y + 30.0],
                [x, pole.pos.y + 40.0],
            ],
            color: Color::new(FLAG_COLOR),
        });
    }
}

fn draw_player(world: &World, draw: &mut Vec<DrawCommand>) {
    for (_, (_, body, tint)) in world.query::<(&Player, &Aabb, &Tint)>().iter() {
        draw.push(DrawCommand::rect(
            body.pos.x,
            body.pos.y,
            body.size.x,
            body.size.y,
            tint.0.clone(),
        ));
    }
}
