//! Simulation constants and tuning parameters.
//!
//! All distances are logical world units, all rates are per frame.

use glam::Vec2;

/// Nominal display refresh rate (Hz). One simulation tick per refresh.
pub const TICK_RATE: u32 = 60;

// --- World bounds ---

/// Logical world width (five screens of 960).
pub const WORLD_WIDTH: f32 = 960.0 * 5.0;

/// Logical world height. Equal to the logical viewport height.
pub const WORLD_HEIGHT: f32 = 540.0;

/// Ground strip thickness at the bottom of the world.
pub const GROUND_HEIGHT: f32 = 40.0;

/// Y of the ground's top edge.
pub const GROUND_TOP: f32 = WORLD_HEIGHT - GROUND_HEIGHT;

// --- Entity sizes ---

pub const PLAYER_SIZE: Vec2 = Vec2::new(40.0, 80.0);
pub const ENEMY_SIZE: Vec2 = Vec2::new(40.0, 40.0);
pub const PLATFORM_SIZE: Vec2 = Vec2::new(160.0, 20.0);
pub const PROJECTILE_SIZE: Vec2 = Vec2::new(16.0, 16.0);

/// Platform top-left corners, in authoring order.
pub const PLATFORM_LAYOUT: [(f32, f32); 4] = [
    (240.0, 340.0),
    (560.0, 260.0),
    (880.0, 340.0),
    (1200.0, 180.0),
];

/// Index into `PLATFORM_LAYOUT` of the long ledge.
pub const WIDE_PLATFORM_INDEX: usize = 3;

/// Width of the long ledge.
pub const WIDE_PLATFORM_WIDTH: f32 = 400.0;

pub const FLAGPOLE_WIDTH: f32 = 20.0;
pub const FLAGPOLE_HEIGHT: f32 = 200.0;

/// Distance of the flagpole's left edge from the world's right edge.
pub const FLAGPOLE_INSET: f32 = 80.0;

// --- Player physics ---

/// Horizontal speed while a direction key is held.
pub const PLAYER_SPEED: f32 = 4.0;

/// Downward acceleration applied every frame.
pub const GRAVITY: f32 = 0.6;

/// Vertical velocity set by a jump.
pub const JUMP_VELOCITY: f32 = -12.0;

/// Fraction of the jump impulse applied after a stomp.
pub const STOMP_BOUNCE_FACTOR: f32 = 0.7;

/// How far above a platform's top the player's feet may be and still land.
pub const PLATFORM_LANDING_TOLERANCE: f32 = 10.0;

/// Respawn point after a projectile hit.
pub const SPAWN_X: f32 = 60.0;
pub const SPAWN_Y: f32 = GROUND_TOP - PLAYER_SIZE.y;

/// Player lives. Depletion wraps back to this value.
pub const MAX_HEALTH: u8 = 3;

// --- Enemies ---

/// Default patrol speed when a record specifies none.
pub const DEFAULT_ENEMY_SPEED: f32 = 1.2;

/// Boss hit points when a record specifies none.
pub const BOSS_DEFAULT_HEALTH: i32 = 20;

/// Vertical distance within which an enemy counts as resting on a platform.
pub const ENEMY_REST_TOLERANCE: f32 = 2.0;

// --- Projectiles ---

pub const PROJECTILE_SPEED: f32 = 6.0;

/// Base frames between shots.
pub const PROJECTILE_COOLDOWN: i32 = 120;

/// Upper bound (exclusive) of the random frames added after each shot.
pub const COOLDOWN_JITTER: i32 = 60;

/// Distance beyond the world edge at which a projectile expires.
pub const PROJECTILE_OOB_MARGIN: f32 = 32.0;

// --- Camera ---

/// Player center sits this fraction of the view width from the left edge.
pub const CAMERA_LEAD_FRACTION: f32 = 0.25;

// --- Palette ---

pub const DEFAULT_THEME_COLOR: &str = "#22283a";
pub const DEFAULT_PLAYER_COLOR: &str = "#3498db";
pub const PLATFORM_COLOR: &str = "#a67c52";
pub const GROUND_COLOR: &str = "#3cb371";
pub const GROUND_STRIP_COLORS: [&str; 5] = ["#3cb371", "#2e8b57", "#43a047", "#388e3c", "#66bb6a"];
pub const GROUND_STRIP_COUNT: usize = 10;
pub const FLAGPOLE_COLOR: &str = "#fff";
pub const FLAG_COLOR: &str = "#ff0";
pub const PROJECTILE_COLOR: &str = "#fff";
pub const DEFAULT_ENEMY_COLOR: &str = "#e74c3c";
pub const BOSS_COLOR: &str = "#222";
pub const MUSHROOM_CAP_COLOR: &str = "#d22";
pub const MUSHROOM_STEM_COLOR: &str = "#fbe7b2";
pub const MUSHROOM_DOT_COLOR: &str = "#fff";
pub const HUD_TEXT_COLOR: &str = "#fff";
