//! Level descriptor: the declarative document a level file deserializes into.
//!
//! Every field is optional on disk. Missing values are filled with the
//! documented defaults here, at load time, so the simulation never has
//! to guess at a read site.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::EnemyKind;
use crate::types::{Aabb, Color};

/// Errors that can occur when reading a level descriptor.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("descriptor parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// `{x, y}` pair as authored in level files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Root of a level file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelDescriptor {
    pub player: PlayerRecord,
    pub levels: Vec<LevelEntry>,
}

impl LevelDescriptor {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Name shown in a level picker: the first level's name, else `fallback`.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.levels
            .first()
            .map(|level| level.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback)
    }

    pub fn level(&self, index: usize) -> Option<&LevelEntry> {
        self.levels.get(index)
    }
}

/// Player spawn record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    pub pos: Point,
    pub size: Point,
    pub velocity: Point,
    pub color: Option<String>,
}

impl Default for PlayerRecord {
    fn default() -> Self {
        Self {
            pos: Point::new(SPAWN_X, SPAWN_Y),
            size: PLAYER_SIZE.into(),
            velocity: Point::default(),
            color: None,
        }
    }
}

impl PlayerRecord {
    pub fn body(&self) -> Aabb {
        Aabb {
            pos: self.pos.into(),
            size: self.size.into(),
        }
    }

    pub fn color(&self) -> Color {
        Color::new(self.color.as_deref().unwrap_or(DEFAULT_PLAYER_COLOR))
    }
}

/// One entry of the `levels` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LevelEntry {
    pub name: String,
    pub theme_color: Option<String>,
    pub enemies: Vec<EnemyRecord>,
}

impl LevelEntry {
    pub fn theme(&self) -> Color {
        Color::new(self.theme_color.as_deref().unwrap_or(DEFAULT_THEME_COLOR))
    }
}

/// An authored enemy. Optional fields resolve through `blueprint()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnemyRecord {
    pub pos: Point,
    pub size: Point,
    #[serde(rename = "type", alias = "kind")]
    pub kind: Option<String>,
    pub color: Option<String>,
    pub cap_color: Option<String>,
    pub stem_color: Option<String>,
    pub dot_color: Option<String>,
    pub speed: Option<f32>,
    pub alive: bool,
    pub velocity: Option<Point>,
    pub health: Option<i32>,
}

impl Default for EnemyRecord {
    fn default() -> Self {
        Self {
            pos: Point::default(),
            size: ENEMY_SIZE.into(),
            kind: None,
            color: None,
            cap_color: None,
            stem_color: None,
            dot_color: None,
            speed: None,
            alive: true,
            velocity: None,
            health: None,
        }
    }
}

/// A fully-resolved enemy, ready to spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyBlueprint {
    pub body: Aabb,
    pub kind: EnemyKind,
    pub alive: bool,
    pub speed: f32,
    pub velocity_x: f32,
    pub health: i32,
    pub color: Color,
    pub cap_color: Color,
    pub stem_color: Color,
    pub dot_color: Color,
}

impl EnemyRecord {
    pub fn blueprint(&self) -> EnemyBlueprint {
        let kind = self
            .kind
            .as_deref()
            .map(EnemyKind::parse)
            .unwrap_or_default();
        let speed = self.speed.unwrap_or(DEFAULT_ENEMY_SPEED);
        let velocity_x = self.velocity.map(|v| v.x).unwrap_or(speed);
        let default_color = match kind {
            EnemyKind::Boss => BOSS_COLOR,
            EnemyKind::Mushroom | EnemyKind::Basic => DEFAULT_ENEMY_COLOR,
        };
        let health = match kind {
            EnemyKind::Boss => self.health.unwrap_or(BOSS_DEFAULT_HEALTH),
            EnemyKind::Mushroom | EnemyKind::Basic => self.health.unwrap_or(1),
        };

        EnemyBlueprint {
            body: Aabb {
                pos: self.pos.into(),
                size: self.size.into(),
            },
            kind,
            alive: self.alive,
            speed,
            velocity_x,
            health,
            color: Color::new(self.color.as_deref().unwrap_or(default_color)),
            cap_color: Color::new(self.cap_color.as_deref().unwrap_or(MUSHROOM_CAP_COLOR)),
            stem_color: Color::new(self.stem_color.as_deref().unwrap_or(MUSHROOM_STEM_COLOR)),
            dot_color: Color::new(self.dot_color.as_deref().unwrap_or(MUSHROOM_DOT_COLOR)),
        }
    }
}

/// Rest the blueprint on the first platform whose span contains any of
/// its x-extent. Enemies over no platform keep their authored y.
pub fn snap_to_platform(body: Aabb, platforms: &[Aabb]) -> Aabb {
    match platforms.iter().find(|p| body.overlaps_horizontally(p)) {
        Some(platform) => Aabb {
            pos: Vec2::new(body.pos.x, platform.top() - body.size.y),
            size: body.size,
        },
        None => body,
    }
}
