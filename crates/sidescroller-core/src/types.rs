//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{TICK_RATE, WORLD_HEIGHT};

/// Axis-aligned bounding box in logical world units.
/// Origin is the top-left corner; y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict overlap of the horizontal extents.
    pub fn overlaps_horizontally(&self, other: &Aabb) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }

    /// Strict overlap on both axes. Touching edges do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_horizontally(other)
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }
}

/// Physical size of the display surface, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: WORLD_HEIGHT,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Logical viewport width: the physical aspect ratio applied to the
    /// fixed logical height. A degenerate surface maps 1:1.
    pub fn logical_width(&self) -> f32 {
        if self.height > 0.0 && self.width > 0.0 {
            self.width * (WORLD_HEIGHT / self.height)
        } else {
            self.width.max(0.0)
        }
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames simulated since the last rebuild.
    pub tick: u64,
    /// Elapsed time in seconds at the nominal frame rate.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the nominal refresh rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// CSS-style color string, passed through to the host canvas untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
