//! Draw-list output model.
//!
//! The simulation never touches a real canvas. Each frame it emits an
//! ordered list of `DrawCommand`s that a host replays on a 2D raster
//! surface (canvas, texture, terminal...). World-space commands sit
//! between `PushCamera` and `PopCamera`.

use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum DrawCommand {
    /// Scale logical units to physical pixels (independent axes).
    SetTransform { scale_x: f32, scale_y: f32 },
    /// Back to identity (physical pixels).
    ResetTransform,
    /// Clear a logical-space rectangle anchored at the origin.
    Clear { width: f32, height: f32 },
    /// Save state and translate by `-offset_x`.
    PushCamera { offset_x: f32 },
    /// Restore the state saved by the matching `PushCamera`.
    PopCamera,
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    FillEllipse {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
        color: Color,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        r: f32,
        color: Color,
    },
    /// Closed, filled polygon.
    FillPolygon { points: Vec<[f32; 2]>, color: Color },
    Text {
        text: String,
        x: f32,
        y: f32,
        size_px: f32,
        align: TextAlign,
        color: Color,
    },
}

impl DrawCommand {
    pub fn rect(x: f32, y: f32, w: f32, h: f32, color: impl Into<Color>) -> Self {
        DrawCommand::FillRect {
            x,
            y,
            w,
            h,
            color: color.into(),
        }
    }

    pub fn circle(cx: f32, cy: f32, r: f32, color: impl Into<Color>) -> Self {
        DrawCommand::FillCircle {
            cx,
            cy,
            r,
            color: color.into(),
        }
    }
}

/// Horizontal framing for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Left edge of the view in world units. Vertical offset is always 0.
    pub offset_x: f32,
    /// Logical view size.
    pub view_width: f32,
    pub view_height: f32,
    /// Logical-to-physical scale factors.
    pub scale_x: f32,
    pub scale_y: f32,
}
