//! Horizontal camera framing.

use sidescroller_core::constants::{CAMERA_LEAD_FRACTION, WORLD_HEIGHT, WORLD_WIDTH};
use sidescroller_core::render::Camera;
use sidescroller_core::types::{Aabb, Viewport};

/// Frame the player a quarter of the way into the view, clamped to the
/// world. A view wider than the world pins to the left edge.
pub fn compute(player: &Aabb, viewport: Viewport) -> Camera {
    let view_width = viewport.logical_width();
    let view_height = WORLD_HEIGHT;

    let lead = player.center().x - view_width * CAMERA_LEAD_FRACTION;
    let offset_x = lead.min(WORLD_WIDTH - view_width).max(0.0);

    let scale_x = if view_width > 0.0 {
        viewport.width / view_width
    } else {
        1.0
    };
    let scale_y = if viewport.height > 0.0 {
        viewport.height / view_height
    } else {
        1.0
    };

    Camera {
        offset_x,
        view_width,
        view_height,
        scale_x,
        scale_y,
    }
}
