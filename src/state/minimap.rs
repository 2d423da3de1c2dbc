//! Overview projection: world bounds squeezed into a fixed-width box, plus
//! the camera's visible region drawn in the same space.

#[cfg(test)]
#[path = "minimap_test.rs"]
mod minimap_test;

use super::camera::Camera;
use super::geometry::{Size, Vec2};
use super::layout::{PositionedNode, WorldBounds};

pub const MINIMAP_WIDTH: f64 = 160.0;
pub const MINIMAP_MIN_HEIGHT: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapProjection {
    pub size: Size,
    pub scale: f64,
    origin: Vec2,
}

impl MinimapProjection {
    pub fn new(bounds: &WorldBounds) -> Self {
        let w = bounds.size.width;
        let usable = w.is_finite() && w > 0.0;
        // No width to divide by: draw at 1:1.
        let scale = if usable { MINIMAP_WIDTH / w } else { 1.0 };
        let height = if usable {
            (bounds.size.height / w * MINIMAP_WIDTH).round()
        } else {
            0.0
        };
        Self {
            size: Size::new(MINIMAP_WIDTH, height.max(MINIMAP_MIN_HEIGHT)),
            scale,
            origin: bounds.origin,
        }
    }

    pub fn project(&self, world: Vec2) -> Vec2 {
        (world - self.origin) * self.scale
    }

    /// Dot position for a node's anchor.
    pub fn node_dot(&self, node: &PositionedNode) -> Vec2 {
        self.project(node.anchor())
    }

    /// The part of the world currently on screen, in minimap space. The
    /// rectangle's origin never goes negative.
    pub fn visible_region(&self, camera: &Camera, viewport: Size) -> Rect {
        let zoom = camera.zoom();
        let top_left = self.project(-camera.offset / zoom);
        Rect {
            x: top_left.x.max(0.0),
            y: top_left.y.max(0.0),
            width: viewport.width / zoom * self.scale,
            height: viewport.height / zoom * self.scale,
        }
    }
}

pub fn zoom_label(zoom: f64) -> String {
    format!("{}%", (zoom * 100.0).round())
}
