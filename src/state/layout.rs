//! Winding-trail layout of a path's nodes in world space.
//!
//! Positions are a pure function of the sorted node list and the constants
//! below; the same nodes always land in the same place.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use super::geometry::{Size, Vec2};
use crate::model::LessonNode;

pub const STEP_X: f64 = 220.0;
pub const AMPLITUDE: f64 = 120.0;
pub const DAMPENING: f64 = 1.4;
pub const VERTICAL_JITTER: f64 = 40.0;
/// Radius of a node circle; a node's anchor is its position plus this in both axes.
pub const NODE_RADIUS: f64 = 36.0;
/// Extra room added around the node extents (labels, buttons, rings).
pub const WORLD_PADDING: f64 = 320.0;
pub const EMPTY_WORLD: Size = Size::new(800.0, 400.0);

#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
    pub node: LessonNode,
    /// Top-left of the node's bounding square in world space.
    pub pos: Vec2,
}

impl PositionedNode {
    /// Visual centre of the node circle.
    pub fn anchor(&self) -> Vec2 {
        self.pos + Vec2::new(NODE_RADIUS, NODE_RADIUS)
    }
}

/// World-space rectangle that frames the whole trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub origin: Vec2,
    pub size: Size,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            size: EMPTY_WORLD,
        }
    }
}

pub fn trail_position(i: usize) -> Vec2 {
    let t = i as f64;
    let jitter = if i % 2 == 0 { 0.0 } else { VERTICAL_JITTER };
    Vec2::new(t * STEP_X, (t / DAMPENING).sin() * AMPLITUDE + jitter)
}

/// Sorts by `order` and places every node along the trail.
pub fn layout_nodes(nodes: &[LessonNode]) -> Vec<PositionedNode> {
    let mut ordered: Vec<&LessonNode> = nodes.iter().collect();
    ordered.sort_by_key(|n| n.order);
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, n)| PositionedNode {
            node: n.clone(),
            pos: trail_position(i),
        })
        .collect()
}

pub fn world_bounds(nodes: &[PositionedNode]) -> WorldBounds {
    let Some(first) = nodes.first() else {
        return WorldBounds::default();
    };
    let (mut min, mut max) = (first.pos, first.pos);
    for n in &nodes[1..] {
        min.x = min.x.min(n.pos.x);
        min.y = min.y.min(n.pos.y);
        max.x = max.x.max(n.pos.x);
        max.y = max.y.max(n.pos.y);
    }
    // Node centres end up in the middle of the padded box.
    let inset = WORLD_PADDING / 2.0 - NODE_RADIUS;
    WorldBounds {
        origin: min - Vec2::new(inset, inset),
        size: Size::new(max.x - min.x + WORLD_PADDING, max.y - min.y + WORLD_PADDING),
    }
}

/// SVG path data for the curved link between two consecutive nodes.
pub fn connector_path(prev: &PositionedNode, next: &PositionedNode) -> String {
    let s = prev.anchor();
    let e = next.anchor();
    let dx = (e.x - s.x) * 0.5;
    format!(
        "M {} {} C {} {}, {} {}, {} {}",
        s.x,
        s.y,
        s.x + dx,
        s.y,
        e.x - dx,
        e.y,
        e.x,
        e.y
    )
}
