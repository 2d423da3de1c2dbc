// Camera state for the map viewport: a uniform scale followed by a
// translation, screen = offset + world * zoom.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use super::geometry::{Size, Vec2};
use super::layout::WorldBounds;
use std::rc::Rc;
use yew::Reducible;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2.5;
pub const WHEEL_ZOOM_STEP: f64 = 0.1;
pub const BUTTON_ZOOM_STEP: f64 = 0.2;
pub const FIT_PADDING: f64 = 120.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Drag {
    #[default]
    Idle,
    /// Pointer is held; `last` is the previous client position.
    Dragging { last: Vec2 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    zoom: f64,
    pub offset: Vec2,
    pub drag: Drag,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Vec2::ZERO,
            drag: Drag::Idle,
        }
    }
}

fn clamp_zoom(z: f64) -> f64 {
    z.clamp(MIN_ZOOM, MAX_ZOOM)
}

impl Camera {
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn zoom_by(&mut self, delta: f64) {
        self.zoom = clamp_zoom(self.zoom + delta);
    }

    /// Wheel down (positive `delta_y`) zooms out by one step, anything else zooms in.
    pub fn wheel(&mut self, delta_y: f64) {
        let step = if delta_y > 0.0 {
            -WHEEL_ZOOM_STEP
        } else {
            WHEEL_ZOOM_STEP
        };
        self.zoom_by(step);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset += Vec2::new(dx, dy);
    }

    /// Largest zoom (within limits) that fits `bounds` into `viewport` minus
    /// `padding`, with the bounds box centred.
    pub fn fit_to_view(&mut self, viewport: Size, bounds: &WorldBounds, padding: f64) {
        if !viewport.is_known() || !bounds.size.is_known() {
            return;
        }
        let sx = (viewport.width - padding) / bounds.size.width;
        let sy = (viewport.height - padding) / bounds.size.height;
        let zoom = clamp_zoom(sx.min(sy));
        self.zoom = zoom;
        self.offset = (viewport.to_vec2() - bounds.size.to_vec2() * zoom) / 2.0 - bounds.origin * zoom;
    }

    /// Keeps zoom, moves `anchor` (world space) to the viewport centre.
    pub fn center_on(&mut self, anchor: Vec2, viewport: Size) {
        if !viewport.is_known() {
            return;
        }
        self.offset = viewport.to_vec2() / 2.0 - anchor * self.zoom;
    }

    pub fn pointer_down(&mut self, at: Vec2) {
        self.drag = Drag::Dragging { last: at };
    }

    /// Returns whether the move panned the view.
    pub fn pointer_move(&mut self, at: Vec2) -> bool {
        let Drag::Dragging { last } = self.drag else {
            return false;
        };
        let d = at - last;
        self.pan_by(d.x, d.y);
        self.drag = Drag::Dragging { last: at };
        true
    }

    pub fn pointer_up(&mut self) {
        self.drag = Drag::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, Drag::Dragging { .. })
    }

    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.zoom
    }

    /// CSS transform for the world layer (expects `transform-origin: 0 0`).
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, self.zoom
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CameraAction {
    ZoomBy(f64),
    Wheel { delta_y: f64 },
    PanBy { dx: f64, dy: f64 },
    Fit { viewport: Size, bounds: WorldBounds },
    CenterOn { anchor: Vec2, viewport: Size },
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp,
}

impl Reducible for Camera {
    type Action = CameraAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use CameraAction::*;
        let mut new = (*self).clone();
        match action {
            ZoomBy(delta) => new.zoom_by(delta),
            Wheel { delta_y } => new.wheel(delta_y),
            PanBy { dx, dy } => new.pan_by(dx, dy),
            Fit { viewport, bounds } => new.fit_to_view(viewport, &bounds, FIT_PADDING),
            CenterOn { anchor, viewport } => new.center_on(anchor, viewport),
            PointerDown(at) => new.pointer_down(at),
            PointerMove(at) => {
                if !new.pointer_move(at) {
                    return self;
                }
            }
            PointerUp => {
                if !new.is_dragging() {
                    return self;
                }
                new.pointer_up();
            }
        }
        // Skip the re-render when nothing moved.
        if new == *self { self } else { Rc::new(new) }
    }
}
