pub mod camera;
pub mod geometry;
pub mod layout;
pub mod minimap;
pub mod progress;

pub use camera::{Camera, CameraAction};
pub use geometry::{Size, Vec2};
pub use layout::{PositionedNode, WorldBounds, layout_nodes, world_bounds};
pub use minimap::MinimapProjection;
pub use progress::{
    NodeStatus, derive_statuses, next_actionable, status_of, summarize, toggle_label,
};
