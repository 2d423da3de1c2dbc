pub mod app;
pub mod camera_controls;
pub mod details_sheet;
pub mod hero;
pub mod how_it_works;
pub mod interactive_map;
pub mod legend;
pub mod legend_panel;
pub mod load_status;
pub mod minimap;
pub mod path_list;
pub mod trail_node;

pub use app::App;
