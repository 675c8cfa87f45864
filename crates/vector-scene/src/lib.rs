pub mod collection;
pub mod config;
pub mod display;
pub mod geometry;
pub mod parse;

pub use collection::{default_name, VectorCollection};
pub use config::SceneConfig;
pub use display::{display_line, format_component, latex_line};
pub use geometry::{build_scene, chain_tips, resultant};
pub use parse::{parse_coordinates, CoordinateError, DEFAULT_COORDINATE_INPUT};
