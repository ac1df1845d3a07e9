pub mod animator;
pub mod app;
pub mod camera;
pub mod constants;
pub mod geometry;
pub mod gradient;
pub mod params;
pub mod particles;
pub mod scene;
pub mod scroll;
pub mod state;

pub use app::*;
pub use params::*;
pub use state::*;

// Shaders bundled as string constants
pub static TOON_WGSL: &str = include_str!("../../shaders/toon.wgsl");
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
