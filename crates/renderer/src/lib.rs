//! Software wireframe rendering for Wiresnake: one-point perspective,
//! wireframe solids, hue-cycling palette, and raster surfaces.

pub mod camera;
pub mod color;
pub mod error;
pub mod grid;
pub mod mesh;
pub mod solid;
pub mod surface;

pub use camera::*;
pub use color::*;
pub use error::*;
pub use grid::*;
pub use mesh::*;
pub use solid::*;
pub use surface::*;
