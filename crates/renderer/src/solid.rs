//! Wireframe solids placed in world space.

use engine_core::Transform;
use glam::Vec3;

use crate::camera::PerspectiveCamera;
use crate::color::Color;
use crate::error::{RenderError, RenderResult};
use crate::mesh::{Edge, Shape};
use crate::surface::Surface;

/// A rigid wireframe primitive with cached world-space vertices.
///
/// World vertices are recomputed eagerly by every mutator, so readers never
/// see stale geometry.
#[derive(Debug, Clone)]
pub struct Solid {
    shape: Shape,
    size: f32,
    transform: Transform,
    /// Spin about the vertical axis, degrees in [0, 360).
    rotation_degrees: f32,
    /// Degrees per second.
    rotation_speed: f32,
    local_vertices: Vec<Vec3>,
    world_vertices: Vec<Vec3>,
}

impl Solid {
    /// Build a solid of `shape` centered at `center`.
    pub fn new(shape: Shape, center: Vec3, size: f32) -> RenderResult<Self> {
        if !(size.is_finite() && size > 0.0) {
            return Err(RenderError::InvalidSolidSize(size));
        }
        let local_vertices = shape.local_vertices();
        let mut solid = Self {
            shape,
            size,
            transform: Transform::from_position_scale(center, size / shape.size_divisor()),
            rotation_degrees: 0.0,
            rotation_speed: shape.default_rotation_speed(),
            world_vertices: Vec::with_capacity(local_vertices.len()),
            local_vertices,
        };
        solid.recompute();
        Ok(solid)
    }

    /// Wireframe cube with edge length `size`.
    pub fn cube(center: Vec3, size: f32) -> RenderResult<Self> {
        Self::new(Shape::Cube, center, size)
    }

    /// Low-poly sphere (icosahedron) of radius `size`, spinning at 10°/s.
    pub fn icosahedron(center: Vec3, size: f32) -> RenderResult<Self> {
        Self::new(Shape::Icosahedron, center, size)
    }

    /// Override the spin rate (degrees per second).
    pub fn with_rotation_speed(mut self, degrees_per_second: f32) -> Self {
        self.rotation_speed = degrees_per_second;
        self
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn world_vertices(&self) -> &[Vec3] {
        &self.world_vertices
    }

    pub fn edges(&self) -> &'static [Edge] {
        self.shape.edges()
    }

    /// Move the solid's center and rebuild world vertices.
    pub fn update_position(&mut self, center: Vec3) {
        self.transform.position = center;
        self.recompute();
    }

    /// Advance the spin by `rotation_speed * dt` degrees, wrapped into [0, 360).
    pub fn update(&mut self, dt: f32) {
        let angle = (self.rotation_degrees + self.rotation_speed * dt).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
        self.rotation_degrees = if angle >= 360.0 { 0.0 } else { angle };
        self.recompute();
    }

    fn recompute(&mut self) {
        self.transform.set_yaw(self.rotation_degrees.to_radians());
        let transform = self.transform;
        self.world_vertices.clear();
        self.world_vertices
            .extend(self.local_vertices.iter().map(|&v| transform.transform_point(v)));
    }

    /// Project every vertex once, then stroke each edge.
    ///
    /// `line_width` 1 draws anti-aliased lines; wider values draw solid lines.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        camera: &PerspectiveCamera,
        color: Color,
        line_width: u32,
    ) {
        let projected = camera.project_many(&self.world_vertices);
        for &(a, b) in self.edges() {
            let (from, to) = (projected[a], projected[b]);
            if line_width == 1 {
                surface.draw_aaline(from, to, color);
            } else {
                surface.draw_line(from, to, color, line_width);
            }
        }
    }
}
