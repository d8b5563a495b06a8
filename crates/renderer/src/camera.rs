//! One-point perspective camera.
//!
//! Every projected point is pulled toward a single vanishing point by a factor
//! that shrinks with depth. There is no view matrix: world x/y are already in
//! screen pixels, and z only controls how far a point converges.

use glam::{Vec2, Vec3};

use crate::error::{RenderError, RenderResult};

/// Default perspective strength (lower = stronger convergence).
pub const DEFAULT_PERSPECTIVE_STRENGTH: f32 = 300.0;

/// Optional overrides for [`PerspectiveCamera::with_settings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Vanishing point in screen pixels. `None` = centered horizontally, 75% down.
    pub vanishing_point: Option<Vec2>,
    /// Perspective strength; must be positive.
    pub perspective_strength: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            vanishing_point: None,
            perspective_strength: DEFAULT_PERSPECTIVE_STRENGTH,
        }
    }
}

/// Immutable one-point perspective projector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    screen_width: u32,
    screen_height: u32,
    vanishing_point: Vec2,
    perspective_strength: f32,
}

impl PerspectiveCamera {
    /// Camera for a screen of the given size with default settings.
    pub fn new(screen_width: u32, screen_height: u32) -> RenderResult<Self> {
        Self::with_settings(screen_width, screen_height, CameraSettings::default())
    }

    /// Camera with an explicit vanishing point and/or perspective strength.
    pub fn with_settings(
        screen_width: u32,
        screen_height: u32,
        settings: CameraSettings,
    ) -> RenderResult<Self> {
        if screen_width == 0 || screen_height == 0 {
            return Err(RenderError::InvalidScreenSize {
                width: screen_width,
                height: screen_height,
            });
        }
        let strength = settings.perspective_strength;
        if !(strength.is_finite() && strength > 0.0) {
            return Err(RenderError::InvalidPerspectiveStrength(strength));
        }

        let vanishing_point = settings.vanishing_point.unwrap_or_else(|| {
            Vec2::new(screen_width as f32 / 2.0, screen_height as f32 * 0.75)
        });

        Ok(Self {
            screen_width,
            screen_height,
            vanishing_point,
            perspective_strength: strength,
        })
    }

    /// Project a world point to screen coordinates.
    ///
    /// Callers must keep geometry in front of the camera
    /// (`perspective_strength + z > 0`); z is never clamped.
    pub fn project(&self, point: Vec3) -> Vec2 {
        debug_assert!(
            self.is_in_front(point.z),
            "depth {} is behind the camera (strength {})",
            point.z,
            self.perspective_strength
        );
        let factor = self.perspective_strength / (self.perspective_strength + point.z);
        self.vanishing_point + (point.truncate() - self.vanishing_point) * factor
    }

    /// Project a batch of points, preserving order.
    pub fn project_many(&self, points: &[Vec3]) -> Vec<Vec2> {
        points.iter().map(|&p| self.project(p)).collect()
    }

    /// Whether a depth value keeps the projection denominator positive.
    pub fn is_in_front(&self, z: f32) -> bool {
        self.perspective_strength + z > 0.0
    }

    pub fn vanishing_point(&self) -> Vec2 {
        self.vanishing_point
    }

    pub fn perspective_strength(&self) -> f32 {
        self.perspective_strength
    }

    /// Screen size in pixels (width, height).
    pub fn screen_size(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }
}
