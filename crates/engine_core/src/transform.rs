//! Transform component and utilities for spatial positioning.

use glam::{Quat, Vec3};

/// A 3D transform representing position, rotation, and scale.
///
/// Points are mapped local → world as `position + rotation * (scale * local)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a transform at `position` with a uniform scale.
    pub fn from_position_scale(position: Vec3, scale: f32) -> Self {
        Self {
            position,
            scale: Vec3::splat(scale),
            ..Default::default()
        }
    }

    /// Map a point from local space into world space.
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.position + self.rotation * (self.scale * local)
    }

    /// Replace the rotation with a yaw of `angle` radians about the vertical axis.
    pub fn set_yaw(&mut self, angle: f32) {
        self.rotation = Quat::from_rotation_y(angle);
    }
}
