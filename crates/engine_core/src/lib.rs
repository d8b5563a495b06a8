//! Core engine types and utilities for Wiresnake.
//!
//! This crate provides the foundational types used across all engine systems:
//! - Transform for placing local geometry in world space
//! - Time management for the frame loop

pub mod time;
pub mod transform;

pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{IVec2, Quat, Vec2, Vec3};
