//! Dashed play-field grid drawn at depth behind the play plane.

use glam::{Vec2, Vec3};

use crate::camera::PerspectiveCamera;
use crate::color::Color;
use crate::surface::Surface;

/// Default grid depth; deeper grids show more perspective.
pub const DEFAULT_GRID_DEPTH: f32 = 100.0;

/// Dash pattern in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub dash: f32,
    pub gap: f32,
}

impl Default for DashPattern {
    fn default() -> Self {
        Self {
            dash: 5.0,
            gap: 5.0,
        }
    }
}

/// Grid of `columns × rows` cells lying in the plane `z = depth`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveGrid {
    pub columns: u32,
    pub rows: u32,
    pub cell_size: f32,
    pub depth: f32,
    pub dashes: DashPattern,
}

impl PerspectiveGrid {
    pub fn new(columns: u32, rows: u32, cell_size: f32) -> Self {
        Self {
            columns,
            rows,
            cell_size,
            depth: DEFAULT_GRID_DEPTH,
            dashes: DashPattern::default(),
        }
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// World-space grid lines: every vertical line first, then every horizontal line.
    pub fn lines(&self) -> Vec<(Vec3, Vec3)> {
        let width = self.columns as f32 * self.cell_size;
        let height = self.rows as f32 * self.cell_size;
        let z = self.depth;

        let verticals = (0..=self.columns).map(|col| {
            let x = col as f32 * self.cell_size;
            (Vec3::new(x, 0.0, z), Vec3::new(x, height, z))
        });
        let horizontals = (0..=self.rows).map(|row| {
            let y = row as f32 * self.cell_size;
            (Vec3::new(0.0, y, z), Vec3::new(width, y, z))
        });
        verticals.chain(horizontals).collect()
    }

    /// Project each grid line and draw it dashed.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        camera: &PerspectiveCamera,
        color: Color,
    ) {
        for (start, end) in self.lines() {
            let (a, b) = (camera.project(start), camera.project(end));
            draw_dashed_line(surface, a, b, color, self.dashes);
        }
    }
}

/// Draw 1-pixel dashes from `start` toward `end`. Zero-length segments draw nothing.
pub fn draw_dashed_line<S: Surface + ?Sized>(
    surface: &mut S,
    start: Vec2,
    end: Vec2,
    color: Color,
    pattern: DashPattern,
) {
    let span = end - start;
    let length = span.length();
    let period = pattern.dash + pattern.gap;
    if length == 0.0 || !length.is_finite() || period <= 0.0 {
        return;
    }
    let dir = span / length;

    let mut pos = 0.0;
    while pos < length {
        let dash_end = (pos + pattern.dash).min(length);
        let a = (start + dir * pos).trunc();
        let b = (start + dir * dash_end).trunc();
        surface.draw_line(a, b, color, 1);
        pos += period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, DrawList};

    #[test]
    fn grid_line_counts_and_order() {
        let grid = PerspectiveGrid::new(20, 15, 40.0);
        let lines = grid.lines();
        assert_eq!(lines.len(), 21 + 16);
        assert_eq!(lines[0], (Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.0, 600.0, 100.0)));
        assert_eq!(lines[20].0.x, 800.0);
        assert_eq!(lines[21], (Vec3::new(0.0, 0.0, 100.0), Vec3::new(800.0, 0.0, 100.0)));
        assert!(lines.iter().all(|(a, b)| a.z == 100.0 && b.z == 100.0));
    }

    #[test]
    fn dashes_cover_line_with_gaps() {
        let mut list = DrawList::new();
        let end = Vec2::new(23.0, 0.0);
        draw_dashed_line(&mut list, Vec2::ZERO, end, Color::WHITE, DashPattern::default());
        let dashes: Vec<_> = list.segments().map(|(a, b, _)| (a.x, b.x)).collect();
        assert_eq!(dashes, vec![(0.0, 5.0), (10.0, 15.0), (20.0, 23.0)]);
        assert!(list
            .commands()
            .iter()
            .all(|c| matches!(c, DrawCommand::Line { width: 1, .. })));
    }

    #[test]
    fn zero_length_dashed_line_draws_nothing() {
        let mut list = DrawList::new();
        let point = Vec2::splat(4.0);
        draw_dashed_line(&mut list, point, point, Color::WHITE, DashPattern::default());
        assert!(list.commands().is_empty());
    }

    #[test]
    fn projected_grid_is_pulled_toward_vanishing_point() {
        let camera = PerspectiveCamera::new(800, 600).unwrap();
        let grid = PerspectiveGrid::new(20, 15, 40.0);
        let mut list = DrawList::new();
        grid.render(&mut list, &camera, Color::WHITE);
        assert!(!list.commands().is_empty());
        // factor = 300 / 400 = 0.75, so the left edge x = 400 + (0 - 400) * 0.75 = 100
        let (first, _, _) = list.segments().next().unwrap();
        assert_eq!(first.x, 100.0);
        for (a, b, _) in list.segments() {
            assert!(a.x >= 100.0 && b.x <= 700.0, "{:?} {:?}", a, b);
        }
    }
}
