//! Drawing surfaces: a CPU raster target and a command recorder.

use std::path::Path;

use glam::Vec2;
use image::{ImageFormat, Rgb, RgbImage};
use tiny_skia::{LineCap, Paint, PathBuilder, Pixmap, Stroke};

use crate::color::Color;
use crate::error::{RenderError, RenderResult};

/// Sink for 2D line drawing.
pub trait Surface {
    /// Fill the whole surface.
    fn clear(&mut self, color: Color);

    /// Solid line `width` pixels wide. A width of 0 draws nothing.
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: u32);

    /// One-pixel anti-aliased line.
    fn draw_aaline(&mut self, from: Vec2, to: Vec2, color: Color);
}

/// Opaque RGB raster surface backed by a tiny-skia [`Pixmap`].
///
/// Pixel (x, y) covers the square `[x, x + 1) × [y, y + 1)`, so a point at
/// `(x + 0.5, y + 0.5)` is the pixel's center.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    pixmap: Pixmap,
}

impl ImageSurface {
    /// Black surface of the given size.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidScreenSize { width, height })?;
        pixmap.fill(tiny_skia::Color::BLACK);
        Ok(Self { pixmap })
    }

    /// Color at a pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::new(c.red(), c.green(), c.blue())
        })
    }

    /// Write the surface as a PNG.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let image = RgbImage::from_fn(self.pixmap.width(), self.pixmap.height(), |x, y| {
            Rgb(self.pixel(x, y).unwrap_or(Color::BLACK).to_array())
        });
        let path = path.as_ref();
        image.save_with_format(path, ImageFormat::Png)?;
        log::debug!("Saved {}x{} surface to {:?}", image.width(), image.height(), path);
        Ok(())
    }

    /// Number of pixels that differ from `background`.
    pub fn count_non_background(&self, background: Color) -> usize {
        self.pixmap
            .pixels()
            .iter()
            .map(|p| p.demultiply())
            .filter(|c| [c.red(), c.green(), c.blue()] != background.to_array())
            .count()
    }

    fn stroke(&mut self, from: Vec2, to: Vec2, color: Color, width: f32, anti_alias: bool) {
        if !(from.is_finite() && to.is_finite()) {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, 255);
        paint.anti_alias = anti_alias;
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, tiny_skia::Transform::identity(), None);
    }
}

impl Surface for ImageSurface {
    fn clear(&mut self, color: Color) {
        self.pixmap
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: u32) {
        if width == 0 {
            return;
        }
        self.stroke(from, to, color, width as f32, false);
    }

    fn draw_aaline(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.stroke(from, to, color, 1.0, true);
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
        width: u32,
    },
    AaLine {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Line and anti-aliased line calls, in order, as (from, to, color).
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line {
                from, to, color, ..
            }
            | DrawCommand::AaLine { from, to, color } => Some((from, to, color)),
            DrawCommand::Clear(_) => None,
        })
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: u32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_aaline(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.commands.push(DrawCommand::AaLine { from, to, color });
    }
}
