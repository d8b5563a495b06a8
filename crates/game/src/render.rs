//! Frame composition: grid, apple, then snake, over black.

use renderer::{Color, ColorOscillator, Palette, PerspectiveCamera, PerspectiveGrid, Surface};

use crate::state::{GamePhase, Session};

/// Everything a frame needs besides the session itself.
pub struct FrameContext {
    pub camera: PerspectiveCamera,
    pub colors: ColorOscillator,
    pub grid: PerspectiveGrid,
    pub line_width: u32,
}

impl FrameContext {
    /// Draw one frame with the palette sampled now.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, session: &Session) {
        draw_frame(surface, session, self, &self.colors.palette());
    }
}

/// Draw one frame with an explicit palette. The menu shows an empty screen;
/// every other phase shows the board.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    session: &Session,
    ctx: &FrameContext,
    palette: &Palette,
) {
    surface.clear(Color::BLACK);
    if session.phase() == GamePhase::Menu {
        return;
    }

    ctx.grid.render(surface, &ctx.camera, palette.grid);
    if let Some(apple) = session.apple_sphere() {
        apple.render(surface, &ctx.camera, palette.apple, ctx.line_width);
    }
    session
        .snake()
        .render(surface, &ctx.camera, palette.snake, ctx.line_width);
}
