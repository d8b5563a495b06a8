//! Time-driven hue cycling.
//!
//! All palette colors hang off one master hue that sweeps the full color wheel
//! once per cycle. Saturation and value stay fixed per role so the palette
//! stays readable on a black background.

use std::time::{Duration, Instant};

use crate::error::{RenderError, RenderResult};

/// Default seconds for one full hue rotation.
pub const DEFAULT_CYCLE_SECONDS: f64 = 60.0;

/// Hue offset of the apple relative to the snake (about 120 degrees).
pub const APPLE_HUE_OFFSET: f32 = 0.333;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert HSV (each in [0, 1]) to RGB. Channels are truncated, not rounded.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let (r, g, b) = hsv_to_rgb(hue, saturation, value);
        Self {
            r: (r * 255.0) as u8,
            g: (g * 255.0) as u8,
            b: (b * 255.0) as u8,
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Linear blend toward `other`; `t` = 0 keeps `self`, 1 yields `other`.
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

/// Six-sector HSV → RGB, channels in [0, 1].
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Fixed saturation/value for each palette role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tint {
    pub hue_offset: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Tint {
    pub const SNAKE: Tint = Tint {
        hue_offset: 0.0,
        saturation: 0.8,
        value: 0.9,
    };
    pub const APPLE: Tint = Tint {
        hue_offset: APPLE_HUE_OFFSET,
        saturation: 0.9,
        value: 0.95,
    };
    pub const GRID: Tint = Tint {
        hue_offset: 0.0,
        saturation: 0.3,
        value: 0.5,
    };
    pub const UI: Tint = Tint {
        hue_offset: 0.0,
        saturation: 0.2,
        value: 0.95,
    };

    /// Color for this role at the given master hue.
    pub fn at(&self, master_hue: f32) -> Color {
        Color::from_hsv(wrap_unit(master_hue + self.hue_offset), self.saturation, self.value)
    }
}

/// All palette colors derived from one clock sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub hue: f32,
    pub snake: Color,
    pub apple: Color,
    pub grid: Color,
    pub ui: Color,
}

impl Palette {
    pub fn from_hue(hue: f32) -> Self {
        Self {
            hue,
            snake: Tint::SNAKE.at(hue),
            apple: Tint::APPLE.at(hue),
            grid: Tint::GRID.at(hue),
            ui: Tint::UI.at(hue),
        }
    }
}

/// Maps elapsed wall-clock time to a rotating master hue.
#[derive(Debug, Clone, Copy)]
pub struct ColorOscillator {
    start: Instant,
    cycle_duration: f64,
}

impl ColorOscillator {
    /// Start a new cycle now. `cycle_seconds` is the time for one full rotation.
    pub fn new(cycle_seconds: f64) -> RenderResult<Self> {
        if !(cycle_seconds.is_finite() && cycle_seconds > 0.0) {
            return Err(RenderError::InvalidCycleDuration(cycle_seconds));
        }
        Ok(Self {
            start: Instant::now(),
            cycle_duration: cycle_seconds,
        })
    }

    pub fn cycle_duration(&self) -> f64 {
        self.cycle_duration
    }

    /// Current master hue in [0, 1).
    pub fn master_hue(&self) -> f32 {
        self.hue_at(self.start.elapsed())
    }

    /// Master hue after `elapsed` time since the start of the cycle.
    pub fn hue_at(&self, elapsed: Duration) -> f32 {
        let phase = (elapsed.as_secs_f64() / self.cycle_duration).rem_euclid(1.0);
        wrap_unit(phase as f32)
    }

    pub fn palette(&self) -> Palette {
        Palette::from_hue(self.master_hue())
    }

    pub fn snake_color(&self) -> Color {
        Tint::SNAKE.at(self.master_hue())
    }

    pub fn apple_color(&self) -> Color {
        Tint::APPLE.at(self.master_hue())
    }

    pub fn grid_color(&self) -> Color {
        Tint::GRID.at(self.master_hue())
    }

    pub fn ui_color(&self) -> Color {
        Tint::UI.at(self.master_hue())
    }
}

impl Default for ColorOscillator {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            cycle_duration: DEFAULT_CYCLE_SECONDS,
        }
    }
}

/// Wrap into [0, 1). Narrowing from f64 can round 0.99999999 up to exactly 1.0.
fn wrap_unit(x: f32) -> f32 {
    let w = x.rem_euclid(1.0);
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}
