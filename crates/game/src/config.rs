//! Game configuration (screen, board, pacing, rendering, headless run).
//! Loaded from config.ron at startup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Game settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Render target width in pixels.
    pub screen_width: u32,
    /// Render target height in pixels.
    pub screen_height: u32,
    /// Board width in cells.
    pub grid_columns: u32,
    /// Board height in cells.
    pub grid_rows: u32,
    /// Cell edge in world units (= pixels on the z = 0 plane).
    pub cell_size: f32,
    /// Frame rate the loop is paced at.
    pub target_fps: u32,
    /// Snake segment cube edge length.
    pub cube_size: f32,
    /// Wireframe line width; 1 = anti-aliased.
    pub line_width: u32,
    /// Perspective strength (lower = stronger convergence).
    pub perspective_strength: f32,
    /// Depth of the dashed grid plane.
    pub grid_depth: f32,
    /// Seconds for one full hue rotation.
    pub color_cycle_seconds: f64,
    /// Moves per second at the start of a game.
    pub starting_speed: u32,
    /// Upper bound on moves per second.
    pub max_speed: u32,
    /// Apples eaten between speed-ups.
    pub apples_per_speedup: u32,
    /// Frames to simulate in a headless run.
    pub frames: u32,
    /// Write a snapshot every N frames (0 = never).
    pub snapshot_every: u32,
    /// Directory for PNG snapshots.
    pub snapshot_dir: PathBuf,
    /// Seed for apple placement; `None` = random.
    pub seed: Option<u64>,
    /// Pace frames against the wall clock instead of stepping a simulated clock.
    pub realtime: bool,
    /// Toggle pause every N frames (0 = never pause).
    pub pause_every: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            grid_columns: 20,
            grid_rows: 15,
            cell_size: 40.0,
            target_fps: 60,
            cube_size: 20.0,
            line_width: 2,
            perspective_strength: renderer::DEFAULT_PERSPECTIVE_STRENGTH,
            grid_depth: renderer::DEFAULT_GRID_DEPTH,
            color_cycle_seconds: renderer::DEFAULT_CYCLE_SECONDS,
            starting_speed: 8,
            max_speed: 20,
            apples_per_speedup: 5,
            frames: 600,
            snapshot_every: 60,
            snapshot_dir: PathBuf::from("snapshots"),
            seed: None,
            realtime: false,
            pause_every: 0,
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    /// Load config from an explicit path with the same fallback rules as [`GameConfig::load`].
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(data) => match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {:?}, using defaults", path)
            }
            Err(e) => log::warn!("Could not read config at {:?}: {}, using defaults", path, e),
        }
        Self::default()
    }

    /// Save current config to `config.ron` and return the path written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = config_path();
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let s = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .context("could not serialize config")?;
        std::fs::write(path, s).with_context(|| format!("could not write config to {:?}", path))
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wiresnake-{}-{}.ron", name, std::process::id()))
    }

    #[test]
    fn defaults_match_classic_board() {
        let c = GameConfig::default();
        assert_eq!((c.screen_width, c.screen_height), (800, 600));
        assert_eq!((c.grid_columns, c.grid_rows), (20, 15));
        assert_eq!(c.grid_columns as f32 * c.cell_size, c.screen_width as f32);
        assert_eq!(c.perspective_strength, 300.0);
        assert_eq!(c.starting_speed, 8);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let c = GameConfig::load_from(Path::new("/definitely/not/here/config.ron"));
        assert_eq!(c, GameConfig::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let path = temp_path("partial");
        std::fs::write(&path, "(frames: 12, line_width: 1, seed: Some(7))").unwrap();
        let c = GameConfig::load_from(&path);
        assert_eq!(c.frames, 12);
        assert_eq!(c.line_width, 1);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.grid_columns, 20);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = temp_path("bad");
        std::fs::write(&path, "(frames: \"lots\"").unwrap();
        assert_eq!(GameConfig::load_from(&path), GameConfig::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn save_then_load_preserves_fields() {
        let path = temp_path("saved");
        let config = GameConfig {
            cube_size: 12.5,
            snapshot_every: 0,
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(GameConfig::load_from(&path), config);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn save_to_missing_directory_reports_error() {
        let path = Path::new("/definitely/not/here/config.ron");
        let err = GameConfig::default().save_to(path).unwrap_err();
        assert!(format!("{:#}", err).contains("could not write config"));
    }
}
