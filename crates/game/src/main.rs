//! Wiresnake - snake on a grid, drawn as perspective wireframes with a cycling palette.
//!
//! Runs headless: a greedy driver steers, frames are rendered to an in-memory
//! raster, and every `snapshot_every` frames one is written as a PNG.

mod config;
mod driver;
mod render;
mod snake;
mod state;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use engine_core::Time;
use renderer::{
    CameraSettings, Color, ColorOscillator, ImageSurface, Palette, PerspectiveCamera,
    PerspectiveGrid,
};

use config::GameConfig;
use render::{draw_frame, FrameContext};
use state::{GamePhase, Session};

/// Totals reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq)]
struct RunSummary {
    frames: u32,
    games: u32,
    pauses: u32,
    moves: u32,
    apples: u32,
    best_score: u32,
    snapshots: Vec<PathBuf>,
}

fn build_context(config: &GameConfig) -> Result<FrameContext> {
    let camera = PerspectiveCamera::with_settings(
        config.screen_width,
        config.screen_height,
        CameraSettings {
            vanishing_point: None,
            perspective_strength: config.perspective_strength,
        },
    )
    .context("invalid camera settings")?;
    anyhow::ensure!(
        camera.is_in_front(config.grid_depth),
        "grid depth {} is behind the camera",
        config.grid_depth
    );
    let colors =
        ColorOscillator::new(config.color_cycle_seconds).context("invalid color cycle")?;
    let grid = PerspectiveGrid::new(config.grid_columns, config.grid_rows, config.cell_size)
        .with_depth(config.grid_depth);

    Ok(FrameContext {
        camera,
        colors,
        grid,
        line_width: config.line_width,
    })
}

fn snapshot_path(dir: &Path, frame: u32) -> PathBuf {
    dir.join(format!("frame_{:05}.png", frame))
}

/// Drive the game for `config.frames` frames.
fn run(config: &GameConfig) -> Result<RunSummary> {
    let ctx = build_context(config)?;
    let mut session = Session::new(config).context("failed to create session")?;
    session.start()?;

    let mut time = Time::new();
    time.set_target_fps(config.target_fps as f64);
    let mut surface = ImageSurface::new(config.screen_width, config.screen_height)
        .context("invalid screen size")?;

    if config.snapshot_every > 0 {
        std::fs::create_dir_all(&config.snapshot_dir)
            .with_context(|| format!("creating {:?}", config.snapshot_dir))?;
    }

    let mut summary = RunSummary {
        games: 1,
        ..Default::default()
    };

    for frame in 1..=config.frames {
        if config.realtime {
            std::thread::sleep(time.remaining_frame_budget());
            time.update();
        } else {
            time.advance(time.target_frame_time());
        }

        if session.phase() == GamePhase::GameOver {
            summary.best_score = summary.best_score.max(session.high_score());
            session.start()?;
            summary.games += 1;
        }
        if config.pause_every > 0 && frame % config.pause_every == 0 {
            session.toggle_pause();
            if session.phase() == GamePhase::Paused {
                summary.pauses += 1;
            }
            log::debug!("Frame {}: {:?}", frame, session.phase());
        }
        if let Some(direction) = driver::choose_direction(&session) {
            session.steer(direction);
        }
        let outcome = session.update(time.delta_seconds())?;
        if outcome.moved {
            summary.moves += 1;
        }
        if outcome.ate_apple {
            summary.apples += 1;
        }
        if outcome.sped_up {
            log::info!("Speed up to {} moves/s at frame {}", session.speed(), frame);
        }
        if outcome.game_over {
            log::info!(
                "Game {} over at frame {}: score {}, speed {}",
                summary.games,
                frame,
                session.score(),
                session.speed()
            );
        }

        if config.snapshot_every > 0 && frame % config.snapshot_every == 0 {
            if config.realtime {
                ctx.draw(&mut surface, &session);
            } else {
                let palette = Palette::from_hue(ctx.colors.hue_at(time.elapsed()));
                draw_frame(&mut surface, &session, &ctx, &palette);
            }
            let path = snapshot_path(&config.snapshot_dir, frame);
            surface
                .save(&path)
                .with_context(|| format!("writing snapshot {:?}", path))?;
            log::info!(
                "Wrote {:?} ({} lit pixels)",
                path,
                surface.count_non_background(Color::BLACK)
            );
            summary.snapshots.push(path);
        }
    }

    summary.frames = time.frame_count() as u32;
    summary.best_score = summary.best_score.max(session.high_score());
    if config.realtime {
        log::info!("Last frame ran at {:.1} fps", time.fps());
    }
    Ok(summary)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if std::env::args().nth(1).as_deref() == Some("--init-config") {
        let path = GameConfig::default().save()?;
        log::info!("Wrote default config to {:?}", path);
        return Ok(());
    }

    log::info!("Starting Wiresnake");
    let config = GameConfig::load();
    let started = std::time::Instant::now();
    let summary = run(&config)?;
    log::info!(
        "Ran {} frames ({} games, {} pauses, {} moves, {} apples, best score {}) in {:.2?}",
        summary.frames,
        summary.games,
        summary.pauses,
        summary.moves,
        summary.apples,
        summary.best_score,
        started.elapsed()
    );
    log::info!("{} snapshots written", summary.snapshots.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wiresnake-run-{}-{}", name, std::process::id()))
    }

    #[test]
    fn headless_run_writes_snapshots() {
        let dir = temp_dir("snapshots");
        let config = GameConfig {
            frames: 120,
            snapshot_every: 60,
            snapshot_dir: dir.clone(),
            seed: Some(4),
            ..Default::default()
        };
        let summary = run(&config).unwrap();
        assert_eq!(summary.frames, 120);
        assert_eq!(
            summary.snapshots,
            vec![snapshot_path(&dir, 60), snapshot_path(&dir, 120)]
        );
        for path in &summary.snapshots {
            assert!(path.exists());
        }
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn headless_run_plays_multiple_moves_without_snapshots() {
        let config = GameConfig {
            frames: 600,
            snapshot_every: 0,
            seed: Some(8),
            ..Default::default()
        };
        let summary = run(&config).unwrap();
        assert_eq!(summary.frames, 600);
        assert!(summary.snapshots.is_empty());
        assert!(summary.games >= 1);
        assert!(summary.best_score >= summary.apples.min(1));
        assert_eq!(summary.pauses, 0);
        // At 60 fps a move needs 8 frames at speed 8, about 75 moves in 600 frames.
        assert!(summary.moves >= 60, "{} moves", summary.moves);
    }

    #[test]
    fn pause_every_freezes_play_between_toggles() {
        let config = GameConfig {
            frames: 100,
            snapshot_every: 0,
            pause_every: 25,
            seed: Some(8),
            ..Default::default()
        };
        let summary = run(&config).unwrap();
        assert_eq!(summary.frames, 100);
        // Paused at 25 and 75, resumed at 50 and 100.
        assert_eq!(summary.pauses, 2);
    }

    #[test]
    fn board_too_small_fails_the_run() {
        let config = GameConfig {
            grid_columns: 2,
            grid_rows: 2,
            snapshot_every: 0,
            ..Default::default()
        };
        assert!(run(&config).is_err());
    }

    #[test]
    fn grid_behind_camera_is_rejected() {
        let config = GameConfig {
            grid_depth: -400.0,
            ..Default::default()
        };
        assert!(build_context(&config).is_err());
    }

    #[test]
    fn invalid_perspective_is_rejected() {
        let config = GameConfig {
            perspective_strength: 0.0,
            ..Default::default()
        };
        assert!(build_context(&config).is_err());
    }
}
