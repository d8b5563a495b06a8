//! Game session: phases, scoring, pacing, and the apple.

use anyhow::Result;
use glam::IVec2;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use renderer::{RenderResult, Solid};

use crate::config::GameConfig;
use crate::snake::{Board, Direction, Snake};

/// Apple radius relative to a snake cube's edge.
const APPLE_SCALE: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// What a call to [`Session::update`] did, for logging and drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    pub moved: bool,
    pub ate_apple: bool,
    pub sped_up: bool,
    pub game_over: bool,
}

pub struct Session {
    board: Board,
    cube_size: f32,
    phase: GamePhase,
    snake: Snake,
    apple: Option<IVec2>,
    apple_sphere: Option<Solid>,
    score: u32,
    /// In-memory only; not persisted between runs.
    high_score: u32,
    speed: u32,
    starting_speed: u32,
    max_speed: u32,
    apples_per_speedup: u32,
    move_timer: f32,
    rng: StdRng,
}

impl Session {
    /// Fails when the starting snake does not fit on the configured board.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let board = Board {
            columns: config.grid_columns as i32,
            rows: config.grid_rows as i32,
            cell_size: config.cell_size,
        };
        anyhow::ensure!(
            board.fits_start(),
            "a {}x{} board is too small for the starting snake",
            config.grid_columns,
            config.grid_rows
        );
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = Self {
            board,
            cube_size: config.cube_size,
            phase: GamePhase::Menu,
            snake: Snake::new(board, config.cube_size)?,
            apple: None,
            apple_sphere: None,
            score: 0,
            high_score: 0,
            speed: config.starting_speed.max(1),
            starting_speed: config.starting_speed.max(1),
            max_speed: config.max_speed.max(1),
            apples_per_speedup: config.apples_per_speedup,
            move_timer: 0.0,
            rng,
        };
        session.spawn_apple()?;
        Ok(session)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Option<IVec2> {
        self.apple
    }

    pub fn apple_sphere(&self) -> Option<&Solid> {
        self.apple_sphere.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Moves per second.
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Reset score, pacing, snake, and apple, then start playing.
    pub fn start(&mut self) -> RenderResult<()> {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.speed = self.starting_speed;
        self.move_timer = 0.0;
        self.snake.reset()?;
        self.spawn_apple()
    }

    /// Playing ↔ Paused. Other phases are left alone.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }

    pub fn steer(&mut self, direction: Direction) {
        if self.phase == GamePhase::Playing {
            self.snake.set_direction(direction);
        }
    }

    /// Advance the simulation by `dt` seconds. Only runs while playing.
    pub fn update(&mut self, dt: f32) -> RenderResult<StepOutcome> {
        let mut outcome = StepOutcome::default();
        if self.phase != GamePhase::Playing {
            return Ok(outcome);
        }

        if let Some(sphere) = &mut self.apple_sphere {
            sphere.update(dt);
        }

        self.move_timer += dt;
        if self.move_timer < 1.0 / self.speed as f32 {
            return Ok(outcome);
        }
        self.move_timer = 0.0;

        self.snake.move_forward()?;
        outcome.moved = true;

        if self.snake.check_collision() {
            self.phase = GamePhase::GameOver;
            outcome.game_over = true;
            log::debug!("Game over: score {} (length {})", self.score, self.snake.len());
            return Ok(outcome);
        }

        if Some(self.snake.head()) == self.apple {
            self.snake.grow();
            self.score += 1;
            outcome.ate_apple = true;
            self.high_score = self.high_score.max(self.score);

            if self.apples_per_speedup > 0
                && self.score % self.apples_per_speedup == 0
                && self.speed < self.max_speed
            {
                self.speed += 1;
                outcome.sped_up = true;
                log::debug!("Speed up: {} moves/s", self.speed);
            }
            log::debug!("Apple eaten at {:?}, score {}", self.apple, self.score);
            self.spawn_apple()?;
        }
        Ok(outcome)
    }

    /// Place the apple on a random free cell; clears it when the board is full.
    fn spawn_apple(&mut self) -> RenderResult<()> {
        let snake = &self.snake;
        let cell = self.board.cells().filter(|&c| !snake.occupies(c)).choose(&mut self.rng);
        self.apple = cell;
        self.apple_sphere = match cell {
            Some(c) => Some(Solid::icosahedron(
                self.board.cell_center(c),
                self.cube_size * APPLE_SCALE,
            )?),
            None => None,
        };
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn place_apple(&mut self, cell: IVec2) -> RenderResult<()> {
        self.apple = Some(cell);
        self.apple_sphere = Some(Solid::icosahedron(
            self.board.cell_center(cell),
            self.cube_size * APPLE_SCALE,
        )?);
        Ok(())
    }
}
