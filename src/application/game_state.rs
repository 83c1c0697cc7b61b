use std::time::Duration;

use log::{debug, info, trace};
use rand::Rng;

use crate::config::{Config, MAX_TICK_MS, MIN_TICK_MS, RANDOM_DENSITY};
use crate::domain::{Board, BoardError, Pattern};
use super::Camera;

/// GameState is the interactive session around a board.
/// The board knows nothing about cameras, pausing or frame timing; all of
/// that lives here and is driven once per frame by the window loop.
pub struct GameState {
    pub board: Board,
    pub camera: Camera,
    pub paused: bool,
    pub generation: u64,
    pub accumulated: Duration,
    pub tick_interval: Duration,
    /// Last cursor position while the pan button is held
    drag_anchor: Option<(i32, i32)>,
}

impl GameState {
    pub fn new(config: &Config) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(config.board_width, config.board_height)?,
            camera: Camera::new(),
            paused: config.start_paused,
            generation: 0,
            accumulated: Duration::ZERO,
            tick_interval: config.tick_interval,
            drag_anchor: None,
        })
    }

    /// Toggle play/pause state
    pub fn toggle_paused(mut self) -> Self {
        self.paused = !self.paused;
        info!("{}", if self.paused { "paused" } else { "running" });
        self
    }

    /// Clear board and reset generation counter
    pub fn clear(mut self) -> Self {
        self.board.clear();
        self.generation = 0;
        info!("board cleared");
        self
    }

    /// Randomize board and reset generation counter
    pub fn randomize(self) -> Self {
        self.randomize_with(&mut rand::rng())
    }

    pub fn randomize_with<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.board.randomize(rng, RANDOM_DENSITY);
        self.generation = 0;
        info!("board randomized, population {}", self.board.population());
        self
    }

    /// Lengthen or shorten the time between generations
    pub fn adjust_speed(mut self, delta_ms: i64) -> Self {
        let current = self.tick_interval.as_millis() as i64;
        let next = (current + delta_ms).clamp(MIN_TICK_MS as i64, MAX_TICK_MS as i64);
        self.tick_interval = Duration::from_millis(next as u64);
        info!("tick interval {}ms", next);
        self
    }

    pub fn reset_camera(mut self) -> Self {
        self.camera.reset();
        debug!("camera reset");
        self
    }

    /// Advance the clock by one frame.
    /// At most one generation runs per frame; time only accumulates while running
    /// and the leftover never exceeds one interval.
    pub fn tick(mut self, delta: Duration) -> Self {
        if self.paused {
            return self;
        }

        self.accumulated += delta;
        if self.accumulated > self.tick_interval {
            self.accumulated -= self.tick_interval;
            self.accumulated = self.accumulated.min(self.tick_interval);
            self.board.update();
            self.generation += 1;
            trace!("generation {}", self.generation);
        }
        self
    }

    /// Flip the cell under a screen position.
    /// Clicks that land off the board are ignored.
    pub fn toggle_at_screen(&mut self, screen_x: i32, screen_y: i32) -> bool {
        let (width, height) = self.board.dimensions();
        match self.camera.cell_at(screen_x, screen_y, width, height) {
            Some((x, y)) => {
                self.board.toggle(x, y);
                true
            }
            None => {
                debug!("click at ({screen_x}, {screen_y}) is off the board");
                false
            }
        }
    }

    /// Stamp a pattern centered on the cell under a screen position.
    /// Off-board positions and patterns that would cross an edge are ignored.
    pub fn place_pattern_at_screen(
        &mut self,
        pattern: &Pattern,
        screen_x: i32,
        screen_y: i32,
    ) -> bool {
        let (width, height) = self.board.dimensions();
        let Some((grid_x, grid_y)) = self.camera.cell_at(screen_x, screen_y, width, height) else {
            debug!("pattern drop at ({screen_x}, {screen_y}) is off the board");
            return false;
        };

        let x = grid_x.saturating_sub(pattern.width / 2);
        let y = grid_y.saturating_sub(pattern.height / 2);
        match pattern.place_on(&mut self.board, x, y) {
            Ok(()) => {
                info!("placed {} at ({x}, {y})", pattern.name);
                true
            }
            Err(err) => {
                debug!("{err}");
                false
            }
        }
    }

    /// Feed the cursor position while the pan button is held, `None` once released
    pub fn drag_to(&mut self, cursor: Option<(i32, i32)>) {
        if let (Some((x, y)), Some((last_x, last_y))) = (cursor, self.drag_anchor) {
            self.camera.pan(x - last_x, y - last_y);
        }
        self.drag_anchor = cursor;
    }

    /// Keep the camera inside the board for the given display size
    pub fn clamp_camera(&mut self, display_width: usize, display_height: usize) {
        let (width, height) = self.board.dimensions();
        self.camera.clamp_to(width, height, display_width, display_height);
    }
}
