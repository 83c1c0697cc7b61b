//! Process-level configuration.
//!
//! Everything here is a compile-time default; there are no command line flags.

use std::time::Duration;

pub const WINDOW_TITLE: &str = "Conway's Game of Life";
pub const WINDOW_WIDTH: usize = 640;
pub const WINDOW_HEIGHT: usize = 480;

/// Interactive board, one cell per pixel at zoom 1
pub const BOARD_WIDTH: usize = WINDOW_WIDTH;
pub const BOARD_HEIGHT: usize = WINDOW_HEIGHT;

pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
pub const MIN_TICK_MS: u64 = 10;
pub const MAX_TICK_MS: u64 = 2000;

pub const MAX_ZOOM: u32 = 32;
pub const RANDOM_DENSITY: f64 = 0.3;

pub const CONSOLE_BOARD_SIZE: usize = 30;

/// Settings for the windowed simulator
#[derive(Clone, Debug)]
pub struct Config {
    pub window_title: String,
    pub window_width: usize,
    pub window_height: usize,
    pub board_width: usize,
    pub board_height: usize,
    pub tick_interval: Duration,
    pub start_paused: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_owned(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            tick_interval: TICK_INTERVAL,
            start_paused: true,
        }
    }
}

/// Settings for the console simulator
#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    pub width: usize,
    pub height: usize,
    pub tick: Duration,
    /// Frames to print before exiting, `None` runs until interrupted
    pub generations: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            width: CONSOLE_BOARD_SIZE,
            height: CONSOLE_BOARD_SIZE,
            tick: TICK_INTERVAL,
            generations: None,
        }
    }
}
