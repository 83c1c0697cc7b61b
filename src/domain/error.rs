use thiserror::Error;

/// Errors raised when building or seeding a board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("pattern `{name}` ({pattern_width}x{pattern_height}) does not fit at ({x}, {y}) on a {width}x{height} board")]
    PatternOutOfBounds {
        name: &'static str,
        pattern_width: usize,
        pattern_height: usize,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("board {width}x{height} is too large to blit as a single image")]
    ImageTooLarge { width: usize, height: usize },
}
