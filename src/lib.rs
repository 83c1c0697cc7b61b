// Domain layer - the board and its update rule
pub mod domain;

// Application layer - session state and drivers
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

pub mod config;

// Re-exports for convenience
pub use domain::{Board, BoardError, Cell, Pattern, presets};
pub use application::{Camera, ConsoleDriver, GameState};
pub use config::{Config, ConsoleConfig};
