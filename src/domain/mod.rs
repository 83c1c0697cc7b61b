mod board;
mod cell;
mod error;
mod patterns;

pub use board::Board;
pub use cell::Cell;
pub use error::BoardError;
pub use patterns::{Pattern, presets};
