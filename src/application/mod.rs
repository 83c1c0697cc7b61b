mod camera;
mod console;
mod game_state;

pub use camera::Camera;
pub use console::ConsoleDriver;
pub use game_state::GameState;
