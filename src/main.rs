use std::time::Duration;

use env_logger::Env;
use log::error;
use macroquad::prelude::*;
use life_board::{Config, GameState, input, presets, rendering::{self, BoardView}};

fn window_conf() -> Conf {
    let config = Config::default();
    Conf {
        window_title: config.window_title,
        window_width: config.window_width as i32,
        window_height: config.window_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let mut state = match GameState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            error!("cannot create board: {err}");
            return;
        }
    };
    let mut view = match BoardView::new(&state.board) {
        Ok(view) => view,
        Err(err) => {
            error!("cannot create board view: {err}");
            return;
        }
    };

    let patterns = presets::all_patterns();

    loop {
        let cursor = input::cursor_position();

        input::handle_zoom(&mut state);
        input::handle_pan(&mut state, cursor);
        state.clamp_camera(screen_width() as usize, screen_height() as usize);
        input::handle_toggle(&mut state, cursor);
        input::handle_pattern_keys(&mut state, &patterns, cursor);
        state = input::process_keyboard_input(state);

        let frame_time = Duration::try_from_secs_f32(get_frame_time()).unwrap_or_default();
        state = state.tick(frame_time);

        clear_background(WHITE);
        view.draw(&state.board, &state.camera);
        rendering::draw_status(&state);

        next_frame().await;
    }
}
