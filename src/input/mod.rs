use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Pattern;

/// Milliseconds added to or removed from the tick interval per key press
const SPEED_STEP_MS: i64 = 10;

/// Cursor position in whole screen pixels
pub fn cursor_position() -> (i32, i32) {
    let (x, y) = mouse_position();
    (x as i32, y as i32)
}

/// Handle zoom with mouse wheel
pub fn handle_zoom(state: &mut GameState) {
    state.camera.zoom_by(mouse_wheel().1);
}

/// Handle pan with right mouse button drag
pub fn handle_pan(state: &mut GameState, cursor: (i32, i32)) {
    let held = is_mouse_button_down(MouseButton::Right);
    state.drag_to(held.then_some(cursor));
}

/// Toggle the cell under the cursor on a fresh left click
pub fn handle_toggle(state: &mut GameState, cursor: (i32, i32)) {
    if is_mouse_button_pressed(MouseButton::Left) {
        state.toggle_at_screen(cursor.0, cursor.1);
    }
}

/// Number keys stamp the matching preset under the cursor
const PATTERN_KEYS: [KeyCode; 7] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
];

/// Place a preset at the cursor when its number key is pressed
pub fn handle_pattern_keys(state: &mut GameState, patterns: &[Pattern], cursor: (i32, i32)) {
    PATTERN_KEYS
        .iter()
        .zip(patterns)
        .filter(|(key, _)| is_key_pressed(**key))
        .for_each(|(_, pattern)| {
            state.place_pattern_at_screen(pattern, cursor.0, cursor.1);
        });
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, GameState::toggle_paused),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::H, GameState::reset_camera),
        (KeyCode::Up, |s| s.adjust_speed(-SPEED_STEP_MS)),
        (KeyCode::Down, |s| s.adjust_speed(SPEED_STEP_MS)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
