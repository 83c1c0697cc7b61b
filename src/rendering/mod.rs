use macroquad::prelude::*;

use crate::application::{Camera, GameState};
use crate::domain::{Board, BoardError, Cell};

const ALIVE_COLOR: Color = BLACK;
const DEAD_COLOR: Color = WHITE;
const STATUS_COLOR: Color = Color::new(0.8, 0.1, 0.1, 1.0);

fn cell_color(cell: Cell) -> Color {
    if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR }
}

/// On-screen size of the board after zooming
fn scaled_size(board: &Board, camera: &Camera) -> Vec2 {
    let (width, height) = board.dimensions();
    let zoom = camera.zoom as f32;
    vec2(width as f32 * zoom, height as f32 * zoom)
}

/// Board-sized image with one pixel per cell, blitted through the camera
pub struct BoardView {
    image: Image,
    texture: Texture2D,
}

impl BoardView {
    /// Needs a live macroquad context
    pub fn new(board: &Board) -> Result<Self, BoardError> {
        let (width, height) = board.dimensions();
        let (image_width, image_height) = u16::try_from(width)
            .ok()
            .zip(u16::try_from(height).ok())
            .ok_or(BoardError::ImageTooLarge { width, height })?;

        let image = Image::gen_image_color(image_width, image_height, DEAD_COLOR);
        let texture = Texture2D::from_image(&image);
        texture.set_filter(FilterMode::Nearest);
        Ok(Self { image, texture })
    }

    /// Repaint the image from the board and draw it scaled and translated
    pub fn draw(&mut self, board: &Board, camera: &Camera) {
        for (x, y, cell) in board.iter_cells() {
            self.image.set_pixel(x as u32, y as u32, cell_color(cell));
        }
        self.texture.update(&self.image);

        draw_texture_ex(
            &self.texture,
            camera.offset_x as f32,
            camera.offset_y as f32,
            WHITE,
            DrawTextureParams {
                dest_size: Some(scaled_size(board, camera)),
                ..Default::default()
            },
        );
    }
}

/// Generation counter and run state in the top-left corner
pub fn draw_status(state: &GameState) {
    let status = if state.paused { "Paused" } else { "Running" };
    let text = format!(
        "Gen {} | {} | {}ms | {}x",
        state.generation,
        status,
        state.tick_interval.as_millis(),
        state.camera.zoom
    );
    draw_text(&text, 8.0, 20.0, 20.0, STATUS_COLOR);
}
