use crate::config::MAX_ZOOM;

/// Camera manages viewport and zoom for grid navigation.
/// Zoom is a whole number of screen pixels per cell, so the blit and the
/// click mapping always agree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Camera {
    pub offset_x: i32,
    pub offset_y: i32,
    pub zoom: u32, // 1 = one pixel per cell
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            zoom: 1,
        }
    }

    /// Step zoom by one in the wheel's direction
    pub fn zoom_by(&mut self, wheel: f32) {
        if wheel > 0.0 {
            self.zoom = (self.zoom + 1).min(MAX_ZOOM);
        } else if wheel < 0.0 {
            self.zoom = self.zoom.saturating_sub(1).max(1);
        }
    }

    /// Pan camera
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.offset_x = self.offset_x.saturating_add(dx);
        self.offset_y = self.offset_y.saturating_add(dy);
    }

    /// Keep the scaled board covering the display.
    /// Each offset ends up in `[display - grid * zoom, 0]`, or 0 when the
    /// scaled board is smaller than the display.
    pub fn clamp_to(
        &mut self,
        grid_width: usize,
        grid_height: usize,
        display_width: usize,
        display_height: usize,
    ) {
        self.offset_x = clamp_axis(self.offset_x, grid_width, display_width, self.zoom);
        self.offset_y = clamp_axis(self.offset_y, grid_height, display_height, self.zoom);
    }

    /// Convert screen coordinates to grid coordinates, truncating toward zero
    pub fn screen_to_grid(&self, screen_x: i32, screen_y: i32) -> (i32, i32) {
        let zoom = self.zoom as i32;
        (
            (screen_x - self.offset_x) / zoom,
            (screen_y - self.offset_y) / zoom,
        )
    }

    /// Grid cell under a screen position, if the position lands on the board
    pub fn cell_at(
        &self,
        screen_x: i32,
        screen_y: i32,
        grid_width: usize,
        grid_height: usize,
    ) -> Option<(usize, usize)> {
        // Truncation would fold the column left of the board onto column 0
        if screen_x < self.offset_x || screen_y < self.offset_y {
            return None;
        }
        let (grid_x, grid_y) = self.screen_to_grid(screen_x, screen_y);
        let (gx, gy) = (usize::try_from(grid_x).ok()?, usize::try_from(grid_y).ok()?);
        (gx < grid_width && gy < grid_height).then_some((gx, gy))
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_axis(offset: i32, grid: usize, display: usize, zoom: u32) -> i32 {
    let scaled = (grid as i64) * i64::from(zoom);
    let min = (display as i64 - scaled).min(0);
    (offset as i64).clamp(min, 0) as i32
}
