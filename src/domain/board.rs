use std::fmt;

use log::trace;
use rand::Rng;

use super::{BoardError, Cell};

/// Relative positions of the Moore neighborhood, excluding the cell itself.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Board is a fixed-size grid of cells with hard edges.
/// Cells are stored row-major, so `(x, y)` lives at `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new board with all cells dead
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::DEAD; width * height],
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get board dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Convert 2D coordinates to the flat index, panicking when out of range
    fn index_of(&self, x: usize, y: usize) -> usize {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) is outside the {}x{} board",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Cell at position. Panics if `(x, y)` is off the board.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.index_of(x, y)]
    }

    /// Mutable cell at position. Panics if `(x, y)` is off the board.
    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        let idx = self.index_of(x, y);
        &mut self.cells[idx]
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.contains(x, y).then(|| &self.cells[y * self.width + x])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if self.contains(x, y) {
            Some(&mut self.cells[y * self.width + x])
        } else {
            None
        }
    }

    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) {
        self.cell_mut(x, y).alive = alive;
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        self.cell_mut(x, y).toggle();
    }

    /// Count alive neighbors, skipping positions past the edges
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.get(nx, ny)
            })
            .filter(|cell| cell.alive)
            .count() as u8
    }

    /// Advance the whole board by one generation.
    ///
    /// Counting finishes over the entire grid before any cell changes state,
    /// so every count reflects the previous generation.
    pub fn update(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let neighbors = self.count_live_neighbors(x, y);
                self.cells[y * self.width + x].neighbors = neighbors;
            }
        }

        self.cells.iter_mut().for_each(Cell::transition);
        trace!("board advanced, population {}", self.population());
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    /// Positions of alive cells, row by row
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.alive)
            .map(|(x, y, _)| (x, y))
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx % width, idx / width, *cell))
    }

    /// Kill every cell and reset the neighbor counts
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::DEAD);
    }

    /// Fill the board at random, each cell alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells.iter_mut().for_each(|cell| {
            *cell = Cell {
                alive: rng.random_bool(density),
                neighbors: 0,
            };
        });
    }

    /// Text dump of the board, one line per row, produced lazily.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.width).map(|row| {
            row.iter().fold(String::with_capacity(row.len() * 4), |mut line, cell| {
                line.push_str(cell.glyph());
                line.push(' ');
                line
            })
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
