use super::{Board, BoardError};

/// Represents a pattern that can be placed on the board
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Place pattern with its top-left corner at `(x, y)`.
    /// Nothing is written unless the whole bounding box fits.
    pub fn place_on(&self, board: &mut Board, x: usize, y: usize) -> Result<(), BoardError> {
        let (width, height) = board.dimensions();
        let fits = x
            .checked_add(self.width)
            .zip(y.checked_add(self.height))
            .is_some_and(|(right, bottom)| right <= width && bottom <= height);
        if !fits {
            return Err(BoardError::PatternOutOfBounds {
                name: self.name,
                pattern_width: self.width,
                pattern_height: self.height,
                x,
                y,
                width,
                height,
            });
        }

        for (dx, dy) in &self.cells {
            board.set_alive(x + dx, y + dy, true);
        }
        Ok(())
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(0, 0), (1, 0), (2, 0)]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ]
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            r_pentomino(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        let blinker = presets::blinker();
        assert_eq!((blinker.width, blinker.height), (3, 1));
    }

    #[test]
    fn test_place_on_offsets_cells() {
        let mut board = Board::new(6, 6).unwrap();
        presets::glider().place_on(&mut board, 2, 1).unwrap();
        let alive: Vec<_> = board.alive_cells().collect();
        assert_eq!(alive, vec![(3, 1), (4, 2), (2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn test_place_out_of_bounds_writes_nothing() {
        let mut board = Board::new(5, 5).unwrap();
        let err = presets::lwss().place_on(&mut board, 2, 0).unwrap_err();
        assert!(matches!(err, BoardError::PatternOutOfBounds { name: "LWSS", .. }));
        assert_eq!(board.population(), 0);

        assert!(presets::block().place_on(&mut board, usize::MAX, 0).is_err());
    }

    #[test]
    fn test_oscillators_return_after_two_generations() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut board = Board::new(10, 10).unwrap();
            pattern.place_on(&mut board, 3, 3).unwrap();
            let start = board.clone();

            board.update();
            assert_ne!(board, start, "{} should change", pattern.name);

            board.update();
            let before: Vec<_> = start.alive_cells().collect();
            let after: Vec<_> = board.alive_cells().collect();
            assert_eq!(after, before, "{} should have period 2", pattern.name);
        }
    }

    #[test]
    fn test_all_patterns_unique_and_placeable() {
        let patterns = presets::all_patterns();
        assert_eq!(patterns.len(), 7);

        let mut names: Vec<_> = patterns.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), patterns.len());

        for pattern in &patterns {
            let mut board = Board::new(pattern.width, pattern.height).unwrap();
            pattern.place_on(&mut board, 0, 0).unwrap();
            assert_eq!(board.population(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_r_pentomino_first_generation() {
        let mut board = Board::new(30, 30).unwrap();
        presets::r_pentomino().place_on(&mut board, 10, 10).unwrap();
        assert_eq!(board.population(), 5);

        board.update();
        let alive: Vec<_> = board.alive_cells().collect();
        assert_eq!(alive, vec![(10, 10), (11, 10), (12, 10), (10, 11), (10, 12), (11, 12)]);
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let mut board = Board::new(8, 8).unwrap();
        presets::glider().place_on(&mut board, 0, 0).unwrap();
        for _ in 0..4 {
            board.update();
        }
        let alive: Vec<_> = board.alive_cells().collect();
        assert_eq!(alive, vec![(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
    }
}
