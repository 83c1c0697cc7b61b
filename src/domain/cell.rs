/// Cell is the fundamental unit of the board.
/// `neighbors` is scratch state written by the count phase of the last update.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Cell {
    pub alive: bool,
    pub(crate) neighbors: u8,
}

impl Cell {
    pub const DEAD: Cell = Cell { alive: false, neighbors: 0 };

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        self.alive
    }

    /// Alive neighbors counted during the most recent update
    pub const fn neighbors(self) -> u8 {
        self.neighbors
    }

    /// Flip the life state in place
    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }

    /// B3/S23 applied to the stored neighbor count:
    /// 1. Fewer than 2 or more than 3 neighbors: dead
    /// 2. Exactly 3 neighbors: alive
    /// 3. Exactly 2 neighbors: unchanged
    pub fn transition(&mut self) {
        match self.neighbors {
            2 => {}
            3 => self.alive = true,
            _ => self.alive = false,
        }
    }

    /// Glyph used by the text dump
    pub const fn glyph(self) -> &'static str {
        if self.alive { "[#]" } else { "[ ]" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with(alive: bool, neighbors: u8) -> Cell {
        let mut cell = Cell { alive, neighbors };
        cell.transition();
        cell
    }

    #[test]
    fn test_underpopulation() {
        assert!(!with(true, 0).alive);
        assert!(!with(true, 1).alive);
    }

    #[test]
    fn test_survival() {
        assert!(with(true, 2).alive);
        assert!(with(true, 3).alive);
    }

    #[test]
    fn test_two_neighbors_keeps_dead_cell_dead() {
        assert!(!with(false, 2).alive);
    }

    #[test]
    fn test_overpopulation() {
        assert!(!with(true, 4).alive);
        assert!(!with(true, 8).alive);
    }

    #[test]
    fn test_reproduction() {
        assert!(with(false, 3).alive);
    }

    #[test]
    fn test_toggle_and_glyph() {
        let mut cell = Cell::DEAD;
        assert_eq!(cell.glyph(), "[ ]");
        cell.toggle();
        assert!(cell.is_alive());
        assert_eq!(cell.glyph(), "[#]");
    }
}
