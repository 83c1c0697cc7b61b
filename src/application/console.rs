//! Headless driver: seeds a fixed pattern and prints each generation to a terminal.

use std::io::{self, Write};
use std::thread;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use log::{debug, info};

use crate::config::ConsoleConfig;
use crate::domain::{Board, BoardError, presets};

pub struct ConsoleDriver {
    board: Board,
    config: ConsoleConfig,
    generation: u64,
}

impl ConsoleDriver {
    /// Build the board and seed it with a glider in the top-left corner and a
    /// horizontal blinker at (15..=17, 3).
    pub fn new(config: ConsoleConfig) -> Result<Self, BoardError> {
        let mut board = Board::new(config.width, config.height)?;
        presets::glider().place_on(&mut board, 0, 0)?;
        presets::blinker().place_on(&mut board, 15, 3)?;
        Ok(Self {
            board,
            config,
            generation: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn step(&mut self) {
        self.board.update();
        self.generation += 1;
    }

    /// Clear the terminal and print the board followed by a blank separator line
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        for line in self.board.render() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        out.flush()
    }

    /// Update, print, sleep; repeat for the configured number of frames
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        info!(
            "console run on {}x{} board, tick {:?}",
            self.config.width, self.config.height, self.config.tick
        );
        while self.config.generations.is_none_or(|limit| self.generation < limit) {
            self.step();
            self.draw(out)?;
            debug!("generation {} population {}", self.generation, self.board.population());
            thread::sleep(self.config.tick);
        }
        info!("stopped after {} generations", self.generation);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(generations: Option<u64>) -> ConsoleConfig {
        ConsoleConfig {
            tick: Duration::ZERO,
            generations,
            ..ConsoleConfig::default()
        }
    }

    #[test]
    fn test_seeded_pattern() {
        let driver = ConsoleDriver::new(config(None)).unwrap();
        let alive: Vec<_> = driver.board().alive_cells().collect();
        assert_eq!(
            alive,
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2), (15, 3), (16, 3), (17, 3)]
        );
    }

    #[test]
    fn test_board_too_small_for_seed() {
        let small = ConsoleConfig { width: 10, ..config(None) };
        assert!(matches!(
            ConsoleDriver::new(small),
            Err(BoardError::PatternOutOfBounds { name: "Blinker", .. })
        ));
    }

    #[test]
    fn test_draw_prints_rows_and_separator() {
        let driver = ConsoleDriver::new(config(None)).unwrap();
        let mut out = Vec::new();
        driver.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.ends_with("\n\n"));
        let rows: Vec<&str> = text.lines().filter(|line| line.contains('[')).collect();
        assert_eq!(rows.len(), 30);
        let first_row = format!("[ ] [#] {}", "[ ] ".repeat(28));
        assert!(rows[0].ends_with(&first_row));
    }

    #[test]
    fn test_run_stops_after_limit() {
        let mut driver = ConsoleDriver::new(config(Some(2))).unwrap();
        let mut out = Vec::new();
        driver.run(&mut out).unwrap();

        assert_eq!(driver.generation(), 2);
        // The blinker is back in its horizontal phase
        assert!(driver.board().cell(15, 3).is_alive());
        assert!(driver.board().cell(17, 3).is_alive());
        assert!(!driver.board().cell(16, 2).is_alive());
    }
}
