//! Console variant: runs the seeded pattern and prints every generation.

use std::io;

use anyhow::{Context, Result};
use env_logger::Env;
use life_board::{ConsoleConfig, ConsoleDriver};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut driver = ConsoleDriver::new(ConsoleConfig::default())
        .context("failed to seed the console board")?;
    let mut stdout = io::stdout().lock();
    driver.run(&mut stdout).context("failed to print frame")
}
