mod game;
mod input;
mod lifecycle;
mod render;
mod snake;
mod term;

use std::{env, fs::File};

use simplelog::{Config, LevelFilter, WriteLogger};

/// A 1-indexed (x, y) cell, or a (width, height) pair for the board.
pub type Coords = (i32, i32);

const LOG_FILE_NAME: &str = "term-snake.log";

fn main() -> anyhow::Result<()> {
    init_logging();

    // Every game-over path, interrupts included, exits with success
    let outcome = lifecycle::play(&lifecycle::Settings::default())?;
    log::info!("game over ({:?}), final score {}", outcome.ending, outcome.score);
    Ok(())
}

// The screen belongs to the game, so logs go to a file. No file, no logs.
fn init_logging() {
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let path = env::temp_dir().join(LOG_FILE_NAME);

    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, Config::default(), file);
    }
}
