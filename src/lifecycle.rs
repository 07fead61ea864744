use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam_channel::{bounded, Receiver, Sender};
use log::{debug, info};
use rand::Rng;

use crate::game::{Ending, Game, Step};
use crate::input::{spawn_listener, Halt, SharedDirection};
use crate::render::{draw_frame, draw_game_over, Glyphs};
use crate::snake::Direction;
use crate::term::{RawModeGuard, TermManager, Terminal};
use crate::Coords;

const TICK_INTERVAL_MS: u64 = 50;

pub struct Settings {
    pub tick: Duration,
    pub glyphs: Glyphs,
    pub game_over_at: Coords,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            tick: Duration::from_millis(TICK_INTERVAL_MS),
            glyphs: Glyphs::default(),
            game_over_at: (1, 1),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub ending: Ending,
    pub score: u64,
}

/// Plays one game on the real terminal, from raw mode to the game-over screen.
/// The terminal is restored when this returns, whether it succeeded or not.
pub fn play(settings: &Settings) -> Result<Outcome> {
    let mut term = TermManager::new();
    let (halt_tx, halt_rx) = bounded(1);

    let _raw = RawModeGuard::enable().context("failed to open the terminal in raw mode")?;
    startup(&mut term, halt_tx.clone())?;

    let direction = Arc::new(SharedDirection::new(Direction::North));
    spawn_listener(Arc::clone(&direction), halt_tx).context("failed to start the input listener")?;

    let board = term.size().context("failed to read terminal size")?;
    info!("starting game on a {}x{} board", board.0, board.1);

    let mut game = Game::new(board, rand::thread_rng());
    let ending = run(&mut term, &mut game, &direction, &halt_rx, settings)?;

    game_over(&mut term, game.score(), settings)?;

    Ok(Outcome { ending, score: game.score() })
}

pub fn startup<T: Terminal>(term: &mut T, halt: Sender<Halt>) -> Result<()> {
    term.hide_cursor().context("failed to hide the cursor")?;

    ctrlc::set_handler(move || {
        let _ = halt.try_send(Halt::Interrupted);
    })
    .context("failed to install the interrupt handler")?;

    Ok(())
}

/// Ticks until the snake crashes or a halt arrives. Each tick reads the
/// direction once, updates the game, draws it and sleeps.
pub fn run<T: Terminal, R: Rng>(
    term: &mut T,
    game: &mut Game<R>,
    direction: &SharedDirection,
    halts: &Receiver<Halt>,
    settings: &Settings,
) -> Result<Ending> {
    loop {
        match halts.try_recv() {
            Ok(Halt::Interrupted) => return Ok(Ending::Interrupted),
            Ok(Halt::InputFailed(err)) => return Err(err).context("reading terminal input failed"),
            Err(_) => {}
        }

        let board = term.size().context("failed to read terminal size")?;

        match game.tick(direction.load(), board) {
            Step::Over(ending) => return Ok(ending),
            Step::Moved { ate_food: true } => {
                debug!("food eaten, score {}, length {}, next food at {:?}", game.score(), game.snake().len(), game.food());
            }
            Step::Moved { ate_food: false } => {}
        }

        draw_frame(term, game, &settings.glyphs).context("failed to draw frame")?;
        sleep(settings.tick);
    }
}

pub fn game_over<T: Terminal>(term: &mut T, score: u64, settings: &Settings) -> Result<()> {
    draw_game_over(term, score, settings.game_over_at).context("failed to draw the game-over screen")
}
