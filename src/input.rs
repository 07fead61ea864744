use std::io;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::Sender;
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{error, info};

use crate::snake::Direction::{self, *};

/// Why the tick loop has to stop before the snake crashes.
#[derive(Debug)]
pub enum Halt {
    Interrupted,
    InputFailed(io::Error),
}

/// Latest direction asked for by the player. Last write wins; the loop reads it
/// once at the start of every tick.
pub struct SharedDirection(AtomicU8);

impl SharedDirection {
    pub fn new(direction: Direction) -> Self {
        SharedDirection(AtomicU8::new(direction as u8))
    }

    pub fn store(&self, direction: Direction) {
        self.0.store(direction as u8, Ordering::Relaxed);
    }

    pub fn load(&self) -> Direction {
        match self.0.load(Ordering::Relaxed) {
            0 => North,
            1 => East,
            2 => South,
            _ => West,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Steer(Direction),
    Interrupt,
    Ignore,
}

fn key_action(ev: &KeyEvent) -> KeyAction {
    if ev.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    match ev.code {
        // Raw mode swallows SIGINT, so Ctrl+C shows up here as a key
        KeyCode::Char('c') if ev.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Interrupt,
        KeyCode::Up => KeyAction::Steer(North),
        KeyCode::Down => KeyAction::Steer(South),
        KeyCode::Right => KeyAction::Steer(East),
        KeyCode::Left => KeyAction::Steer(West),
        _ => KeyAction::Ignore,
    }
}

/// Applies one key event. Returns false once the listener should stop.
fn handle_event(event: Event, direction: &SharedDirection, halt: &Sender<Halt>) -> bool {
    let key = match event {
        Event::Key(key) => key,
        _ => return true,
    };

    match key_action(&key) {
        KeyAction::Steer(dir) => direction.store(dir),
        KeyAction::Interrupt => {
            let _ = halt.try_send(Halt::Interrupted);
            return false;
        }
        KeyAction::Ignore => {}
    }

    true
}

/// Spawns the thread that blocks on terminal key events for the rest of the
/// game. It is never joined; it dies with the process.
pub fn spawn_listener(direction: Arc<SharedDirection>, halt: Sender<Halt>) -> io::Result<()> {
    thread::Builder::new()
        .name("input".into())
        .spawn(move || {
            info!("input listener started");
            loop {
                match read() {
                    Ok(event) => {
                        if !handle_event(event, &direction, &halt) {
                            return;
                        }
                    }
                    Err(err) => {
                        error!("reading terminal input failed: {}", err);
                        let _ = halt.try_send(Halt::InputFailed(err));
                        return;
                    }
                }
            }
        })?;

    Ok(())
}
