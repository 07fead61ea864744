use crate::Coords;
use std::io::{self, stdout, Stdout, Write};

use crossterm::terminal::ClearType;
use crossterm::{cursor, execute, queue, style, terminal};

/// The handful of terminal operations the game needs. Positions are 1-indexed.
pub trait Terminal {
    fn size(&mut self) -> io::Result<Coords>;
    fn clear(&mut self) -> io::Result<()>;
    fn move_cursor(&mut self, pos: Coords) -> io::Result<()>;
    fn draw(&mut self, text: &str) -> io::Result<()>;
    fn render(&mut self) -> io::Result<()>;
    fn hide_cursor(&mut self) -> io::Result<()>;
    fn show_cursor(&mut self) -> io::Result<()>;
}

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }
}

impl Terminal for TermManager {
    fn size(&mut self) -> io::Result<Coords> {
        // Queried every time so a resize takes effect on the next tick
        let (width, height) = terminal::size()?;
        Ok((width as i32, height as i32))
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))
    }

    fn move_cursor(&mut self, pos: Coords) -> io::Result<()> {
        let (x, y) = to_cell(pos);
        queue!(self.stdout, cursor::MoveTo(x, y))
    }

    fn draw(&mut self, text: &str) -> io::Result<()> {
        queue!(self.stdout, style::Print(text))
    }

    fn render(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking)
    }
}

/// Maps a 1-indexed position onto crossterm's 0-indexed cells. Row 0 and row 1
/// share the top line.
fn to_cell(pos: Coords) -> (u16, u16) {
    let clamp = |v: i32| (v - 1).clamp(0, u16::MAX as i32) as u16;
    (clamp(pos.0), clamp(pos.1))
}

/// Keeps the terminal in raw mode while alive and restores it when dropped, on
/// every exit path including unwinding.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(RawModeGuard { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            log::error!("failed to disable raw mode: {}", err);
        }
        let _ = execute!(stdout(), cursor::Show);
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Clear,
        MoveCursor(Coords),
        Draw(String),
        Render,
        HideCursor,
        ShowCursor,
    }

    /// Records every call instead of touching a real terminal.
    pub struct RecordingTerminal {
        pub size: Coords,
        pub calls: Vec<Call>,
    }

    impl RecordingTerminal {
        pub fn new(size: Coords) -> Self {
            RecordingTerminal { size, calls: vec![] }
        }

        /// Text drawn at each cursor position since the last clear.
        pub fn screen(&self) -> Vec<(Coords, String)> {
            let start = self.calls.iter().rposition(|c| *c == Call::Clear).map_or(0, |i| i + 1);
            let mut cursor = (1, 1);
            let mut drawn = vec![];

            for call in &self.calls[start..] {
                match call {
                    Call::MoveCursor(pos) => cursor = *pos,
                    Call::Draw(text) => drawn.push((cursor, text.clone())),
                    _ => {}
                }
            }

            drawn
        }
    }

    impl Terminal for RecordingTerminal {
        fn size(&mut self) -> io::Result<Coords> {
            Ok(self.size)
        }

        fn clear(&mut self) -> io::Result<()> {
            self.calls.push(Call::Clear);
            Ok(())
        }

        fn move_cursor(&mut self, pos: Coords) -> io::Result<()> {
            self.calls.push(Call::MoveCursor(pos));
            Ok(())
        }

        fn draw(&mut self, text: &str) -> io::Result<()> {
            self.calls.push(Call::Draw(text.to_string()));
            Ok(())
        }

        fn render(&mut self) -> io::Result<()> {
            self.calls.push(Call::Render);
            Ok(())
        }

        fn hide_cursor(&mut self) -> io::Result<()> {
            self.calls.push(Call::HideCursor);
            Ok(())
        }

        fn show_cursor(&mut self) -> io::Result<()> {
            self.calls.push(Call::ShowCursor);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_map_to_zero_indexed_cells() {
        assert_eq!(to_cell((1, 1)), (0, 0));
        assert_eq!(to_cell((10, 4)), (9, 3));
        assert_eq!(to_cell((5, 0)), (4, 0));
        assert_eq!(to_cell((-3, 2)), (0, 1));
    }
}
