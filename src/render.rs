use std::io;

use rand::Rng;

use crate::game::Game;
use crate::term::Terminal;
use crate::Coords;

pub struct Glyphs {
    pub head: char,
    pub body: char,
    pub food: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs { head: 'O', body: 'o', food: '*' }
    }
}

/// Draws one frame of `game`: status line, food, then the snake head first.
pub fn draw_frame<T: Terminal, R: Rng>(term: &mut T, game: &Game<R>, glyphs: &Glyphs) -> io::Result<()> {
    term.clear()?;

    let (width, _) = term.size()?;
    let status = format!("score: {}", game.score());
    term.move_cursor((width / 2 - status.len() as i32 / 2, 0))?;
    term.draw(&status)?;

    print_at(term, game.food(), glyphs.food)?;

    for (i, pos) in game.snake().body().iter().enumerate() {
        let ch = if i == 0 { glyphs.head } else { glyphs.body };
        print_at(term, *pos, ch)?;
    }

    term.render()
}

pub fn draw_game_over<T: Terminal>(term: &mut T, score: u64, anchor: Coords) -> io::Result<()> {
    term.clear()?;
    term.show_cursor()?;
    term.move_cursor(anchor)?;
    term.draw(&format!("game over. score: {}", score))?;
    term.render()
}

fn print_at<T: Terminal>(term: &mut T, pos: Coords, ch: char) -> io::Result<()> {
    term.move_cursor(pos)?;
    term.draw(ch.encode_utf8(&mut [0; 4]))
}
