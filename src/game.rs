use log::debug;
use rand::Rng;

use crate::snake::{Direction, Snake};
use crate::Coords;

/// Why a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Ending {
    HitWall,
    HitSelf,
    Interrupted,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Moved { ate_food: bool },
    Over(Ending),
}

pub struct Game<R: Rng> {
    score: u64,
    snake: Snake,
    food: Coords,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// New game on a `board` of (width, height) cells: one segment at the centre heading north.
    pub fn new(board: Coords, mut rng: R) -> Self {
        let center = (board.0 / 2, board.1 / 2);
        let food = random_position(board, &mut rng);
        Game { score: 0, snake: Snake::new(center, Direction::North), food, rng }
    }

    #[cfg(test)]
    pub fn with_parts(snake: Snake, food: Coords, rng: R) -> Self {
        Game { score: 0, snake, food, rng }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coords {
        self.food
    }

    /// Advances one tick heading `direction`. The board is passed in per tick so a
    /// resized terminal moves the walls right away.
    pub fn tick(&mut self, direction: Direction, board: Coords) -> Step {
        self.snake.set_direction(direction);
        let new_head = self.snake.next_head();

        if new_head.0 < 1 || new_head.1 < 1 || new_head.0 > board.0 || new_head.1 > board.1 {
            debug!("hit the wall at {:?} heading {:?}", new_head, self.snake.get_direction());
            return Step::Over(Ending::HitWall);
        }

        if self.snake.occupies(new_head) {
            debug!("hit own body at {:?} heading {:?}", new_head, self.snake.get_direction());
            return Step::Over(Ending::HitSelf);
        }

        let ate_food = new_head == self.food;
        self.snake.advance(new_head, ate_food);

        if ate_food {
            self.score += 1;
            self.place_food(board);
        }

        Step::Moved { ate_food }
    }

    // Only the previous food cell is excluded; the new food may land under the body.
    fn place_food(&mut self, board: Coords) {
        let single_cell = board.0 <= 1 && board.1 <= 2;

        loop {
            let candidate = random_position(board, &mut self.rng);
            if candidate != self.food || single_cell {
                self.food = candidate;
                return;
            }
        }
    }
}

/// Uniform cell with x in [1, width] and y in [2, height]; row 1 belongs to the score line.
fn random_position<R: Rng>(board: Coords, rng: &mut R) -> Coords {
    let x = rng.gen_range(1..=board.0.max(1));
    let y = rng.gen_range(2..=board.1.max(2));
    (x, y)
}
