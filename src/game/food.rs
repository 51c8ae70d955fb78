use rand::Rng;

use super::board::{Board, Position};

/// The single piece of food on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub position: Position,
    pub color: String,
}

impl Food {
    pub fn new(position: Position, color: impl Into<String>) -> Self {
        Self {
            position,
            color: color.into(),
        }
    }

    /// Move to a fresh random cell.
    ///
    /// The new cell may be one the snake occupies.
    pub fn relocate<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) {
        self.position = board.random_cell(rng);
    }
}
