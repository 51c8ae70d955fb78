use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true for up and down
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Velocity for moving one cell in this direction.
    ///
    /// The y axis grows upward, so `Up` is `+cell`.
    pub fn velocity(&self, cell: i32) -> Velocity {
        match self {
            Direction::Up => Velocity::new(0, cell),
            Direction::Down => Velocity::new(0, -cell),
            Direction::Left => Velocity::new(-cell, 0),
            Direction::Right => Velocity::new(cell, 0),
        }
    }
}

/// Per-tick displacement shared by the whole snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Velocity {
    pub vx: i32,
    pub vy: i32,
}

impl Velocity {
    pub fn new(vx: i32, vy: i32) -> Self {
        Self { vx, vy }
    }
}

/// Event delivered to the game controller by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the start screen
    Start,
    /// Change heading, subject to the anti-reversal rule
    Turn(Direction),
    Restart,
    Quit,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Turn(direction)
    }
}
