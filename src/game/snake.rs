use super::{
    action::{Direction, Velocity},
    board::{Board, Position},
    food::Food,
};

/// Type of collision that ended the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Outcome of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepResult {
    /// Whether the new head landed on the food
    pub ate_food: bool,
    /// Collision detected after moving, if any
    pub collision: Option<CollisionType>,
}

impl StepResult {
    pub fn is_game_over(&self) -> bool {
        self.collision.is_some()
    }
}

/// The player's snake.
///
/// Segment 0 is the rendered head. The last segment is the most recently
/// grown one and is the one moved first on each step.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    head: Position,
    velocity: Velocity,
    cell: i32,
    segments: Vec<Position>,
    color: String,
    game_over: bool,
}

impl Snake {
    /// Create a one-segment snake at `start`
    pub fn new(start: Position, direction: Direction, cell: i32, color: impl Into<String>) -> Self {
        let mut snake = Self {
            head: start,
            velocity: direction.velocity(cell),
            cell,
            segments: Vec::new(),
            color: color.into(),
            game_over: false,
        };
        snake.grow();
        snake
    }

    /// Build a snake with an arbitrary body, head at index 0
    #[cfg(test)]
    pub(crate) fn from_segments(segments: Vec<Position>, velocity: Velocity, cell: i32) -> Self {
        Self {
            head: segments[0],
            velocity,
            cell,
            segments,
            color: "green".to_string(),
            game_over: false,
        }
    }

    /// Position the next step is computed from
    pub fn head(&self) -> Position {
        self.head
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Never true for a constructed snake
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a segment stacked on the current head position
    pub fn grow(&mut self) {
        self.segments.push(self.head);
    }

    /// Change heading unless already moving along the requested axis.
    ///
    /// Returns whether the velocity changed.
    pub fn turn(&mut self, direction: Direction) -> bool {
        let allowed = if direction.is_vertical() {
            self.velocity.vy == 0
        } else {
            self.velocity.vx == 0
        };

        if allowed {
            self.velocity = direction.velocity(self.cell);
        }
        allowed
    }

    /// Advance one tick
    pub fn step(&mut self, food: &Food, board: &Board) -> StepResult {
        if self.game_over {
            return StepResult::default();
        }

        self.head = self.head.moved_by(self.velocity.vx, self.velocity.vy);
        let head = self.head;

        if let Some(newest) = self.segments.last_mut() {
            *newest = head;
        }

        let ate_food = head == food.position;
        if ate_food {
            self.grow();
        }

        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        self.segments[0] = head;

        let mut collision = None;

        if !board.is_within_bounds(head) {
            collision = Some(CollisionType::Wall);
        }

        let len = self.segments.len();
        if collision.is_none() && len > 2 && self.segments[1..len - 1].contains(&head) {
            collision = Some(CollisionType::SelfCollision);
        }

        if collision.is_some() {
            self.game_over = true;
        }

        StepResult {
            ate_food,
            collision,
        }
    }
}
