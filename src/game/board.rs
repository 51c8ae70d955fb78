use rand::Rng;

/// A position on the board, in board units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The fixed square playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    side: i32,
    cell: i32,
}

impl Board {
    pub fn new(side: i32, cell: i32) -> Self {
        Self { side, cell }
    }

    pub fn side(&self) -> i32 {
        self.side
    }

    pub fn cell(&self) -> i32 {
        self.cell
    }

    pub fn cells_per_side(&self) -> i32 {
        self.side / self.cell
    }

    /// Check if a position lies inside `[0, side)` on both axes
    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.side && pos.y >= 0 && pos.y < self.side
    }

    /// Whether the position sits on the center of some in-bounds cell
    pub fn is_cell_center(&self, pos: Position) -> bool {
        let half = self.cell / 2;
        self.is_within_bounds(pos) && (pos.x - half) % self.cell == 0 && (pos.y - half) % self.cell == 0
    }

    /// Uniformly random cell center, x and y drawn independently
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let n = self.cells_per_side();
        let half = self.cell / 2;
        let x = half + self.cell * rng.gen_range(0..n);
        let y = half + self.cell * rng.gen_range(0..n);
        Position::new(x, y)
    }

    /// Column and row of the cell holding `pos`, row 0 at the top
    pub fn grid_index(&self, pos: Position) -> Option<(usize, usize)> {
        if !self.is_within_bounds(pos) {
            return None;
        }
        let col = pos.x / self.cell;
        let row = self.cells_per_side() - 1 - pos.y / self.cell;
        Some((col as usize, row as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(315, 315);
        assert_eq!(pos.moved_by(30, 0), Position::new(345, 315));
        assert_eq!(pos.moved_by(0, -30), Position::new(315, 285));
    }

    #[test]
    fn test_bounds_checking() {
        let board = Board::new(600, 30);

        assert!(board.is_within_bounds(Position::new(0, 0)));
        assert!(board.is_within_bounds(Position::new(599, 599)));
        assert!(!board.is_within_bounds(Position::new(600, 15)));
        assert!(!board.is_within_bounds(Position::new(15, 600)));
        assert!(!board.is_within_bounds(Position::new(-15, 15)));
        assert!(!board.is_within_bounds(Position::new(15, -15)));
    }

    #[test]
    fn test_cell_centers() {
        let board = Board::new(600, 30);
        assert_eq!(board.cells_per_side(), 20);
        assert!(board.is_cell_center(Position::new(15, 15)));
        assert!(board.is_cell_center(Position::new(585, 315)));
        assert!(!board.is_cell_center(Position::new(30, 15)));
        assert!(!board.is_cell_center(Position::new(615, 15)));
    }

    #[test]
    fn test_random_cell_is_valid() {
        let board = Board::new(600, 30);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let pos = board.random_cell(&mut rng);
            assert!(board.is_cell_center(pos), "{pos:?} is not a cell center");
        }
    }

    #[test]
    fn test_random_cell_covers_edges() {
        let board = Board::new(90, 30);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(board.random_cell(&mut rng));
        }

        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_grid_index() {
        let board = Board::new(600, 30);
        assert_eq!(board.grid_index(Position::new(15, 585)), Some((0, 0)));
        assert_eq!(board.grid_index(Position::new(15, 15)), Some((0, 19)));
        assert_eq!(board.grid_index(Position::new(315, 315)), Some((10, 9)));
        assert_eq!(board.grid_index(Position::new(615, 15)), None);
    }
}
