use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::action::Direction;
use super::board::{Board, Position};

/// Largest board, in cells per side, the terminal renderer will lay out
pub const MAX_CELLS_PER_SIDE: i32 = 200;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board, in board units
    pub board_size: i32,
    /// Side length of one cell; also the distance moved per tick
    pub cell_size: i32,
    /// Where a fresh snake starts (must be a cell center)
    pub start_x: i32,
    pub start_y: i32,
    /// Heading of a fresh snake
    pub start_direction: Direction,
    /// Delay between ticks while playing
    pub tick_interval_ms: u64,

    pub snake_color: String,
    pub food_color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 600,
            cell_size: 30,
            start_x: 315,
            start_y: 315,
            start_direction: Direction::Right,
            tick_interval_ms: 200,
            snake_color: "green".to_string(),
            food_color: "red".to_string(),
        }
    }
}

impl GameConfig {
    /// Read a JSON configuration file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be positive");
        ensure!(
            self.board_size > 0 && self.board_size % self.cell_size == 0,
            "board_size {} is not a positive multiple of cell_size {}",
            self.board_size,
            self.cell_size
        );
        ensure!(
            self.board_size / self.cell_size <= MAX_CELLS_PER_SIDE,
            "board of {} cells per side exceeds the limit of {}",
            self.board_size / self.cell_size,
            MAX_CELLS_PER_SIDE
        );
        // A head one cell past the far edge must still be representable
        ensure!(
            self.board_size.checked_add(self.cell_size).is_some(),
            "board_size {} plus cell_size {} overflows",
            self.board_size,
            self.cell_size
        );
        ensure!(
            self.board().is_cell_center(self.start_position()),
            "start position ({}, {}) is not a cell center on the board",
            self.start_x,
            self.start_y
        );
        ensure!(self.tick_interval_ms > 0, "tick_interval_ms must be positive");
        Ok(())
    }

    pub fn board(&self) -> Board {
        Board::new(self.board_size, self.cell_size)
    }

    pub fn start_position(&self) -> Position {
        Position::new(self.start_x, self.start_y)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
