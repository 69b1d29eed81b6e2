use serde::{Deserialize, Serialize};

use super::state::Position;

/// Configuration for the game
///
/// All coordinates are in logical pixels; `cell` is the grid quantum every
/// entity position is a multiple of.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in pixels
    pub board_width: i32,
    /// Board height in pixels
    pub board_height: i32,
    /// Cell size in pixels
    pub cell: i32,
    /// Starting cell of the snake head (in cell units)
    pub start_cell: (i32, i32),
    /// Initial tick interval in milliseconds
    pub initial_tick_ms: u64,
    /// Amount the tick interval shrinks per level-up
    pub tick_step_ms: u64,
    /// Fastest allowed tick interval
    pub min_tick_ms: u64,
    /// Obstacle count at level L (for L >= 2) is base_obstacles + L
    pub base_obstacles: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 600,
            board_height: 600,
            cell: 20,
            start_cell: (5, 5),
            initial_tick_ms: 150,
            tick_step_ms: 40,
            min_tick_ms: 50,
            base_obstacles: 4,
        }
    }
}

impl GameConfig {
    /// Number of cells across the board
    pub fn cols(&self) -> i32 {
        self.board_width / self.cell
    }

    /// Number of cells down the board
    pub fn rows(&self) -> i32 {
        self.board_height / self.cell
    }

    /// Starting head position in pixels
    pub fn start_position(&self) -> Position {
        Position::new(self.start_cell.0 * self.cell, self.start_cell.1 * self.cell)
    }

    /// Check if a position is within the board bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.board_width && pos.y >= 0 && pos.y < self.board_height
    }

    /// Obstacle count for a given level
    pub fn obstacle_count(&self, level: u32) -> u32 {
        self.base_obstacles + level
    }
}
