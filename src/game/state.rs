use super::direction::Direction;

/// A position on the board, in pixels
///
/// While the game is running every stored position is a multiple of the cell
/// size; the head may momentarily step outside the board, which ends the game.
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

    /// Move position one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction, cell: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * cell, dy * cell)
    }
}

/// The snake: body segments with the head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Position>,
    /// Current direction of travel
    pub direction: Direction,
}

impl Snake {
    /// Create a new single-segment snake at the given head position
    pub fn new(head: Position, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Body segments excluding the head
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if a position collides with the snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Apply a direction change, rejecting an exact 180-degree reversal.
    /// The latest accepted press before a tick is the one that counts.
    pub fn steer(&mut self, next: Direction) {
        if !self.direction.is_opposite(next) {
            self.direction = next;
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What the snake's head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the board
    Wall,
    /// Head hit the snake's own body
    SelfCollision,
    /// Head hit an obstacle
    Obstacle,
}

/// Complete game state, owned by the loop thread and mutated in place
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub obstacles: Vec<Position>,
    pub score: u32,
    pub level: u32,
    /// Current tick interval in milliseconds; shrinks on level-up
    pub tick_ms: u64,
    pub running: bool,
    /// Best score loaded at startup, updated when beaten
    pub highscore: u32,
}

impl GameState {
    pub fn new(snake: Snake, food: Position, tick_ms: u64, highscore: u32) -> Self {
        Self {
            snake,
            food,
            obstacles: Vec::new(),
            score: 0,
            level: 1,
            tick_ms,
            running: true,
            highscore,
        }
    }
}
