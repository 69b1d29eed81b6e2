use macroquad::prelude::{is_key_pressed, KeyCode};

use crate::game::Direction;

/// The four keys the game listens to; everything else is ignored
const ARROW_KEYS: [KeyCode; 4] = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right];

pub struct InputHandler;

impl InputHandler {
    /// Map a key to a direction change. Only the arrow keys do anything.
    pub fn map_key(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::Up => Some(Direction::Up),
            KeyCode::Down => Some(Direction::Down),
            KeyCode::Left => Some(Direction::Left),
            KeyCode::Right => Some(Direction::Right),
            _ => None,
        }
    }

    /// Collect the direction presses seen this frame, in key order.
    /// Rapid presses between ticks overwrite each other downstream; there is
    /// no buffering.
    pub fn poll() -> Vec<Direction> {
        ARROW_KEYS
            .into_iter()
            .filter(|key| is_key_pressed(*key))
            .filter_map(Self::map_key)
            .collect()
    }
}
