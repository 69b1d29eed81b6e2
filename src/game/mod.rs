//! Core game logic for Snake Arcade
//!
//! Everything in here is plain in-memory state with no rendering, input, or
//! audio dependencies, so the rules can be tested headless.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionType, GameState, Position, Snake};
