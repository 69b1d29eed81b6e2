//! Snake Arcade - a single-player arcade Snake game
//!
//! This library provides:
//! - Core game rules (game module): movement, collisions, levels, spawning
//! - Keyboard input mapping (input module)
//! - Window rendering (render module)
//! - Synthesized tone sound effects (audio module)
//! - High-score persistence (score module)
//! - The interactive session loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod score;
