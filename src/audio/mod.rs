pub mod tone;

pub use tone::{SoundBank, Tone, EAT_TONE, GAME_OVER_TONE};
