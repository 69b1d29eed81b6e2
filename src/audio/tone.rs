//! Sine-tone synthesis and playback
//!
//! Tones are rendered once at startup as mono 8-bit PCM at 44.1kHz, wrapped
//! in a WAV container so the audio backend can decode them, and then played
//! fire-and-forget. Playback happens on the mixer's own thread and never
//! blocks a game tick; a backend or decode failure just leaves the game
//! silent.

use macroquad::audio::{load_sound_from_bytes, play_sound, PlaySoundParams, Sound};

const SAMPLE_RATE: u32 = 44_100;
const BITS_PER_SAMPLE: u16 = 8;
const CHANNELS: u16 = 1;

/// A fixed-frequency beep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub freq_hz: u32,
    pub duration_ms: u32,
}

/// Played when the snake eats food
pub const EAT_TONE: Tone = Tone {
    freq_hz: 800,
    duration_ms: 70,
};

/// Played once when the game ends
pub const GAME_OVER_TONE: Tone = Tone {
    freq_hz: 200,
    duration_ms: 500,
};

/// Render a tone as a complete in-memory WAV file (unsigned 8-bit PCM mono)
pub fn synthesize_wav(tone: Tone) -> Vec<u8> {
    let num_samples = tone.duration_ms * SAMPLE_RATE / 1000;
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = SAMPLE_RATE * block_align as u32;
    let data_size = num_samples * block_align as u32;
    let chunk_size = 36 + data_size;

    let mut data = Vec::with_capacity(44 + num_samples as usize);

    // RIFF header
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&chunk_size.to_le_bytes());
    data.extend_from_slice(b"WAVE");
    // fmt chunk
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM format
    data.extend_from_slice(&CHANNELS.to_le_bytes());
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
    // data chunk
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    // 8-bit WAV samples are unsigned, centered on 128
    let period = SAMPLE_RATE as f64 / tone.freq_hz as f64;
    for i in 0..num_samples {
        let angle = i as f64 / period * std::f64::consts::TAU;
        data.push((128.0 + angle.sin() * 127.0) as u8);
    }

    data
}

/// The game's two sound effects, decoded once at startup.
/// A slot stays empty when decoding fails and playback becomes a no-op.
pub struct SoundBank {
    eat: Option<Sound>,
    game_over: Option<Sound>,
}

impl SoundBank {
    pub async fn load() -> Self {
        Self {
            eat: load_sound_from_bytes(&synthesize_wav(EAT_TONE)).await.ok(),
            game_over: load_sound_from_bytes(&synthesize_wav(GAME_OVER_TONE))
                .await
                .ok(),
        }
    }

    /// A bank that plays nothing; used by tests
    pub fn silent() -> Self {
        Self {
            eat: None,
            game_over: None,
        }
    }

    pub fn play_eat(&self) {
        Self::play(&self.eat);
    }

    pub fn play_game_over(&self) {
        Self::play(&self.game_over);
    }

    fn play(sound: &Option<Sound>) {
        if let Some(sound) = sound {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: 1.0,
                },
            );
        }
    }
}
