use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Default file name, resolved against the working directory
const HIGHSCORE_FILE: &str = "highscore.txt";

/// Persists the single high-score integer as one line of plain text.
///
/// Every failure mode (missing file, garbage content, write error) is
/// swallowed: loading falls back to 0 and saving just does nothing. A broken
/// high-score file must never take the game down.
pub struct HighscoreStore {
    path: PathBuf,
}

impl HighscoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored high-score, defaulting to 0 on any failure
    pub fn load(&self) -> u32 {
        self.try_load().unwrap_or(0)
    }

    /// Persist `score` if it beats `best`; returns the new best either way
    pub fn record(&self, score: u32, best: u32) -> u32 {
        if score > best {
            let _ = self.try_save(score);
            score
        } else {
            best
        }
    }

    fn try_load(&self) -> Result<u32> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let value = text
            .trim()
            .parse()
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(value)
    }

    fn try_save(&self, value: u32) -> Result<()> {
        fs::write(&self.path, format!("{value}\n"))
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

impl Default for HighscoreStore {
    fn default() -> Self {
        Self::new(HIGHSCORE_FILE)
    }
}
