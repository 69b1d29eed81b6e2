pub mod highscore;

pub use highscore::HighscoreStore;
