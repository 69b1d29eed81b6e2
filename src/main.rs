use macroquad::prelude::Conf;

use snake_arcade::audio::SoundBank;
use snake_arcade::game::GameConfig;
use snake_arcade::modes::ArcadeMode;
use snake_arcade::score::HighscoreStore;

fn window_conf() -> Conf {
    let config = GameConfig::default();
    Conf {
        window_title: "Snake Arcade".to_owned(),
        window_width: config.board_width,
        window_height: config.board_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let sounds = SoundBank::load().await;
    let mode = ArcadeMode::new(GameConfig::default(), HighscoreStore::default(), sounds);
    mode.run().await;
}
