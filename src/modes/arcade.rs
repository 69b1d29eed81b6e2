use macroquad::prelude::{get_time, next_frame};

use crate::audio::SoundBank;
use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::InputHandler;
use crate::render::Renderer;
use crate::score::HighscoreStore;

/// The single interactive game session: owns the state, paces the ticks,
/// and wires input, audio, and the high-score store together.
///
/// A finished game stays on its end screen; starting over means restarting
/// the process.
pub struct ArcadeMode {
    engine: GameEngine,
    state: GameState,
    renderer: Renderer,
    sounds: SoundBank,
    store: HighscoreStore,
    last_tick: f64,
}

impl ArcadeMode {
    pub fn new(config: GameConfig, store: HighscoreStore, sounds: SoundBank) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.new_game(store.load());

        Self {
            engine,
            state,
            renderer: Renderer::new(config),
            sounds,
            store,
            last_tick: 0.0,
        }
    }

    pub async fn run(mut self) {
        loop {
            self.handle_input();
            self.update(get_time());
            self.renderer.render(&self.state);
            next_frame().await;
        }
    }

    /// Direction changes apply immediately; between ticks the last accepted
    /// press wins.
    fn handle_input(&mut self) {
        for direction in InputHandler::poll() {
            self.state.snake.steer(direction);
        }
    }

    /// Run one tick once the state's current interval has elapsed. The
    /// interval is re-read every frame, so a level-up speeds the game up
    /// from the next firing on.
    fn update(&mut self, now: f64) {
        if !self.state.running {
            return;
        }

        let interval = self.state.tick_ms as f64 / 1000.0;
        if now - self.last_tick < interval {
            return;
        }
        self.last_tick = now;

        let outcome = self.engine.tick(&mut self.state);

        if outcome.ate_food {
            self.sounds.play_eat();
        }

        if outcome.collision.is_some() {
            self.sounds.play_game_over();
            self.state.highscore = self.store.record(self.state.score, self.state.highscore);
        }
    }
}
