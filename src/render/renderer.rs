use macroquad::prelude::*;

use crate::game::{GameConfig, GameState, Position};

const FOOD_COLOR: Color = RED;
const FOOD_OUTLINE: Color = WHITE;
const OBSTACLE_COLOR: Color = GRAY;
const HEAD_COLOR: Color = YELLOW;
const BODY_COLOR: Color = GREEN;
const TEXT_COLOR: Color = WHITE;

const HUD_FONT_SIZE: f32 = 20.0;
const GAME_OVER_FONT_SIZE: f32 = 40.0;
const FINAL_SCORE_FONT_SIZE: f32 = 25.0;

/// Draws the game state to the window. Rendering never mutates state.
pub struct Renderer {
    config: GameConfig,
}

impl Renderer {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, state: &GameState) {
        clear_background(BLACK);

        if state.running {
            self.draw_playfield(state);
        } else {
            self.draw_game_over(state);
        }
    }

    fn draw_playfield(&self, state: &GameState) {
        let cell = self.config.cell as f32;

        // Food: filled circle with an outline
        let center_x = state.food.x as f32 + cell / 2.0;
        let center_y = state.food.y as f32 + cell / 2.0;
        draw_circle(center_x, center_y, cell / 2.0, FOOD_COLOR);
        draw_circle_lines(center_x, center_y, cell / 2.0, 1.0, FOOD_OUTLINE);

        for obstacle in &state.obstacles {
            self.draw_cell(*obstacle, OBSTACLE_COLOR);
        }

        for (i, segment) in state.snake.body.iter().enumerate() {
            let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
            self.draw_cell(*segment, color);
        }

        draw_text(
            &format!("Score: {}", state.score),
            10.0,
            20.0,
            HUD_FONT_SIZE,
            TEXT_COLOR,
        );
        draw_text(
            &format!("Highscore: {}", state.highscore),
            10.0,
            40.0,
            HUD_FONT_SIZE,
            TEXT_COLOR,
        );
        draw_text(
            &format!("Level: {}", state.level),
            self.config.board_width as f32 - 120.0,
            20.0,
            HUD_FONT_SIZE,
            TEXT_COLOR,
        );
    }

    fn draw_game_over(&self, state: &GameState) {
        let width = self.config.board_width as f32;
        let height = self.config.board_height as f32;

        let msg = "GAME OVER";
        let dims = measure_text(msg, None, GAME_OVER_FONT_SIZE as u16, 1.0);
        draw_text(
            msg,
            (width - dims.width) / 2.0,
            height / 2.0,
            GAME_OVER_FONT_SIZE,
            TEXT_COLOR,
        );

        draw_text(
            &format!("Score: {}", state.score),
            width / 2.0 - 50.0,
            height / 2.0 + 40.0,
            FINAL_SCORE_FONT_SIZE,
            TEXT_COLOR,
        );
        draw_text(
            &format!("Highscore: {}", state.highscore),
            width / 2.0 - 80.0,
            height / 2.0 + 80.0,
            FINAL_SCORE_FONT_SIZE,
            TEXT_COLOR,
        );
    }

    fn draw_cell(&self, pos: Position, color: Color) {
        let cell = self.config.cell as f32;
        draw_rectangle(pos.x as f32, pos.y as f32, cell, cell, color);
    }
}
