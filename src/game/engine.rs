use super::{
    config::GameConfig,
    direction::Direction,
    state::{CollisionType, GameState, Position, Snake},
};
use rand::Rng;

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// The collision that ended the game, if any
    pub collision: Option<CollisionType>,
    /// The level reached this tick, if the score crossed a threshold
    pub new_level: Option<u32>,
}

/// The game engine that handles all movement, collision, and spawning logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the initial state: a single-segment snake heading right,
    /// food on the empty board, and the loaded high-score.
    pub fn new_game(&mut self, highscore: u32) -> GameState {
        let snake = Snake::new(self.config.start_position(), Direction::Right);
        let food = self.spawn_food(&[]);
        GameState::new(snake, food, self.config.initial_tick_ms, highscore)
    }

    /// Advance the state by one tick: move the snake, then run the collision
    /// checks in order (wall, self, obstacle, food). A terminating condition
    /// wins over food when the head satisfies both.
    pub fn tick(&mut self, state: &mut GameState) -> TickOutcome {
        if !state.running {
            return TickOutcome::default();
        }

        self.advance(state);

        let head = state.snake.head();

        if let Some(collision) = self.check_collision(state, head) {
            state.running = false;
            return TickOutcome {
                ate_food: false,
                collision: Some(collision),
                new_level: None,
            };
        }

        if head == state.food {
            // New tail starts off-board; the next tick's shift replaces it
            // with a real position.
            state
                .snake
                .body
                .push(Position::new(-self.config.cell, -self.config.cell));
            state.score += 1;
            state.food = self.spawn_food(&state.obstacles);
            let new_level = self.update_level(state);

            return TickOutcome {
                ate_food: true,
                collision: None,
                new_level,
            };
        }

        TickOutcome::default()
    }

    /// Shift every non-head segment to its predecessor's position, tail
    /// first, then move the head one cell in the current direction.
    fn advance(&self, state: &mut GameState) {
        let body = &mut state.snake.body;
        for i in (1..body.len()).rev() {
            body[i] = body[i - 1];
        }
        body[0] = body[0].moved_in_direction(state.snake.direction, self.config.cell);
    }

    /// Check the post-move head position for a terminating collision
    fn check_collision(&self, state: &GameState, head: Position) -> Option<CollisionType> {
        if !self.config.contains(head) {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        if state.obstacles.contains(&head) {
            return Some(CollisionType::Obstacle);
        }

        None
    }

    /// Level thresholds are checked by equality after the increment; the
    /// score grows by exactly one per food, so none can be skipped.
    fn update_level(&mut self, state: &mut GameState) -> Option<u32> {
        let level = match state.score {
            6 => 2,
            12 => 3,
            _ => return None,
        };
        self.set_level(state, level);
        Some(level)
    }

    fn set_level(&mut self, state: &mut GameState, level: u32) {
        state.level = level;

        if state.tick_ms > self.config.min_tick_ms {
            state.tick_ms -= self.config.tick_step_ms;
        }

        // Obstacles appear from level 2 on; the whole set is replaced.
        if level >= 2 {
            state.obstacles = self.spawn_obstacles(self.config.obstacle_count(level));
        }
    }

    /// Sample uniform cells until one not occupied by an obstacle is found.
    /// The snake body is deliberately not avoided.
    fn spawn_food(&mut self, obstacles: &[Position]) -> Position {
        loop {
            let pos = self.random_cell();
            if !obstacles.contains(&pos) {
                return pos;
            }
        }
    }

    /// Sample n independent uniform cells, with no avoidance of anything:
    /// an obstacle may land under the snake, the food, or another obstacle.
    fn spawn_obstacles(&mut self, n: u32) -> Vec<Position> {
        (0..n).map(|_| self.random_cell()).collect()
    }

    fn random_cell(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.config.cols()) * self.config.cell;
        let y = self.rng.gen_range(0..self.config.rows()) * self.config.cell;
        Position::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        GameEngine::new(GameConfig::default())
    }

    /// Place the food directly in the head's path so the next tick eats it
    fn put_food_ahead(state: &mut GameState, cell: i32) {
        state.food = state.snake.head().moved_in_direction(state.snake.direction, cell);
    }

    #[test]
    fn test_new_game() {
        let mut engine = engine();
        let state = engine.new_game(9);

        assert!(state.running);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(100, 100));
        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.tick_ms, 150);
        assert_eq!(state.highscore, 9);
    }

    #[test]
    fn test_head_moves_one_cell() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        state.food = Position::new(0, 0);

        let outcome = engine.tick(&mut state);

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(state.snake.head(), Position::new(120, 100));
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_tail_follows_head() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        state.food = Position::new(0, 0);
        state.snake.body = vec![
            Position::new(100, 100),
            Position::new(80, 100),
            Position::new(60, 100),
        ];

        engine.tick(&mut state);

        // Each segment takes its predecessor's previous position
        assert_eq!(
            state.snake.body,
            vec![
                Position::new(120, 100),
                Position::new(100, 100),
                Position::new(80, 100),
            ]
        );
    }

    #[test]
    fn test_eating_grows_by_one() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        put_food_ahead(&mut state, 20);

        let outcome = engine.tick(&mut state);

        assert!(outcome.ate_food);
        assert!(outcome.collision.is_none());
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 2);
        // The fresh tail sits off-board until the next shift
        assert_eq!(state.snake.body[1], Position::new(-20, -20));

        // Next tick replaces it with a real position
        state.food = Position::new(0, 0);
        engine.tick(&mut state);
        assert_eq!(state.snake.body[1], Position::new(120, 100));
    }

    #[test]
    fn test_length_never_decreases() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        state.food = Position::new(0, 0);

        let mut prev_len = state.snake.len();
        for _ in 0..5 {
            engine.tick(&mut state);
            assert!(state.snake.len() >= prev_len);
            prev_len = state.snake.len();
        }
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        state.snake.body[0] = Position::new(580, 100);
        state.food = Position::new(0, 0);

        let outcome = engine.tick(&mut state);

        assert!(!state.running);
        assert_eq!(outcome.collision, Some(CollisionType::Wall));
        assert!(!outcome.ate_food);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_wall_collision_all_sides() {
        for (start, dir) in [
            (Position::new(0, 100), Direction::Left),
            (Position::new(580, 100), Direction::Right),
            (Position::new(100, 0), Direction::Up),
            (Position::new(100, 580), Direction::Down),
        ] {
            let mut engine = engine();
            let mut state = engine.new_game(0);
            state.snake.body[0] = start;
            state.snake.direction = dir;
            state.food = Position::new(200, 200);

            let outcome = engine.tick(&mut state);
            assert_eq!(outcome.collision, Some(CollisionType::Wall));
            assert!(!state.running);
        }
    }

    #[test]
    fn test_self_collision() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        // Head at (100,100) moving up into a loop of its own body: after the
        // shift, the segment behind the head occupies (100,80).
        state.snake.body = vec![
            Position::new(100, 100),
            Position::new(80, 100),
            Position::new(80, 80),
            Position::new(100, 80),
            Position::new(120, 80),
        ];
        state.snake.direction = Direction::Up;
        state.food = Position::new(0, 0);

        let outcome = engine.tick(&mut state);

        assert!(!state.running);
        assert_eq!(outcome.collision, Some(CollisionType::SelfCollision));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_obstacle_collision() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        state.obstacles = vec![Position::new(120, 100)];
        state.food = Position::new(0, 0);

        let outcome = engine.tick(&mut state);

        assert!(!state.running);
        assert_eq!(outcome.collision, Some(CollisionType::Obstacle));
    }

    #[test]
    fn test_termination_wins_over_food() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        // Food and an obstacle on the same cell in the head's path
        state.obstacles = vec![Position::new(120, 100)];
        state.food = Position::new(120, 100);

        let outcome = engine.tick(&mut state);

        assert_eq!(outcome.collision, Some(CollisionType::Obstacle));
        assert!(!outcome.ate_food);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 1);
    }

    #[test]
    fn test_no_tick_after_game_over() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        state.running = false;
        let frozen = state.clone();

        let outcome = engine.tick(&mut state);

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_level_two_at_score_six() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        state.score = 5;
        put_food_ahead(&mut state, 20);

        let outcome = engine.tick(&mut state);

        assert_eq!(state.score, 6);
        assert_eq!(outcome.new_level, Some(2));
        assert_eq!(state.level, 2);
        assert_eq!(state.tick_ms, 110);
        assert_eq!(state.obstacles.len(), 6);
    }

    #[test]
    fn test_level_two_only_once() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        state.score = 6;
        state.level = 2;
        state.tick_ms = 110;
        put_food_ahead(&mut state, 20);

        let outcome = engine.tick(&mut state);

        assert_eq!(state.score, 7);
        assert_eq!(outcome.new_level, None);
        assert_eq!(state.level, 2);
        assert_eq!(state.tick_ms, 110);
    }

    #[test]
    fn test_level_three_at_score_twelve() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        state.score = 11;
        state.level = 2;
        state.tick_ms = 110;
        put_food_ahead(&mut state, 20);

        let outcome = engine.tick(&mut state);

        assert_eq!(state.score, 12);
        assert_eq!(outcome.new_level, Some(3));
        assert_eq!(state.level, 3);
        assert_eq!(state.tick_ms, 70);
        assert_eq!(state.obstacles.len(), 7);
    }

    #[test]
    fn test_speed_floor() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        state.score = 11;
        state.level = 2;
        state.tick_ms = 50;
        put_food_ahead(&mut state, 20);

        engine.tick(&mut state);

        // Step is only applied while the interval is above the floor
        assert_eq!(state.tick_ms, 50);
    }

    #[test]
    fn test_food_never_spawns_on_obstacle() {
        let mut engine = engine();
        // Dense obstacle field to make accidental overlap likely
        let obstacles: Vec<Position> = (0..15)
            .flat_map(|cx| (0..30).map(move |cy| Position::new(cx * 20, cy * 20)))
            .collect();

        for _ in 0..200 {
            let food = engine.spawn_food(&obstacles);
            assert!(!obstacles.contains(&food));
            assert_eq!(food.x % 20, 0);
            assert_eq!(food.y % 20, 0);
        }
    }

    #[test]
    fn test_obstacle_spawn_count_and_alignment() {
        let mut engine = engine();
        let obstacles = engine.spawn_obstacles(7);

        assert_eq!(obstacles.len(), 7);
        for o in &obstacles {
            assert!(o.x >= 0 && o.x < 600 && o.y >= 0 && o.y < 600);
            assert_eq!(o.x % 20, 0);
            assert_eq!(o.y % 20, 0);
        }
    }

    #[test]
    fn test_food_respawns_after_eating() {
        let mut engine = engine();
        let mut state = engine.new_game(0);
        put_food_ahead(&mut state, 20);

        engine.tick(&mut state);

        // Respawn is random, so just check alignment and bounds
        assert!(engine.config.contains(state.food));
        assert_eq!(state.food.x % 20, 0);
        assert_eq!(state.food.y % 20, 0);
    }
}
