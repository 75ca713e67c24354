use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use super::{
    config::GameConfig,
    state::{CollisionKind, GameState, Position, Snake},
};

/// Attempts at rejection sampling before falling back to enumerating the
/// free cells
const MAX_FOOD_SAMPLES: usize = 1000;

/// Failures the simulation itself can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Every interior cell is occupied by the snake
    #[error("no free interior cell left to place food on")]
    BoardFull,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Collision the snake is currently stuck in, if any
    pub collision: Option<CollisionKind>,
    /// Whether the length threshold cost a life this tick
    pub life_lost: bool,
}

impl TickOutcome {
    fn idle(collision: Option<CollisionKind>) -> Self {
        Self {
            ate_food: false,
            collision,
            life_lost: false,
        }
    }
}

/// The game engine that drives the per-tick state transition
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

    /// Build the initial state: spawn snake, first food, full lives
    pub fn reset(&mut self) -> Result<GameState, GameError> {
        let snake = Snake::spawn();
        let food = self.place_food(&snake)?;
        Ok(GameState::new(snake, food, &self.config))
    }

    /// Execute one tick.
    ///
    /// A snake already in a collision does not move; by default it stays
    /// frozen and the game keeps running, with `end_on_collision` the state
    /// turns terminal instead. Otherwise the snake advances, eats (growing
    /// by one and regrowing food) or drops its tail, and finally pays the
    /// length toll: one life whenever the body is longer than
    /// `lives * block_size` segments.
    pub fn tick(&mut self, state: &mut GameState) -> Result<TickOutcome, GameError> {
        if !state.alive {
            return Ok(TickOutcome::idle(None));
        }

        if let Some(kind) = state.collision_kind() {
            if self.config.end_on_collision {
                state.alive = false;
            }
            return Ok(TickOutcome::idle(Some(kind)));
        }

        state.snake.advance(self.config.block_size);

        let ate_food = state.snake.head() == state.food;
        if ate_food {
            state.score += 1;
            state.food = self.place_food(&state.snake)?;
        } else {
            state.snake.drop_tail();
        }

        let mut life_lost = false;
        if state.snake.len() as i32 > state.lives * self.config.block_size {
            state.lives -= 1;
            life_lost = true;
        }

        Ok(TickOutcome {
            ate_food,
            collision: None,
            life_lost,
        })
    }

    /// Pick a food cell: uniformly random over the interior of the grid,
    /// never on the snake.
    ///
    /// Rejection sampling is bounded; once the board gets crowded the free
    /// cells are enumerated directly, and a fully occupied interior is an
    /// explicit `BoardFull` instead of a hang.
    pub fn place_food(&mut self, snake: &Snake) -> Result<Position, GameError> {
        let block = self.config.block_size;
        let cols = self.config.width_cells();
        let rows = self.config.height_cells();

        for _ in 0..MAX_FOOD_SAMPLES {
            let x = self.rng.gen_range(1..cols - 1) * block;
            let y = self.rng.gen_range(1..rows - 1) * block;
            let pos = Position::new(x, y);

            if !snake.occupies(pos) {
                return Ok(pos);
            }
        }

        let free: Vec<Position> = (1..cols - 1)
            .flat_map(|cx| (1..rows - 1).map(move |cy| Position::new(cx * block, cy * block)))
            .filter(|pos| !snake.occupies(*pos))
            .collect();

        free.choose(&mut self.rng).copied().ok_or(GameError::BoardFull)
    }
}
