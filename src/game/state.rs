use super::config::GameConfig;
use super::direction::Direction;

/// A position on the playfield, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one block in a direction
    pub fn stepped(&self, direction: Direction, block: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * block, dy * block)
    }
}

/// Head position the snake spawns at
pub const SPAWN_HEAD: Position = Position { x: 100, y: 50 };

/// Gap between the spawn segments. Half a block, as in the classic layout.
const SPAWN_SPACING: i32 = 10;

const SPAWN_LENGTH: i32 = 3;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create the spawn snake: three segments trailing left of the head,
    /// heading right
    pub fn spawn() -> Self {
        let body = (0..SPAWN_LENGTH)
            .map(|i| SPAWN_HEAD.moved_by(-i * SPAWN_SPACING, 0))
            .collect();

        Self {
            body,
            direction: Direction::Right,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        *self.body.last().unwrap()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Check if any segment occupies a position
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Steer the snake. A request for the exact opposite of the current
    /// direction is silently ignored, so the head can never reverse onto
    /// the second segment in a single tick.
    pub fn set_direction(&mut self, requested: Direction) {
        if !self.direction.is_opposite(requested) {
            self.direction = requested;
        }
    }

    /// Move one block in the current direction.
    ///
    /// The new head is pushed in front, which leaves every body segment on
    /// its predecessor's pre-move cell. The tail is kept; whether it is
    /// dropped is the tick's decision, after the food check.
    pub fn advance(&mut self, block: i32) {
        let new_head = self.head().stepped(self.direction, block);
        self.body.insert(0, new_head);
    }

    /// Discard the tail segment
    pub fn drop_tail(&mut self) {
        self.body.pop();
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Snake head left the playfield
    Wall,
    /// Snake head landed on its own body
    SelfBite,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub lives: i32,
    pub alive: bool,
    pub width: i32,
    pub height: i32,
    pub block_size: i32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, config: &GameConfig) -> Self {
        Self {
            snake,
            food,
            score: 0,
            lives: config.initial_lives,
            alive: true,
            width: config.width,
            height: config.height,
            block_size: config.block_size,
        }
    }

    /// Check if a position is within the playfield bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Classify the collision the current head position is in, if any.
    ///
    /// The head is compared against the body excluding the tail: the tail
    /// cell is vacated on the very tick that would move the head into it,
    /// so sitting on it is not a real collision.
    pub fn collision_kind(&self) -> Option<CollisionKind> {
        let head = self.snake.head();

        if !self.is_in_bounds(head) {
            return Some(CollisionKind::Wall);
        }

        let body = &self.snake.body;
        if body.len() >= 3 && body[1..body.len() - 1].contains(&head) {
            return Some(CollisionKind::SelfBite);
        }

        None
    }

    /// Check whether the snake is currently in a collision
    pub fn is_collision(&self) -> bool {
        self.collision_kind().is_some()
    }

    /// Steer the snake (reversal requests are ignored)
    pub fn set_direction(&mut self, requested: Direction) {
        self.snake.set_direction(requested);
    }

    /// Read-only view for rendering, safe to take any number of times
    /// between ticks
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            segments: &self.snake.body,
            food: self.food,
            score: self.score,
            lives: self.lives,
            alive: self.alive,
        }
    }
}

/// Everything the renderer needs to draw a frame
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Snake segments, head first
    pub segments: &'a [Position],
    pub food: Position,
    pub score: u32,
    pub lives: i32,
    pub alive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(snake: Snake, food: Position) -> GameState {
        GameState::new(snake, food, &GameConfig::default())
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(100, 50);
        assert_eq!(pos.moved_by(20, 0), Position::new(120, 50));
        assert_eq!(pos.moved_by(-20, 0), Position::new(80, 50));
        assert_eq!(pos.stepped(Direction::Up, 20), Position::new(100, 30));
        assert_eq!(pos.stepped(Direction::Down, 20), Position::new(100, 70));
    }

    #[test]
    fn test_spawn_layout() {
        let snake = Snake::spawn();
        assert_eq!(
            snake.body,
            vec![
                Position::new(100, 50),
                Position::new(90, 50),
                Position::new(80, 50),
            ]
        );
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = Snake::spawn();
        snake.set_direction(Direction::Left);
        assert_eq!(snake.direction, Direction::Right);

        snake.set_direction(Direction::Down);
        assert_eq!(snake.direction, Direction::Down);
        snake.set_direction(Direction::Up);
        assert_eq!(snake.direction, Direction::Down);
    }

    #[test]
    fn test_advance_keeps_tail_until_dropped() {
        let mut snake = Snake::spawn();
        snake.advance(20);
        assert_eq!(
            snake.body,
            vec![
                Position::new(120, 50),
                Position::new(100, 50),
                Position::new(90, 50),
                Position::new(80, 50),
            ]
        );

        snake.drop_tail();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), Position::new(90, 50));
    }

    #[test]
    fn test_bounds_checking() {
        let state = state_with(Snake::spawn(), Position::new(500, 500));

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(780, 580)));
        assert!(!state.is_in_bounds(Position::new(-20, 0)));
        assert!(!state.is_in_bounds(Position::new(800, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 600)));
    }

    #[test]
    fn test_wall_collision_kind() {
        let snake = Snake {
            body: vec![Position::new(800, 40), Position::new(780, 40)],
            direction: Direction::Right,
        };
        let state = state_with(snake, Position::new(500, 500));
        assert_eq!(state.collision_kind(), Some(CollisionKind::Wall));
    }

    #[test]
    fn test_self_bite_kind() {
        // Head sits on an interior segment
        let snake = Snake {
            body: vec![
                Position::new(80, 100),
                Position::new(100, 100),
                Position::new(80, 100),
                Position::new(60, 100),
            ],
            direction: Direction::Left,
        };
        let state = state_with(snake, Position::new(500, 500));
        assert_eq!(state.collision_kind(), Some(CollisionKind::SelfBite));
    }

    #[test]
    fn test_tail_cell_is_not_a_collision() {
        // Head on the tail cell only: the tail vacates this tick
        let snake = Snake {
            body: vec![
                Position::new(60, 100),
                Position::new(100, 100),
                Position::new(80, 100),
                Position::new(60, 100),
            ],
            direction: Direction::Left,
        };
        let state = state_with(snake, Position::new(500, 500));
        assert_eq!(state.collision_kind(), None);
    }

    #[test]
    fn test_no_self_bite_for_short_snakes() {
        let snake = Snake {
            body: vec![Position::new(100, 100), Position::new(100, 100)],
            direction: Direction::Right,
        };
        let state = state_with(snake, Position::new(500, 500));
        assert!(!state.is_collision());
    }

    #[test]
    fn test_snapshot_is_a_plain_view() {
        let state = state_with(Snake::spawn(), Position::new(240, 240));
        let before = state.clone();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.segments, &state.snake.body[..]);
        assert_eq!(snapshot.food, Position::new(240, 240));
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.lives, 3);
        assert!(snapshot.alive);

        assert_eq!(state, before);
    }
}
