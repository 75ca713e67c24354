//! Core game logic
//!
//! Everything in here is pure simulation with no I/O or rendering
//! dependencies, so the whole state machine can be driven from tests.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, GameError, TickOutcome};
pub use state::{CollisionKind, GameState, Position, Snake, Snapshot};
