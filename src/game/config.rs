use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use super::state::SPAWN_HEAD;

/// Configuration for the game
///
/// Dimensions are in pixels; the playfield is carved into square cells of
/// `block_size` pixels and the snake moves one block per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the playfield in pixels
    pub width: i32,
    /// Height of the playfield in pixels
    pub height: i32,
    /// Side length of one grid cell in pixels
    pub block_size: i32,
    /// Simulation rate in ticks per second
    pub tick_rate: u64,
    /// Lives the player starts with
    pub initial_lives: i32,
    /// End the game on wall or self collision instead of freezing the snake
    pub end_on_collision: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            block_size: 20,
            tick_rate: 10,
            initial_lives: 3,
            end_on_collision: false,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom playfield size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Create a small playfield for testing
    pub fn small() -> Self {
        Self::new(200, 100)
    }

    /// Number of grid columns
    pub fn width_cells(&self) -> i32 {
        self.width / self.block_size
    }

    /// Number of grid rows
    pub fn height_cells(&self) -> i32 {
        self.height / self.block_size
    }

    /// Reject playfields the game cannot run on.
    ///
    /// Meant to be called once before the terminal is set up, so failures
    /// print as plain errors.
    pub fn validate(&self) -> Result<()> {
        if self.block_size <= 0 {
            bail!("block size must be positive, got {}", self.block_size);
        }
        if self.width <= 0 || self.height <= 0 {
            bail!("playfield must be positive, got {}x{}", self.width, self.height);
        }
        if self.width % self.block_size != 0 || self.height % self.block_size != 0 {
            bail!(
                "playfield {}x{} is not a multiple of the block size {}",
                self.width,
                self.height,
                self.block_size
            );
        }
        // Food is placed strictly inside the border, so both axes need at
        // least one interior cell.
        if self.width_cells() < 3 || self.height_cells() < 3 {
            bail!(
                "playfield of {}x{} cells has no interior for food",
                self.width_cells(),
                self.height_cells()
            );
        }
        if self.width <= SPAWN_HEAD.x || self.height <= SPAWN_HEAD.y {
            bail!(
                "playfield {}x{} cannot contain the spawn point ({}, {})",
                self.width,
                self.height,
                SPAWN_HEAD.x,
                SPAWN_HEAD.y
            );
        }
        if self.tick_rate == 0 || self.tick_rate > 1000 {
            bail!("tick rate must be between 1 and 1000, got {}", self.tick_rate);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.width_cells(), 40);
        assert_eq!(config.height_cells(), 30);
        assert_eq!(config.initial_lives, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(400, 200);
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 200);
        assert_eq!(config.block_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unaligned_playfield() {
        let config = GameConfig::new(810, 600);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_playfield_without_interior() {
        let mut config = GameConfig::new(40, 40);
        assert!(config.validate().is_err());

        // Large enough cells-wise but cannot hold the spawn point
        config = GameConfig::new(100, 60);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_tick_rate() {
        let mut config = GameConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.tick_rate = 2000;
        assert!(config.validate().is_err());
    }
}
