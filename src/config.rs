use std::time::Duration;

use anyhow::{ensure, Result};

use crate::Coord;

pub const BOARD_WIDTH: Coord = 40;
pub const BOARD_HEIGHT: Coord = 20;
pub const TICK_INTERVAL_MS: u64 = 100;
pub const SCORE_PER_FOOD: u32 = 10;

pub const WALL_CHAR: char = '#';
pub const SNAKE_HEAD_CHAR: char = 'O';
pub const SNAKE_BODY_CHAR: char = 'o';
pub const FOOD_CHAR: char = '*';
pub const EMPTY_CHAR: char = ' ';

/// Game settings, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Board columns, walls included.
    pub width: Coord,
    /// Board rows, walls included.
    pub height: Coord,
    pub tick_interval: Duration,
    pub score_per_food: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            score_per_food: SCORE_PER_FOOD,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let interior = (self.width as i32 - 2).max(0) * (self.height as i32 - 2).max(0);
        // One cell for the snake, at least one for food.
        ensure!(
            interior >= 2,
            "board {}x{} needs at least two interior cells",
            self.width,
            self.height
        );
        ensure!(!self.tick_interval.is_zero(), "tick interval must be non-zero");
        Ok(())
    }
}
