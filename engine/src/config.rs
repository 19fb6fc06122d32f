use serde::{Deserialize, Serialize};

use crate::{DEFAULT_COLS, DEFAULT_ROWS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: u16,
    pub cols: u16,
    /// Seed for food placement. Equal seeds give equal games.
    pub rng_seed: u64,
    /// Put the first food this many cells after the start cell, when that
    /// cell is on the board. Otherwise the first food is placed at random
    /// like every later one.
    pub initial_food_offset: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            rng_seed: 0,
            initial_food_offset: None,
        }
    }
}

impl GameConfig {
    pub fn new(rows: u16, cols: u16) -> Self {
        GameConfig { rows, cols, ..Default::default() }
    }

    pub fn with_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = rng_seed;
        self
    }

    pub fn with_initial_food_offset(mut self, offset: u32) -> Self {
        self.initial_food_offset = Some(offset);
        self
    }
}
