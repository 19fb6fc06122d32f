mod config;
mod constants;
mod error;
mod food;
mod game_engine;
mod game_state;
mod grid;
mod snake;

pub mod util;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use food::place_food;
pub use game_engine::*;
pub use game_state::*;
pub use grid::*;
pub use snake::*;
pub use util::PseudoRandom;
