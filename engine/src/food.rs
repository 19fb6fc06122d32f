use rand::Rng;
use rand::seq::SliceRandom;

use crate::{Cell, Grid, Snake, RANDOM_PLACEMENT_ATTEMPTS};

/// Picks a cell for the next food: uniformly random among cells that are
/// neither part of the snake nor the previous food.
///
/// Samples the whole board a bounded number of times, then falls back to
/// choosing from an explicit list of free cells. Goes straight to the list
/// once fewer than a quarter of the cells are free. Returns `None` when no
/// cell qualifies.
pub fn place_food<R: Rng>(
    grid: &Grid,
    snake: &Snake,
    previous: Option<Cell>,
    rng: &mut R,
) -> Option<Cell> {
    let cell_count = grid.cell_count();
    let is_free = |cell: Cell| !snake.occupies(cell) && Some(cell) != previous;

    let taken = snake.len() as u32
        + previous.map_or(0, |cell| u32::from(grid.contains_cell(cell) && !snake.occupies(cell)));
    let free_count = cell_count.saturating_sub(taken);
    if free_count == 0 {
        return None;
    }

    if free_count.saturating_mul(4) >= cell_count {
        for _ in 0..RANDOM_PLACEMENT_ATTEMPTS {
            let candidate = Cell(rng.gen_range(0..cell_count));
            if is_free(candidate) {
                return Some(candidate);
            }
        }
    }

    log::debug!("food placement scanning {} free cells", free_count);
    let free: Vec<Cell> = grid.cells().filter(|&cell| is_free(cell)).collect();
    free.choose(rng).copied()
}
