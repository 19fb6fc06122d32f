use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Direction, EngineError};

/// Linear, row-major index of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell(pub u32);

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Row/column pair. Signed so that a step off the board is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coords {
    pub row: i32,
    pub col: i32,
}

impl Coords {
    pub fn new(row: i32, col: i32) -> Self {
        Coords { row, col }
    }

    /// The neighbouring coordinates one unit away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.offset();
        Coords {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: u16,
    cols: u16,
}

impl Grid {
    /// A grid must hold at least two cells: one for the snake, one for food.
    pub fn new(rows: u16, cols: u16) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 || (rows as u32) * (cols as u32) < 2 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(Grid { rows, cols })
    }

    pub fn rows(&self) -> u16 { self.rows }

    pub fn cols(&self) -> u16 { self.cols }

    pub fn cell_count(&self) -> u32 {
        (self.rows as u32) * (self.cols as u32)
    }

    pub fn contains(&self, coords: Coords) -> bool {
        coords.row >= 0
            && coords.row < self.rows as i32
            && coords.col >= 0
            && coords.col < self.cols as i32
    }

    pub fn contains_cell(&self, cell: Cell) -> bool {
        cell.0 < self.cell_count()
    }

    pub fn to_index(&self, coords: Coords) -> Result<Cell, EngineError> {
        if !self.contains(coords) {
            return Err(EngineError::OutOfRange {
                row: coords.row,
                col: coords.col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(Cell(coords.row as u32 * self.cols as u32 + coords.col as u32))
    }

    pub fn to_coords(&self, cell: Cell) -> Result<Coords, EngineError> {
        if !self.contains_cell(cell) {
            return Err(EngineError::CellOutOfRange {
                cell,
                cell_count: self.cell_count(),
            });
        }
        Ok(self.coords_of(cell))
    }

    /// Conversion for cells already known to be on the grid.
    pub(crate) fn coords_of(&self, cell: Cell) -> Coords {
        let cols = self.cols as u32;
        Coords {
            row: (cell.0 / cols) as i32,
            col: (cell.0 % cols) as i32,
        }
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        (0..self.cell_count()).map(Cell)
    }

    /// Where a new snake starts: one third of the way down and across,
    /// rounded to the nearest row and column.
    pub fn starting_coords(&self) -> Coords {
        Coords {
            row: ((self.rows as i32) + 1) / 3,
            col: ((self.cols as i32) + 1) / 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_grids_without_room_for_food() {
        assert_eq!(Grid::new(0, 10), Err(EngineError::InvalidDimensions { rows: 0, cols: 10 }));
        assert_eq!(Grid::new(1, 1), Err(EngineError::InvalidDimensions { rows: 1, cols: 1 }));
        assert!(Grid::new(1, 2).is_ok());
    }

    #[test]
    fn contains_checks_every_edge() {
        let grid = Grid::new(25, 40).unwrap();
        assert!(grid.contains(Coords::new(0, 0)));
        assert!(grid.contains(Coords::new(24, 39)));
        assert!(!grid.contains(Coords::new(-1, 0)));
        assert!(!grid.contains(Coords::new(0, -1)));
        assert!(!grid.contains(Coords::new(25, 0)));
        assert!(!grid.contains(Coords::new(0, 40)));
    }

    #[test]
    fn index_and_coords_agree() {
        let grid = Grid::new(25, 40).unwrap();
        assert_eq!(grid.to_index(Coords::new(8, 13)), Ok(Cell(333)));
        assert_eq!(grid.to_coords(Cell(333)), Ok(Coords::new(8, 13)));

        for cell in grid.cells() {
            let coords = grid.to_coords(cell).unwrap();
            assert_eq!(grid.to_index(coords), Ok(cell));
        }
    }

    #[test]
    fn conversions_fail_out_of_range() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(
            grid.to_index(Coords::new(3, 0)),
            Err(EngineError::OutOfRange { row: 3, col: 0, rows: 3, cols: 4 })
        );
        assert_eq!(
            grid.to_coords(Cell(12)),
            Err(EngineError::CellOutOfRange { cell: Cell(12), cell_count: 12 })
        );
    }

    #[test]
    fn starting_coords_round_to_nearest_third() {
        assert_eq!(Grid::new(25, 40).unwrap().starting_coords(), Coords::new(8, 13));
        assert_eq!(Grid::new(5, 2).unwrap().starting_coords(), Coords::new(2, 1));
        assert_eq!(Grid::new(1, 2).unwrap().starting_coords(), Coords::new(0, 1));
    }
}
