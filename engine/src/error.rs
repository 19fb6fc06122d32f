use thiserror::Error;

use crate::Cell;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("coordinates ({row}, {col}) are outside the {rows}x{cols} grid")]
    OutOfRange { row: i32, col: i32, rows: u16, cols: u16 },

    #[error("cell {cell} is outside a grid of {cell_count} cells")]
    CellOutOfRange { cell: Cell, cell_count: u32 },

    #[error("a {rows}x{cols} grid has no room for both a snake and food")]
    InvalidDimensions { rows: u16, cols: u16 },

    #[error("cell {0} is already occupied by the snake")]
    CellOccupied(Cell),

    #[error("cannot shrink a snake of length 1")]
    SnakeTooShort,

    #[error("food cell {0} overlaps the snake")]
    FoodOnSnake(Cell),
}
