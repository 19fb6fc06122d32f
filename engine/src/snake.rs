use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{Cell, Coords, EngineError, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Maps a raw key symbol to a direction. WASD in either case, plus the
    /// arrow key names browsers report.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "ArrowUp" => Some(Direction::Up),
            "d" | "D" | "ArrowRight" => Some(Direction::Right),
            "s" | "S" | "ArrowDown" => Some(Direction::Down),
            "a" | "A" | "ArrowLeft" => Some(Direction::Left),
            _ => None,
        }
    }

    /// (row, col) delta of one step.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Segment {
    cell: Cell,
    /// Next segment toward the head.
    next: Option<usize>,
}

/// Snake body stored as an arena of segments linked from tail to head, with
/// a companion set of occupied cells for constant time membership tests.
///
/// Vacated slots are recycled, so a segment handle stays valid for as long
/// as the segment is part of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    grid: Grid,
    segments: Vec<Segment>,
    free_slots: Vec<usize>,
    head: usize,
    tail: usize,
    occupied: HashSet<Cell>,
}

impl Snake {
    pub fn new(grid: Grid, start: Cell) -> Result<Self, EngineError> {
        let mut snake = Snake {
            grid,
            segments: Vec::new(),
            free_slots: Vec::new(),
            head: 0,
            tail: 0,
            occupied: HashSet::new(),
        };
        snake.initialize(start)?;
        Ok(snake)
    }

    /// Resets to a single segment on `start`.
    pub fn initialize(&mut self, start: Cell) -> Result<(), EngineError> {
        self.check_on_grid(start)?;
        self.segments.clear();
        self.free_slots.clear();
        self.occupied.clear();
        self.segments.push(Segment { cell: start, next: None });
        self.head = 0;
        self.tail = 0;
        self.occupied.insert(start);
        Ok(())
    }

    /// Links a new head segment on `cell`. The tail stays put; the caller
    /// decides whether this tick is growth or translation.
    pub fn advance(&mut self, cell: Cell) -> Result<(), EngineError> {
        self.check_on_grid(cell)?;
        if self.occupied.contains(&cell) {
            return Err(EngineError::CellOccupied(cell));
        }

        let segment = Segment { cell, next: None };
        let slot = match self.free_slots.pop() {
            Some(slot) => {
                self.segments[slot] = segment;
                slot
            }
            None => {
                self.segments.push(segment);
                self.segments.len() - 1
            }
        };

        self.segments[self.head].next = Some(slot);
        self.head = slot;
        self.occupied.insert(cell);
        Ok(())
    }

    /// Drops the tail segment and returns the cell it vacated.
    pub fn shrink_tail(&mut self) -> Result<Cell, EngineError> {
        let next = self.segments[self.tail]
            .next
            .ok_or(EngineError::SnakeTooShort)?;

        let vacated = self.segments[self.tail].cell;
        self.occupied.remove(&vacated);
        self.free_slots.push(self.tail);
        self.tail = next;
        Ok(vacated)
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    pub fn head_cell(&self) -> Cell {
        self.segments[self.head].cell
    }

    pub fn tail_cell(&self) -> Cell {
        self.segments[self.tail].cell
    }

    pub fn head_coords(&self) -> Coords {
        self.grid.coords_of(self.head_cell())
    }

    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Body cells from tail to head, following the segment links.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let mut cursor = Some(self.tail);
        std::iter::from_fn(move || {
            let index = cursor?;
            let segment = &self.segments[index];
            cursor = segment.next;
            Some(segment.cell)
        })
    }

    fn check_on_grid(&self, cell: Cell) -> Result<(), EngineError> {
        if !self.grid.contains_cell(cell) {
            return Err(EngineError::CellOutOfRange {
                cell,
                cell_count: self.grid.cell_count(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::new(10, 10).unwrap()
    }

    #[test]
    fn keys_map_to_directions() {
        assert_eq!(Direction::from_key("w"), Some(Direction::Up));
        assert_eq!(Direction::from_key("D"), Some(Direction::Right));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("a"), Some(Direction::Left));
        assert_eq!(Direction::from_key(""), None);
        assert_eq!(Direction::from_key("x"), None);
    }

    #[test]
    fn new_snake_is_a_single_segment() {
        let snake = Snake::new(grid(), Cell(42)).unwrap();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head_cell(), Cell(42));
        assert_eq!(snake.tail_cell(), Cell(42));
        assert_eq!(snake.head_coords(), Coords::new(4, 2));
        assert!(snake.occupies(Cell(42)));
    }

    #[test]
    fn advance_grows_and_shrink_translates() {
        let mut snake = Snake::new(grid(), Cell(0)).unwrap();
        snake.advance(Cell(1)).unwrap();
        snake.advance(Cell(2)).unwrap();
        assert_eq!(snake.cells().collect::<Vec<_>>(), vec![Cell(0), Cell(1), Cell(2)]);

        assert_eq!(snake.shrink_tail(), Ok(Cell(0)));
        assert!(!snake.occupies(Cell(0)));
        assert_eq!(snake.tail_cell(), Cell(1));
        assert_eq!(snake.head_cell(), Cell(2));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn shrink_refuses_to_empty_the_snake() {
        let mut snake = Snake::new(grid(), Cell(5)).unwrap();
        assert_eq!(snake.shrink_tail(), Err(EngineError::SnakeTooShort));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_rejects_occupied_and_off_grid_cells() {
        let mut snake = Snake::new(grid(), Cell(5)).unwrap();
        assert_eq!(snake.advance(Cell(5)), Err(EngineError::CellOccupied(Cell(5))));
        assert_eq!(
            snake.advance(Cell(100)),
            Err(EngineError::CellOutOfRange { cell: Cell(100), cell_count: 100 })
        );
    }

    #[test]
    fn slots_are_recycled_while_links_stay_consistent() {
        let mut snake = Snake::new(grid(), Cell(0)).unwrap();
        for cell in 1..50 {
            snake.advance(Cell(cell)).unwrap();
            snake.shrink_tail().unwrap();
            assert_eq!(snake.cells().count(), snake.len());
        }
        assert_eq!(snake.cells().collect::<Vec<_>>(), vec![Cell(49)]);
        assert!(snake.segments.len() <= 2);
    }
}
