use serde::{Deserialize, Serialize};

use crate::food::place_food;
use crate::{
    Cell, Direction, EngineError, GameConfig, Grid, PseudoRandom, Snake, DEFAULT_SPEED_MS,
    MIN_SPEED_MS, SPEED_STEP_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Fresh round waiting for the first direction key.
    Idle,
    Running,
    /// The previous round ended and the board has been reset. Waits for a
    /// key like `Idle` does.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    Wall,
    SelfCollision,
    /// The snake covers every cell that could hold food.
    BoardFilled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Nothing moved: no round is running.
    Idle,
    Continue,
    FoodEaten { score: u32 },
    GameOver { cause: GameOverCause, final_score: u32 },
}

/// What a renderer draws on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Food,
    Body,
    Head,
    Tail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Cell,
    direction: Option<Direction>,
    score: u32,
    speed_ms: u32,
    phase: Phase,
    last_score: Option<u32>,
    rng: PseudoRandom,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        let grid = Grid::new(config.rows, config.cols)?;
        let start = grid.to_index(grid.starting_coords())?;
        let mut state = GameState {
            grid,
            snake: Snake::new(grid, start)?,
            food: start,
            direction: None,
            score: 0,
            speed_ms: DEFAULT_SPEED_MS,
            phase: Phase::Idle,
            last_score: None,
            rng: PseudoRandom::new(config.rng_seed),
            config,
        };
        state.food = state.initial_food()?;
        Ok(state)
    }

    /// Builds an idle round around an explicit snake and food cell.
    pub fn with_layout(config: GameConfig, snake: Snake, food: Cell) -> Result<Self, EngineError> {
        let mut state = GameState::new(config)?;
        if *snake.grid() != state.grid {
            return Err(EngineError::InvalidDimensions {
                rows: snake.grid().rows(),
                cols: snake.grid().cols(),
            });
        }
        if !state.grid.contains_cell(food) {
            return Err(EngineError::CellOutOfRange {
                cell: food,
                cell_count: state.grid.cell_count(),
            });
        }
        if snake.occupies(food) {
            return Err(EngineError::FoodOnSnake(food));
        }
        state.snake = snake;
        state.food = food;
        Ok(state)
    }

    /// Applies a raw key. Returns `false` and changes nothing when the key
    /// is not a direction.
    pub fn set_direction(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.turn(direction);
                true
            }
            None => false,
        }
    }

    /// Sets the heading and starts the round if it is not running yet.
    /// Reversing onto the neck is not filtered here; the next tick reports
    /// it as a self collision.
    pub fn turn(&mut self, direction: Direction) {
        self.direction = Some(direction);
        if self.phase != Phase::Running {
            log::debug!("round started heading {:?}", direction);
            self.phase = Phase::Running;
        }
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) -> Result<Outcome, EngineError> {
        let direction = match (self.phase, self.direction) {
            (Phase::Running, Some(direction)) => direction,
            _ => return Ok(Outcome::Idle),
        };

        let next = self.snake.head_coords().step(direction);
        if !self.grid.contains(next) {
            return self.end_round(GameOverCause::Wall);
        }

        let next_cell = self.grid.to_index(next)?;
        // The tail has not moved yet, so running into it counts as a collision.
        if self.snake.occupies(next_cell) {
            return self.end_round(GameOverCause::SelfCollision);
        }

        self.snake.advance(next_cell)?;

        if next_cell != self.food {
            self.snake.shrink_tail()?;
            return Ok(Outcome::Continue);
        }

        self.score += 1;
        self.apply_speed_ramp();

        match place_food(&self.grid, &self.snake, Some(next_cell), &mut self.rng) {
            Some(food) => {
                self.food = food;
                Ok(Outcome::FoodEaten { score: self.score })
            }
            None => self.end_round(GameOverCause::BoardFilled),
        }
    }

    /// Discards the current round and waits for input on a fresh board.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        let start = self.grid.to_index(self.grid.starting_coords())?;
        self.snake.initialize(start)?;
        self.food = self.initial_food()?;
        self.direction = None;
        self.score = 0;
        self.speed_ms = DEFAULT_SPEED_MS;
        self.phase = Phase::Idle;
        Ok(())
    }

    pub fn cell_kind(&self, cell: Cell) -> CellKind {
        if cell == self.snake.head_cell() {
            CellKind::Head
        } else if cell == self.snake.tail_cell() {
            CellKind::Tail
        } else if self.snake.occupies(cell) {
            CellKind::Body
        } else if cell == self.food {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }

    pub fn score(&self) -> u32 { self.score }

    pub fn speed_ms(&self) -> u32 { self.speed_ms }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn phase(&self) -> Phase { self.phase }

    pub fn direction(&self) -> Option<Direction> { self.direction }

    pub fn food(&self) -> Cell { self.food }

    pub fn snake(&self) -> &Snake { &self.snake }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn config(&self) -> &GameConfig { &self.config }

    /// Score of the most recently finished round.
    pub fn last_score(&self) -> Option<u32> { self.last_score }

    fn end_round(&mut self, cause: GameOverCause) -> Result<Outcome, EngineError> {
        let final_score = self.score;
        log::info!("game over ({:?}) with score {}", cause, final_score);

        self.restart()?;
        self.phase = Phase::GameOver;
        self.last_score = Some(final_score);
        Ok(Outcome::GameOver { cause, final_score })
    }

    // Every second food shortens the tick interval, down to the floor.
    fn apply_speed_ramp(&mut self) {
        if self.score % 2 == 0 && self.speed_ms > MIN_SPEED_MS {
            self.speed_ms = self.speed_ms.saturating_sub(SPEED_STEP_MS).max(MIN_SPEED_MS);
            log::debug!("speed ramped to {}ms at score {}", self.speed_ms, self.score);
        }
    }

    fn initial_food(&mut self) -> Result<Cell, EngineError> {
        if let Some(offset) = self.config.initial_food_offset {
            let candidate = Cell(self.snake.head_cell().0.saturating_add(offset));
            if self.grid.contains_cell(candidate) && !self.snake.occupies(candidate) {
                return Ok(candidate);
            }
        }

        place_food(&self.grid, &self.snake, None, &mut self.rng).ok_or(
            EngineError::InvalidDimensions {
                rows: self.grid.rows(),
                cols: self.grid.cols(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_state() -> GameState {
        let mut state = GameState::new(GameConfig::default().with_seed(5)).unwrap();
        state.turn(Direction::Right);
        state
    }

    // Drops food right in front of the head and eats it.
    fn eat_once(state: &mut GameState) -> Outcome {
        let ahead = state.snake.head_coords().step(Direction::Right);
        state.food = state.grid.to_index(ahead).unwrap();
        state.step().unwrap()
    }

    #[test]
    fn speed_ramps_on_every_second_food() {
        let mut state = running_state();
        assert_eq!(state.speed_ms(), 200);

        assert_eq!(eat_once(&mut state), Outcome::FoodEaten { score: 1 });
        assert_eq!(state.speed_ms(), 200);
        eat_once(&mut state);
        assert_eq!(state.speed_ms(), 185);
        eat_once(&mut state);
        assert_eq!(state.speed_ms(), 185);
        eat_once(&mut state);
        assert_eq!(state.speed_ms(), 170);
    }

    #[test]
    fn speed_never_drops_below_floor() {
        let mut state = running_state();
        state.score = 40;
        for _ in 0..20 {
            state.score += 2;
            state.apply_speed_ramp();
        }
        assert_eq!(state.speed_ms(), MIN_SPEED_MS);

        state.score += 2;
        state.apply_speed_ramp();
        assert_eq!(state.speed_ms(), MIN_SPEED_MS);
    }

    #[test]
    fn end_round_resets_and_remembers_score() {
        let mut state = running_state();
        eat_once(&mut state);
        eat_once(&mut state);
        state.direction = Some(Direction::Left);

        // Reversing runs into the neck.
        assert_eq!(
            state.step().unwrap(),
            Outcome::GameOver { cause: GameOverCause::SelfCollision, final_score: 2 }
        );
        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(state.last_score(), Some(2));
        assert_eq!(state.score(), 0);
        assert_eq!(state.speed_ms(), DEFAULT_SPEED_MS);
        assert_eq!(state.snake().len(), 1);
        assert_eq!(state.direction(), None);
        assert_eq!(state.step().unwrap(), Outcome::Idle);
    }

    #[test]
    fn filling_the_board_ends_the_round() {
        let config = GameConfig::new(1, 3);
        let grid = Grid::new(1, 3).unwrap();
        let mut snake = Snake::new(grid, Cell(0)).unwrap();
        snake.advance(Cell(1)).unwrap();
        let mut state = GameState::with_layout(config, snake, Cell(2)).unwrap();
        state.turn(Direction::Right);

        assert_eq!(
            state.step().unwrap(),
            Outcome::GameOver { cause: GameOverCause::BoardFilled, final_score: 1 }
        );
    }

    #[test]
    fn initial_offset_falls_back_when_off_the_board() {
        // Start cell is (1, 1) = 4 on a 3x3 board; +20 is off the grid.
        let config = GameConfig::new(3, 3).with_initial_food_offset(20);
        let state = GameState::new(config).unwrap();
        assert!(state.grid().contains_cell(state.food()));
        assert!(!state.snake().occupies(state.food()));
    }

    #[test]
    fn cell_kinds_prefer_head_then_tail() {
        let config = GameConfig::new(5, 5);
        let grid = Grid::new(5, 5).unwrap();
        let mut snake = Snake::new(grid, Cell(0)).unwrap();
        snake.advance(Cell(1)).unwrap();
        snake.advance(Cell(2)).unwrap();
        let state = GameState::with_layout(config, snake, Cell(10)).unwrap();

        assert_eq!(state.cell_kind(Cell(0)), CellKind::Tail);
        assert_eq!(state.cell_kind(Cell(1)), CellKind::Body);
        assert_eq!(state.cell_kind(Cell(2)), CellKind::Head);
        assert_eq!(state.cell_kind(Cell(10)), CellKind::Food);
        assert_eq!(state.cell_kind(Cell(11)), CellKind::Empty);

        let single = GameState::new(GameConfig::new(5, 5)).unwrap();
        let head = single.snake().head_cell();
        assert_eq!(single.cell_kind(head), CellKind::Head);
    }

    #[test]
    fn layout_rejects_food_on_the_snake() {
        let grid = Grid::new(5, 5).unwrap();
        let snake = Snake::new(grid, Cell(3)).unwrap();
        assert_eq!(
            GameState::with_layout(GameConfig::new(5, 5), snake, Cell(3)),
            Err(EngineError::FoodOnSnake(Cell(3)))
        );
    }
}
