use engine::{Cell, CellKind, GameConfig, GameEngine, GameState, Outcome, Phase};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Game handle owned by the page. The page keeps the animation loop and
/// passes `performance.now()` into every timed call.
#[wasm_bindgen]
pub struct SnakeGame {
    engine: GameEngine,
}

#[wasm_bindgen]
impl SnakeGame {
    #[wasm_bindgen(constructor)]
    pub fn new(rows: u16, cols: u16, seed: u64) -> Result<SnakeGame, JsError> {
        let config = GameConfig::new(rows, cols).with_seed(seed);
        let engine = GameEngine::new(config)?;
        log::info!("new {}x{} game", rows, cols);
        Ok(SnakeGame { engine })
    }

    /// Returns whether the key was a direction.
    pub fn set_direction(&mut self, key: &str, now_ms: f64) -> bool {
        self.engine.handle_key(key, now_ms as i64)
    }

    /// One immediate tick. Returns the outcome label.
    pub fn step(&mut self) -> Result<String, JsError> {
        let outcome = self.engine.step()?;
        Ok(outcome_label(&outcome).to_string())
    }

    /// Runs every tick due by `now_ms`; returns their outcomes as a JSON array.
    pub fn run_until(&mut self, now_ms: f64) -> Result<String, JsError> {
        let outcomes = self.engine.run_until(now_ms as i64)?;
        Ok(serde_json::to_string(&outcomes)?)
    }

    pub fn restart(&mut self) -> Result<(), JsError> {
        Ok(self.engine.restart()?)
    }

    pub fn score(&self) -> u32 {
        self.engine.state().score()
    }

    /// Current tick interval in milliseconds.
    pub fn speed(&self) -> u32 {
        self.engine.state().speed_ms()
    }

    pub fn is_running(&self) -> bool {
        self.engine.state().is_running()
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.state().phase() == Phase::GameOver
    }

    pub fn last_score(&self) -> Option<u32> {
        self.engine.state().last_score()
    }

    pub fn rows(&self) -> u16 {
        self.engine.state().grid().rows()
    }

    pub fn cols(&self) -> u16 {
        self.engine.state().grid().cols()
    }

    pub fn cell_class(&self, cell: u32) -> String {
        cell_class(self.engine.state(), Cell(cell))
    }

    pub fn state_json(&self) -> Result<String, JsError> {
        Ok(self.engine.get_state_json()?)
    }
}

/// Short label the page switches on to pick a sound cue.
pub fn outcome_label(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Idle => "idle",
        Outcome::Continue => "continue",
        Outcome::FoodEaten { .. } => "food-eaten",
        Outcome::GameOver { .. } => "game-over",
    }
}

/// CSS classes for one board cell. A one-segment snake is both tail and head.
pub fn cell_class(state: &GameState, cell: Cell) -> String {
    let mut class = match state.cell_kind(cell) {
        CellKind::Empty => String::from("cell"),
        CellKind::Food => String::from("cell food"),
        CellKind::Body | CellKind::Head | CellKind::Tail => String::from("cell snake"),
    };

    let snake = state.snake();
    if cell == snake.tail_cell() {
        class.push_str(" last-snake-cell");
    }
    if cell == snake.head_cell() {
        class.push_str(" first-snake-cell");
    }
    class
}
