use crate::{EngineError, GameConfig, GameState, Outcome};

/// Drives a [`GameState`] against timestamps supplied by the caller.
///
/// The engine never reads a clock. A driver passes the current time to
/// [`GameEngine::handle_key`] and [`GameEngine::run_until`], which makes
/// the schedule fully reproducible under a fake clock.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    tick: u32,
    next_tick_ms: Option<i64>,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Ok(Self::from_state(GameState::new(config)?))
    }

    pub fn from_state(state: GameState) -> Self {
        GameEngine {
            state,
            tick: 0,
            next_tick_ms: None,
        }
    }

    /// Forwards a key press. A key that starts a round schedules its first
    /// tick one interval after `ts_ms`.
    pub fn handle_key(&mut self, key: &str, ts_ms: i64) -> bool {
        let was_running = self.state.is_running();
        if !self.state.set_direction(key) {
            return false;
        }

        if !was_running {
            self.next_tick_ms = Some(ts_ms + self.state.speed_ms() as i64);
        }
        true
    }

    /// Run the required amount of ticks so that the game is at the given timestamp.
    /// Can be called from a very fast interval loop or requestAnimationFrame.
    ///
    /// The interval is re-read after every tick, so a speed change applies
    /// from the next interval on.
    pub fn run_until(&mut self, ts_ms: i64) -> Result<Vec<Outcome>, EngineError> {
        let mut out = Vec::new();

        while let Some(due_ms) = self.next_tick_ms {
            if due_ms > ts_ms {
                break;
            }

            let outcome = self.state.step()?;
            self.tick += 1;
            out.push(outcome);

            self.next_tick_ms = match outcome {
                Outcome::GameOver { .. } | Outcome::Idle => None,
                Outcome::Continue | Outcome::FoodEaten { .. } => {
                    Some(due_ms + self.state.speed_ms() as i64)
                }
            };
        }

        Ok(out)
    }

    /// Executes one tick immediately, outside the schedule.
    pub fn step(&mut self) -> Result<Outcome, EngineError> {
        let outcome = self.state.step()?;
        if outcome != Outcome::Idle {
            self.tick += 1;
        }
        if matches!(outcome, Outcome::GameOver { .. }) {
            self.next_tick_ms = None;
        }
        Ok(outcome)
    }

    /// Abandons the current round. Nothing is scheduled until the next key.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        self.state.restart()?;
        self.next_tick_ms = None;
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_tick(&self) -> u32 {
        self.tick
    }

    pub fn next_tick_ms(&self) -> Option<i64> {
        self.next_tick_ms
    }

    pub fn get_state_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.state)
    }
}
