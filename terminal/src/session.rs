use anyhow::{Context, Result};
use engine::{GameConfig, GameEngine, GameState, Outcome};
use tracing::{debug, info};

use crate::clock::Clock;

/// One player's game bound to a time source.
pub struct Session<C: Clock> {
    engine: GameEngine,
    clock: C,
    last_outcome: Option<Outcome>,
    rounds_finished: u32,
}

impl<C: Clock> Session<C> {
    pub fn new(config: GameConfig, clock: C) -> Result<Self> {
        let engine = GameEngine::new(config.clone())
            .with_context(|| format!("Failed to create a {}x{} game", config.rows, config.cols))?;
        Ok(Self {
            engine,
            clock,
            last_outcome: None,
            rounds_finished: 0,
        })
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        let accepted = self.engine.handle_key(key, self.clock.now_ms());
        if accepted {
            debug!("Key {:?} accepted, heading {:?}", key, self.engine.state().direction());
        }
        accepted
    }

    /// Runs every tick that has come due on the clock.
    pub fn update(&mut self) -> Result<Vec<Outcome>> {
        let now = self.clock.now_ms();
        let outcomes = self.engine.run_until(now).context("Failed to advance the game")?;

        for outcome in &outcomes {
            match outcome {
                Outcome::FoodEaten { score } => {
                    debug!("Food eaten, score {} speed {}ms", score, self.engine.state().speed_ms());
                }
                Outcome::GameOver { cause, final_score } => {
                    self.rounds_finished += 1;
                    info!(
                        "Round {} over: {:?}, score {}",
                        self.rounds_finished, cause, final_score
                    );
                }
                Outcome::Continue | Outcome::Idle => {}
            }
        }

        if let Some(outcome) = outcomes.last() {
            self.last_outcome = Some(*outcome);
        }
        Ok(outcomes)
    }

    pub fn restart(&mut self) -> Result<()> {
        info!("Round restarted at score {}", self.engine.state().score());
        self.engine.restart().context("Failed to restart the game")?;
        self.last_outcome = None;
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn rounds_finished(&self) -> u32 {
        self.rounds_finished
    }
}
