use anyhow::Result;
use crossterm::event::KeyEvent;
use engine::GameConfig;
use ratatui::Frame;

use crate::clock::{Clock, SystemClock};
use crate::render::types::CharDimensions;
use crate::session::Session;
use crate::views::{GameView, View};

#[derive(Debug)]
pub enum AppCommand {
    Quit,
    Restart,
}

pub struct App<C: Clock = SystemClock> {
    pub view: GameView<C>,
}

impl<C: Clock> App<C> {
    pub fn new(config: GameConfig, clock: C, char_dims: CharDimensions) -> Result<Self> {
        let session = Session::new(config, clock)?;
        Ok(Self {
            view: GameView::new(session, char_dims),
        })
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        self.view.handle_input(key)
    }

    pub fn update(&mut self) -> Result<()> {
        self.view.update()
    }

    pub fn render(&self, frame: &mut Frame) {
        self.view.render(frame)
    }

    pub fn handle_command(&mut self, command: AppCommand) -> Result<()> {
        match command {
            AppCommand::Restart => {
                self.view.session_mut().restart()?;
            }
            AppCommand::Quit => {
                // Handled in main loop
            }
        }
        Ok(())
    }
}
