pub mod game_view;

pub use game_view::GameView;

use crate::app::AppCommand;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;

pub trait View {
    fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand>;
    fn update(&mut self) -> Result<()>;
    fn render(&self, frame: &mut Frame);
}
