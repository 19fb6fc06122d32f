use super::View;
use crate::app::AppCommand;
use crate::clock::Clock;
use crate::render::board::BoardRenderer;
use crate::render::standard_renderer::StandardRenderer;
use crate::render::types::{CharDimensions, RenderConfig};
use crate::session::Session;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use engine::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct GameView<C: Clock> {
    session: Session<C>,
    board: BoardRenderer<StandardRenderer>,
    config: RenderConfig,
}

impl<C: Clock> GameView<C> {
    pub fn new(session: Session<C>, char_dims: CharDimensions) -> Self {
        Self {
            session,
            board: BoardRenderer::new(StandardRenderer::new(char_dims)),
            config: RenderConfig { chars_per_cell: char_dims },
        }
    }

    pub fn session(&self) -> &Session<C> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<C> {
        &mut self.session
    }

    pub fn board_lines(&self) -> Vec<String> {
        self.board
            .render(self.session.state(), &self.config)
            .into_strings()
    }

    fn status_line(&self) -> Line<'static> {
        let state = self.session.state();
        let status = match state.phase() {
            Phase::Idle => Span::styled("press a direction to start", Style::default().fg(Color::DarkGray)),
            Phase::Running => Span::raw(""),
            Phase::GameOver => Span::styled(
                format!("GAME OVER - scored {}", state.last_score().unwrap_or(0)),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        Line::from(vec![
            Span::styled(
                format!("SCORE: {}", state.score()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("   SPEED: {}ms   ", state.speed_ms())),
            status,
        ])
    }
}

/// Key symbol the engine understands for a terminal key code.
pub fn key_symbol(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Up => Some("ArrowUp".to_string()),
        KeyCode::Down => Some("ArrowDown".to_string()),
        KeyCode::Left => Some("ArrowLeft".to_string()),
        KeyCode::Right => Some("ArrowRight".to_string()),
        KeyCode::Char(c) => Some(c.to_string()),
        _ => None,
    }
}

impl<C: Clock> View for GameView<C> {
    fn handle_input(&mut self, key: KeyEvent) -> Option<AppCommand> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppCommand::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppCommand::Quit)
            }
            KeyCode::Char('r') => Some(AppCommand::Restart),
            code => {
                if let Some(symbol) = key_symbol(code) {
                    self.session.handle_key(&symbol);
                }
                None
            }
        }
    }

    fn update(&mut self) -> Result<()> {
        self.session.update()?;
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let [status_area, board_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(Paragraph::new(self.status_line()), status_area);

        let lines: Vec<Line> = self.board_lines().into_iter().map(Line::from).collect();
        let board = Paragraph::new(lines)
            .style(Style::default().fg(Color::Green))
            .block(Block::default().borders(Borders::ALL).title(" Snake "));
        frame.render_widget(board, board_area);

        let help = Paragraph::new("USE 'A', 'S', 'D', 'W' TO PLAY   r: restart   q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, help_area);
    }
}
