use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use engine::{GameConfig, DEFAULT_COLS, DEFAULT_ROWS};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

use terminal::app::{App, AppCommand};
use terminal::clock::SystemClock;
use terminal::render::types::CharDimensions;

#[derive(Parser, Debug)]
#[command(name = "snake-terminal", about = "Play snake in the terminal")]
struct Args {
    /// JSON file with a game config; flags below override its fields
    #[arg(long, env = "SNAKE_CONFIG")]
    config: Option<PathBuf>,

    /// Number of grid rows
    #[arg(long, env = "SNAKE_ROWS")]
    rows: Option<u16>,

    /// Number of grid columns
    #[arg(long, env = "SNAKE_COLS")]
    cols: Option<u16>,

    /// Food placement seed; random when omitted
    #[arg(long, env = "SNAKE_SEED")]
    seed: Option<u64>,

    /// Terminal characters per grid cell, horizontally
    #[arg(long, env = "SNAKE_CELL_WIDTH", default_value_t = 2)]
    cell_width: usize,

    /// Where log output goes while the game owns the screen
    #[arg(long, env = "SNAKE_LOG_FILE", default_value = "snake-terminal.log")]
    log_file: PathBuf,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {:?}", path))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse config {:?}", path))?
            }
            None => GameConfig::new(DEFAULT_ROWS, DEFAULT_COLS).with_seed(rand::random()),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(seed) = self.seed {
            config.rng_seed = seed;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = File::create(&args.log_file)
        .with_context(|| format!("Failed to open log file {:?}", args.log_file))?;
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let config = args.game_config()?;
    info!("Starting {}x{} game with seed {}", config.rows, config.cols, config.rng_seed);

    let char_dims = CharDimensions::new(args.cell_width.max(1), 1);
    let mut app = App::new(config, SystemClock::new(), char_dims)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.update()?;

        terminal.draw(|f| app.render(f))?;

        // Poll often so ticks land close to their due time
        if event::poll(Duration::from_millis(10))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = app.handle_input(key) {
                    match command {
                        AppCommand::Quit => return Ok(()),
                        _ => app.handle_command(command)?,
                    }
                }
            }
        }
    }
}
