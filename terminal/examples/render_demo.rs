use anyhow::Result;
use engine::{GameConfig, GameState, Outcome};
use terminal::render::{
    board::BoardRenderer,
    standard_renderer::StandardRenderer,
    types::{CharDimensions, RenderConfig},
};

fn main() -> Result<()> {
    // Play a few scripted moves on a small board
    let mut state = GameState::new(GameConfig::new(10, 20).with_seed(42).with_initial_food_offset(3))?;
    for key in ["d", "d", "d", "s", "s", "a"] {
        state.set_direction(key);
        if let Outcome::GameOver { .. } = state.step()? {
            break;
        }
    }

    println!("=== 1x1 Rendering (Classic) ===");
    render_with_dimensions(&state, CharDimensions::new(1, 1));

    println!("\n=== 2x1 Rendering (Wide) ===");
    render_with_dimensions(&state, CharDimensions::new(2, 1));

    println!("\n=== 3x2 Rendering (Large) ===");
    render_with_dimensions(&state, CharDimensions::new(3, 2));
    Ok(())
}

fn render_with_dimensions(state: &GameState, char_dims: CharDimensions) {
    let board = BoardRenderer::new(StandardRenderer::new(char_dims));
    let config = RenderConfig { chars_per_cell: char_dims };

    let chars = board.render(state, &config);
    let width = chars.physical_width();
    println!("Dimensions: {}x{} chars per cell", char_dims.horizontal, char_dims.vertical);
    println!("Physical size: {}x{} characters", width, chars.physical_height());
    println!("Score: {}  Length: {}", state.score(), state.snake().len());

    println!("┌{}┐", "─".repeat(width));
    for line in chars.into_strings() {
        println!("│{}│", line);
    }
    println!("└{}┘", "─".repeat(width));
}
