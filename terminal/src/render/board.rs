use engine::{CellKind, GameState};
use super::traits::CellRenderer;
use super::types::{CharGrid, RenderConfig};

pub struct BoardRenderer<R: CellRenderer> {
    renderer: R,
}

impl<R: CellRenderer> BoardRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn render(&self, state: &GameState, config: &RenderConfig) -> CharGrid {
        let grid = state.grid();
        let mut chars = CharGrid::new(
            grid.rows() as usize,
            grid.cols() as usize,
            config.chars_per_cell,
        );

        for cell in grid.cells() {
            let kind = state.cell_kind(cell);
            if kind == CellKind::Empty {
                continue;
            }
            let Ok(coords) = grid.to_coords(cell) else { continue };

            let heading = if kind == CellKind::Head { state.direction() } else { None };
            let pattern = self.renderer.render_cell(kind, heading);
            chars.set_cell(coords.row as usize, coords.col as usize, &pattern);
        }

        chars
    }
}
