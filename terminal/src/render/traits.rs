use engine::{CellKind, Direction};
use super::types::{CharDimensions, CharPattern};

pub trait CellRenderer {
    fn char_dimensions(&self) -> CharDimensions;

    /// `heading` is the snake's current direction, passed for head cells only.
    fn render_cell(&self, kind: CellKind, heading: Option<Direction>) -> CharPattern;
}
