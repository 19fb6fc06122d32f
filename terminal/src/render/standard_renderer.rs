use engine::{CellKind, Direction};
use super::traits::CellRenderer;
use super::types::{CharDimensions, CharPattern};

pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }

    fn render_head(&self, heading: Option<Direction>) -> CharPattern {
        // 1x1 cells show where the snake is going; wider cells are solid
        if self.char_dims.horizontal == 1 && self.char_dims.vertical == 1 {
            let arrow = match heading {
                Some(Direction::Up) => '▲',
                Some(Direction::Right) => '▶',
                Some(Direction::Down) => '▼',
                Some(Direction::Left) => '◀',
                None => '█',
            };
            return CharPattern::new(vec![vec![arrow]]);
        }
        CharPattern::single('█', self.char_dims)
    }

    fn render_food(&self) -> CharPattern {
        if self.char_dims.vertical == 1 {
            return CharPattern::single('●', self.char_dims);
        }

        // Checkerboard for taller cells
        let mut chars = vec![vec![' '; self.char_dims.horizontal]; self.char_dims.vertical];
        for (y, row) in chars.iter_mut().enumerate() {
            for (x, ch) in row.iter_mut().enumerate() {
                if (x + y) % 2 == 0 {
                    *ch = '●';
                }
            }
        }
        CharPattern::new(chars)
    }
}

impl CellRenderer for StandardRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn render_cell(&self, kind: CellKind, heading: Option<Direction>) -> CharPattern {
        match kind {
            CellKind::Head => self.render_head(heading),
            CellKind::Body => CharPattern::single('▓', self.char_dims),
            CellKind::Tail => CharPattern::single('▒', self.char_dims),
            CellKind::Food => self.render_food(),
            CellKind::Empty => CharPattern::empty(self.char_dims),
        }
    }
}
