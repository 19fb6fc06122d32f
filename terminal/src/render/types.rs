#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub chars_per_cell: CharDimensions,
}

/// Terminal characters used to draw one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharDimensions {
    pub horizontal: usize,
    pub vertical: usize,
}

impl CharDimensions {
    pub fn new(horizontal: usize, vertical: usize) -> Self {
        Self { horizontal, vertical }
    }
}

pub struct CharGrid {
    lines: Vec<Vec<char>>,
    rows: usize,
    cols: usize,
    char_dims: CharDimensions,
}

impl CharGrid {
    pub fn new(rows: usize, cols: usize, char_dims: CharDimensions) -> Self {
        let lines = vec![vec![' '; cols * char_dims.horizontal]; rows * char_dims.vertical];
        Self { lines, rows, cols, char_dims }
    }

    /// Stamps `pattern` over the characters of grid cell (`row`, `col`).
    /// Characters falling outside the grid are dropped.
    pub fn set_cell(&mut self, row: usize, col: usize, pattern: &CharPattern) {
        let top = row * self.char_dims.vertical;
        let left = col * self.char_dims.horizontal;

        for (dy, pattern_row) in pattern.chars.iter().enumerate() {
            let Some(line) = self.lines.get_mut(top + dy) else { break };
            for (dx, &ch) in pattern_row.iter().enumerate() {
                if let Some(slot) = line.get_mut(left + dx) {
                    *slot = ch;
                }
            }
        }
    }

    pub fn into_lines(self) -> Vec<Vec<char>> {
        self.lines
    }

    pub fn into_strings(self) -> Vec<String> {
        self.lines.into_iter().map(|line| line.into_iter().collect()).collect()
    }

    pub fn physical_width(&self) -> usize {
        self.cols * self.char_dims.horizontal
    }

    pub fn physical_height(&self) -> usize {
        self.rows * self.char_dims.vertical
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharPattern {
    pub chars: Vec<Vec<char>>,
}

impl CharPattern {
    pub fn new(chars: Vec<Vec<char>>) -> Self {
        Self { chars }
    }

    pub fn single(ch: char, dims: CharDimensions) -> Self {
        Self { chars: vec![vec![ch; dims.horizontal]; dims.vertical] }
    }

    pub fn empty(dims: CharDimensions) -> Self {
        Self::single(' ', dims)
    }
}
