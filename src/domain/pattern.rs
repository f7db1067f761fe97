//! Checkerboard pattern rendering

use crate::domain::Board;

/// Colour of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Light,
    Dark,
}

impl Cell {
    /// Cell at a 0-indexed position: light when `row + col` is even.
    pub fn at(row: usize, col: usize) -> Self {
        if (row + col) % 2 == 0 {
            Cell::Light
        } else {
            Cell::Dark
        }
    }
}

/// Characters drawn for light and dark squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub light: char,
    pub dark: char,
}

impl Palette {
    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Light => self.light,
            Cell::Dark => self.dark,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: ' ',
            dark: '#',
        }
    }
}

/// Render a board with the default palette.
pub fn render(board: &Board) -> String {
    render_with(board, &Palette::default())
}

/// Render a board as `size` rows of `size` glyphs.
///
/// Rows are joined by `\n`; there is no newline after the last row, and a
/// zero-sized board renders as the empty string.
pub fn render_with(board: &Board, palette: &Palette) -> String {
    let n = board.size();
    let mut out = String::with_capacity(n * (n + 1));
    for row in 0..n {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..n {
            out.push(palette.glyph(Cell::at(row, col)));
        }
    }
    out
}
