use super::cell::BLANK;
use super::cell::Cell;
use super::cell::PIPE;
use super::cell::UNDERSCORE;
use super::error::ParseError;
use crate::ACCOUNT_DIGITS;
use crate::CELL_HEIGHT;
use crate::CELL_WIDTH;
use crate::ROW_WIDTH;

/// A validated account block: three rows of exactly 27 glyph characters.
///
/// Digit `i` occupies columns `3i..3i+3` of every row. Parsing checks the
/// geometry and the character set up front, so indexing a cell afterwards
/// can never read past a row or pick up a stray character.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Grid([[char; ROW_WIDTH]; CELL_HEIGHT]);

impl Grid {
    /// The 3×3 window of digit `i`, counting from the left.
    pub fn cell(&self, i: usize) -> Option<Cell> {
        (i < ACCOUNT_DIGITS).then(|| self.window(i))
    }
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..ACCOUNT_DIGITS).map(|i| self.window(i))
    }
    fn window(&self, i: usize) -> Cell {
        let rows: [[char; CELL_WIDTH]; CELL_HEIGHT] =
            std::array::from_fn(|r| std::array::from_fn(|c| self.0[r][i * CELL_WIDTH + c]));
        Cell::from(rows)
    }
}

/// cells laid out left to right
impl From<[Cell; ACCOUNT_DIGITS]> for Grid {
    fn from(cells: [Cell; ACCOUNT_DIGITS]) -> Self {
        Self(std::array::from_fn(|r| {
            std::array::from_fn(|c| cells[c / CELL_WIDTH].rows()[r][c % CELL_WIDTH])
        }))
    }
}

/// str parsing
///
/// Rows are separated by `\n` (or `\r\n`). Blank lines after the third row
/// are ignored, as is trailing whitespace past column 27.
impl TryFrom<&str> for Grid {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let lines = s.lines().collect::<Vec<&str>>();
        if lines.len() < CELL_HEIGHT {
            return Err(ParseError::Rows(lines.len()));
        }
        if let Some(row) = (CELL_HEIGHT..lines.len()).find(|&i| !lines[i].trim().is_empty()) {
            return Err(ParseError::Trailing(row));
        }
        let mut grid = [[BLANK; ROW_WIDTH]; CELL_HEIGHT];
        for (row, line) in lines.iter().take(CELL_HEIGHT).enumerate() {
            let chars = line.chars().collect::<Vec<char>>();
            let width = chars.len();
            if width < ROW_WIDTH || chars[ROW_WIDTH..].iter().any(|c| !c.is_whitespace()) {
                return Err(ParseError::Width { row, width });
            }
            for (col, &c) in chars[..ROW_WIDTH].iter().enumerate() {
                match c {
                    BLANK | UNDERSCORE | PIPE => grid[row][col] = c,
                    found => return Err(ParseError::Glyph { row, col, found }),
                }
            }
        }
        Ok(Self(grid))
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.0.iter() {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}
