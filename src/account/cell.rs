use crate::CELL_HEIGHT;
use crate::CELL_WIDTH;

pub const BLANK: char = ' ';
pub const UNDERSCORE: char = '_';
pub const PIPE: char = '|';

/// The 3×3 character window holding one digit.
///
/// ```text
///  _      top
/// |_|     mid_left  mid  mid_right
/// |_|     bot_left  bot  bot_right
/// ```
///
/// The corners of the top row are always blank in the glyph alphabet and
/// are never read.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Cell([[char; CELL_WIDTH]; CELL_HEIGHT]);

impl Cell {
    pub fn top(&self) -> char {
        self.0[0][1]
    }
    pub fn mid_left(&self) -> char {
        self.0[1][0]
    }
    pub fn mid(&self) -> char {
        self.0[1][1]
    }
    pub fn mid_right(&self) -> char {
        self.0[1][2]
    }
    pub fn bot_left(&self) -> char {
        self.0[2][0]
    }
    pub fn bot(&self) -> char {
        self.0[2][1]
    }
    pub fn bot_right(&self) -> char {
        self.0[2][2]
    }
    pub fn rows(&self) -> &[[char; CELL_WIDTH]; CELL_HEIGHT] {
        &self.0
    }
}

impl From<[[char; CELL_WIDTH]; CELL_HEIGHT]> for Cell {
    fn from(rows: [[char; CELL_WIDTH]; CELL_HEIGHT]) -> Self {
        Self(rows)
    }
}

/// three 3-character rows, e.g. `[" _ ", "|_|", "|_|"]`
impl From<[&str; CELL_HEIGHT]> for Cell {
    fn from(rows: [&str; CELL_HEIGHT]) -> Self {
        Self(rows.map(|row| {
            let mut chars = row.chars();
            std::array::from_fn(|_| chars.next().unwrap_or(BLANK))
        }))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.0.iter() {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}
