use thiserror::Error;

/// Errors raised when an account block does not have the expected shape.
///
/// Well-formed blocks never fail: any 3×3 window of blanks, underscores and
/// pipes classifies to some digit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("account block needs 3 rows, found {0}")]
    Rows(usize),

    #[error("row {row} is {width} characters wide, expected 27")]
    Width { row: usize, width: usize },

    #[error("row {row} column {col}: {found:?} is not one of ' ', '_', '|'")]
    Glyph { row: usize, col: usize, found: char },

    #[error("unexpected text after the third row, on row {0}")]
    Trailing(usize),

    #[error("{0} does not fit in 9 digits")]
    Overflow(u64),
}
