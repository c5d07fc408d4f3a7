use super::cell::BLANK;
use super::cell::Cell;
use super::cell::PIPE;
use super::cell::UNDERSCORE;

/// A decimal digit read from, or drawn into, a glyph cell.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Digit(u8);

impl Digit {
    /// Canonical glyph rows for this digit.
    pub fn glyph(&self) -> [&'static str; 3] {
        match self.0 {
            0 => [" _ ", "| |", "|_|"],
            1 => ["   ", "  |", "  |"],
            2 => [" _ ", " _|", "|_ "],
            3 => [" _ ", " _|", " _|"],
            4 => ["   ", "|_|", "  |"],
            5 => [" _ ", "|_ ", " _|"],
            6 => [" _ ", "|_ ", "|_|"],
            7 => [" _ ", "  |", "  |"],
            8 => [" _ ", "|_|", "|_|"],
            9 => [" _ ", "|_|", " _|"],
            _ => unreachable!("digits are 0..=9"),
        }
    }
    /// The decimal digit of `n` at `place`, counting from the least significant.
    pub(super) fn place(n: u32, place: u32) -> Self {
        Self((n / 10u32.pow(place) % 10) as u8)
    }
}

/// Classifies a cell by the first matching predicate, strongest evidence
/// first. Only a handful of positions are inspected, so the order matters:
/// a 7 would also pass the test for 3, and a 4 the test for 9.
/// Whatever matches nothing reads as 8.
impl From<&Cell> for Digit {
    fn from(c: &Cell) -> Self {
        let n = match () {
            _ if c.mid() == BLANK && c.bot() == UNDERSCORE => 0,
            _ if c.top() == BLANK && c.mid() == BLANK => 1,
            _ if c.bot_right() == BLANK => 2,
            _ if c.mid_left() == PIPE && c.top() == BLANK => 4,
            _ if c.bot() == BLANK && c.top() == UNDERSCORE => 7,
            _ if c.bot_left() == BLANK && c.mid_left() == BLANK => 3,
            _ if c.bot_left() == BLANK && c.mid_right() == BLANK => 5,
            _ if c.bot_left() == BLANK && c.mid_right() == PIPE => 9,
            _ if c.mid_right() == BLANK => 6,
            _ => 8,
        };
        log::trace!("cell {:?} => {}", c.rows(), n);
        Self(n)
    }
}
impl From<Digit> for Cell {
    fn from(d: Digit) -> Self {
        Cell::from(d.glyph())
    }
}

/// u8 isomorphism
impl TryFrom<u8> for Digit {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0..=9 => Ok(Self(n)),
            _ => Err(format!("invalid digit u8: {}", n)),
        }
    }
}
impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
