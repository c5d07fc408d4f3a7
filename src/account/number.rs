use super::cell::Cell;
use super::digit::Digit;
use super::error::ParseError;
use super::grid::Grid;
use crate::ACCOUNT_DIGITS;

const LIMIT: u64 = 1_000_000_000;

/// A 9-digit bank account number.
///
/// Leading zeros are significant on paper but not in the value: the block
/// reading `023056789` is the number `23056789`. [`Display`] pads back to
/// nine digits.
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccountNumber(u32);

impl AccountNumber {
    /// Digits from most to least significant.
    pub fn digits(&self) -> [Digit; ACCOUNT_DIGITS] {
        std::array::from_fn(|i| {
            let place = (ACCOUNT_DIGITS - 1 - i) as u32;
            Digit::place(self.0, place)
        })
    }
}

/// digits accumulate left to right, `n = n * 10 + d`
impl From<&Grid> for AccountNumber {
    fn from(grid: &Grid) -> Self {
        Self(
            grid.cells()
                .map(|cell| Digit::from(&cell))
                .fold(0u32, |n, d| n * 10 + u8::from(d) as u32),
        )
    }
}
impl From<AccountNumber> for Grid {
    fn from(number: AccountNumber) -> Self {
        Grid::from(number.digits().map(Cell::from))
    }
}

/// str parsing, through [`Grid`]
impl TryFrom<&str> for AccountNumber {
    type Error = ParseError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Grid::try_from(s).map(|grid| Self::from(&grid))
    }
}

/// u64 injection
impl TryFrom<u64> for AccountNumber {
    type Error = ParseError;
    fn try_from(n: u64) -> Result<Self, Self::Error> {
        match n {
            n if n < LIMIT => Ok(Self(n as u32)),
            n => Err(ParseError::Overflow(n)),
        }
    }
}
impl From<AccountNumber> for u32 {
    fn from(n: AccountNumber) -> u32 {
        n.0
    }
}

impl std::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:0width$}", self.0, width = ACCOUNT_DIGITS)
    }
}

/// Reads the account number drawn in a 3-row block of pipes and underscores.
pub fn decode(block: &str) -> Result<u32, ParseError> {
    let number = AccountNumber::try_from(block)?;
    log::debug!("decoded account {}", number);
    Ok(u32::from(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_TO_NINE: &str = concat!(
        "    _  _     _  _  _  _  _ \n",
        "  | _| _||_||_ |_   ||_||_|\n",
        "  ||_  _|  | _||_|  ||_| _|\n",
    );
    const LEADING_ZERO: &str = concat!(
        " _  _  _  _  _  _  _  _  _ \n",
        "| | _| _|| ||_ |_   ||_||_|\n",
        "|_||_  _||_| _||_|  ||_| _|\n",
    );
    const EIGHTS_AND_NINES: &str = concat!(
        " _  _  _  _  _  _  _  _  _ \n",
        "|_| _| _||_||_ |_ |_||_||_|\n",
        "|_||_  _||_| _||_| _||_| _|\n",
    );

    #[test]
    fn decode_one_to_nine() {
        assert_eq!(decode(ONE_TO_NINE), Ok(123456789));
    }

    #[test]
    fn decode_leading_zero() {
        assert_eq!(decode(LEADING_ZERO), Ok(23056789));
        assert_eq!(AccountNumber::try_from(LEADING_ZERO).unwrap().to_string(), "023056789");
    }

    #[test]
    fn decode_eights_and_nines() {
        assert_eq!(decode(EIGHTS_AND_NINES), Ok(823856989));
    }

    #[test]
    fn decode_without_final_newline() {
        assert_eq!(decode(ONE_TO_NINE.trim_end_matches('\n')), Ok(123456789));
    }

    #[test]
    fn render_documented_block() {
        let number = AccountNumber::try_from(123456789u64).unwrap();
        assert_eq!(Grid::from(number).to_string(), ONE_TO_NINE);
    }

    #[test]
    fn render_then_read() {
        for n in [0u64, 7, 10101010, 99999999, 314159265, 999999999] {
            let number = AccountNumber::try_from(n).unwrap();
            let block = Grid::from(number).to_string();
            assert_eq!(decode(&block), Ok(n as u32));
        }
    }

    #[test]
    fn digits_most_significant_first() {
        let digits = AccountNumber::try_from(23056789u64).unwrap().digits();
        let digits = digits.map(u8::from);
        assert_eq!(digits, [0, 2, 3, 0, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn overflow() {
        assert_eq!(AccountNumber::try_from(LIMIT), Err(ParseError::Overflow(LIMIT)));
    }

    #[test]
    fn malformed_block_fails() {
        assert!(decode("not an account").is_err());
    }
}
