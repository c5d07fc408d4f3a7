/// The category of a 5-card poker hand.
///
/// Discriminants follow hand strength, so the derived `Ord` agrees with
/// the usual poker ordering: a higher value beats a lower one. Kickers are
/// not modelled; two hands of the same category compare equal here.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ranking {
    HighCard = 0,
    OnePair = 1,
    TwoPairs = 2,
    ThreeOfKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfKind = 7,
    StraightFlush = 8,
}

impl Ranking {
    /// All nine categories, weakest first.
    pub const fn all() -> [Ranking; 9] {
        [
            Ranking::HighCard,
            Ranking::OnePair,
            Ranking::TwoPairs,
            Ranking::ThreeOfKind,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::FullHouse,
            Ranking::FourOfKind,
            Ranking::StraightFlush,
        ]
    }
}

/// u8 isomorphism
impl From<Ranking> for u8 {
    fn from(r: Ranking) -> u8 {
        r as u8
    }
}
impl TryFrom<u8> for Ranking {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(n as usize)
            .copied()
            .ok_or_else(|| format!("invalid ranking u8: {}", n))
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::TwoPairs => write!(f, "TwoPairs"),
            Ranking::ThreeOfKind => write!(f, "ThreeOfKind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::FourOfKind => write!(f, "FourOfKind"),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}
