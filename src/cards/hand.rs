use super::card::Card;
use crate::Arbitrary;
use crate::HAND_SIZE;

/// Hand represents an unordered set of exactly five distinct Cards.
///
/// The cards are kept sorted ascending by rank (suit breaks ties), so
/// positional checks like "first four equal" or "last three equal" can be
/// read straight off the array. Construction order never leaks through.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    /// Cards ascending by rank.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }
    /// Cards ascending by suit, for flush detection.
    pub fn by_suit(&self) -> [Card; HAND_SIZE] {
        let mut cards = self.0;
        cards.sort_by_key(|c| (c.suit(), c.rank()));
        cards
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        let ref mut rng = rand::rng();
        let cards = rand::seq::index::sample(rng, 52, HAND_SIZE)
            .into_iter()
            .map(|i| Card::from(i as u8))
            .collect::<Vec<Card>>();
        Self::try_from(cards).expect("sampled without replacement")
    }
}

/// Vec<Card> isomorphism (up to permutation, this always comes out sorted)
impl TryFrom<Vec<Card>> for Hand {
    type Error = String;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let mask = cards.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b);
        if mask.count_ones() as usize != cards.len() {
            return Err("hand contains a duplicate card".into());
        }
        let mut cards = <[Card; HAND_SIZE]>::try_from(cards)
            .map_err(|v| format!("hand must contain exactly {} cards, got {}", HAND_SIZE, v.len()))?;
        cards.sort();
        Ok(Self(cards))
    }
}
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.0.to_vec()
    }
}

/// token slice isomorphism, e.g. `["A♠", "4♠", "3♠", "5♠", "2♠"]`
impl TryFrom<&[&str]> for Hand {
    type Error = String;
    fn try_from(tokens: &[&str]) -> Result<Self, Self::Error> {
        tokens
            .iter()
            .map(|s| Card::try_from(*s))
            .collect::<Result<Vec<Card>, _>>()
            .and_then(Self::try_from)
    }
}

/// str isomorphism, tokens separated by whitespace and/or commas
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let tokens = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect::<Vec<&str>>();
        Self::try_from(tokens.as_slice())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    #[test]
    fn sorted_on_construction() {
        let hand = Hand::try_from("A♠ 4♠ 3♠ 5♠ 2♠").unwrap();
        let ranks = hand.cards().iter().map(Card::rank).collect::<Vec<_>>();
        assert_eq!(ranks, vec![Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace]);
    }

    #[test]
    fn order_independent() {
        let a = Hand::try_from("2♥ 4♦ 4♥ A♦ A♠").unwrap();
        let b = Hand::try_from("A♠, 4♥, 2♥, A♦, 4♦").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn from_token_slice() {
        let tokens: &[&str] = &["4♣", "4♦", "4♥", "4♠", "10♥"];
        let hand = Hand::try_from(tokens).unwrap();
        assert_eq!(hand.to_string(), "4♣ 4♦ 4♥ 4♠ 10♥");
    }

    #[test]
    fn by_suit_groups_suits() {
        let hand = Hand::try_from("2♥ 3♣ 4♥ 5♣ 6♥").unwrap();
        let suits = hand.by_suit().iter().map(Card::suit).collect::<Vec<_>>();
        assert_eq!(suits, vec![Suit::C, Suit::C, Suit::H, Suit::H, Suit::H]);
    }

    #[test]
    fn rejects_wrong_size() {
        assert!(Hand::try_from("2♥ 3♣ 4♥ 5♣").is_err());
        assert!(Hand::try_from("2♥ 3♣ 4♥ 5♣ 6♥ 7♥").is_err());
        assert!(Hand::try_from("").is_err());
    }

    #[test]
    fn rejects_duplicates() {
        assert!(Hand::try_from("2♥ 2♥ 4♥ 5♣ 6♥").is_err());
    }

    #[test]
    fn rejects_bad_token() {
        assert!(Hand::try_from("2♥ 3♣ 4♥ 5♣ Zz").is_err());
    }

    #[test]
    fn random_is_valid() {
        for _ in 0..100 {
            let hand = Hand::random();
            let mask = hand.cards().iter().map(|c| u64::from(*c)).fold(0, |a, b| a | b);
            assert_eq!(mask.count_ones() as usize, HAND_SIZE);
        }
    }
}
