use super::ranking::Ranking;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::HAND_SIZE;

/// Ranks that complete a straight when an Ace sits on top of the sorted hand.
const WHEEL: [Rank; 4] = [Rank::Two, Rank::Three, Rank::Four, Rank::Five];
const BROADWAY: [Rank; 4] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King];

/// A lazy evaluator for a 5-card hand's category.
///
/// The hand is already sorted by rank, so every test below is a positional
/// check on that sequence. Tests run strongest first and the first hit wins;
/// a lower test may also hold (every four of a kind contains a pair), which
/// is why the order matters.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        let ranking = None
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Ranking::HighCard);
        log::trace!("{} => {}", self.0, ranking);
        ranking
    }

    fn find_straight_flush(&self) -> Option<Ranking> {
        (self.is_flush() && self.is_straight()).then_some(Ranking::StraightFlush)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        let r = self.ranks();
        (same(&r[..4]) || same(&r[1..])).then_some(Ranking::FourOfKind)
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        let r = self.ranks();
        let lo_pair = same(&r[..2]) && same(&r[2..]);
        let hi_pair = same(&r[..3]) && same(&r[3..]);
        (lo_pair || hi_pair).then_some(Ranking::FullHouse)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.is_flush().then_some(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.is_straight().then_some(Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.ranks()
            .windows(3)
            .any(same)
            .then_some(Ranking::ThreeOfKind)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        let r = self.ranks();
        let pairs = [(0, 2), (0, 3), (1, 3)];
        pairs
            .iter()
            .any(|&(a, b)| same(&r[a..a + 2]) && same(&r[b..b + 2]))
            .then_some(Ranking::TwoPairs)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.ranks()
            .windows(2)
            .any(same)
            .then_some(Ranking::OnePair)
    }

    /// sorted by suit, the extremes agree only if all five do
    fn is_flush(&self) -> bool {
        let cards = self.0.by_suit();
        cards[0].suit() == cards[HAND_SIZE - 1].suit()
    }
    /// an Ace on top plays either low (A-2-3-4-5) or high (10-J-Q-K-A)
    fn is_straight(&self) -> bool {
        let r = self.ranks();
        match r[HAND_SIZE - 1] {
            Rank::Ace => r[..4] == WHEEL || r[..4] == BROADWAY,
            _ => r
                .windows(2)
                .all(|w| u8::from(w[1]) == u8::from(w[0]) + 1),
        }
    }
    fn ranks(&self) -> [Rank; HAND_SIZE] {
        let cards = *self.0.cards();
        cards.map(|c| c.rank())
    }
}

fn same(ranks: &[Rank]) -> bool {
    ranks.windows(2).all(|w| w[0] == w[1])
}

/// Classifies a hand given as card tokens, e.g. `["A♠", "4♠", "3♠", "5♠", "2♠"]`.
pub fn classify(tokens: &[&str]) -> Result<Ranking, String> {
    Hand::try_from(tokens)
        .map(Evaluator::from)
        .map(|e| e.find_ranking())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn rank(tokens: &[&str]) -> Ranking {
        classify(tokens).unwrap()
    }

    #[test]
    fn straight_flush() {
        assert_eq!(rank(&["4♥", "5♥", "6♥", "7♥", "8♥"]), Ranking::StraightFlush);
    }

    #[test]
    fn wheel_straight_flush() {
        assert_eq!(rank(&["A♠", "4♠", "3♠", "5♠", "2♠"]), Ranking::StraightFlush);
    }

    #[test]
    fn broadway_straight_flush() {
        assert_eq!(rank(&["10♦", "J♦", "Q♦", "K♦", "A♦"]), Ranking::StraightFlush);
    }

    #[test]
    fn four_oak() {
        assert_eq!(rank(&["4♣", "4♦", "4♥", "4♠", "10♥"]), Ranking::FourOfKind);
        assert_eq!(rank(&["2♣", "K♦", "K♥", "K♠", "K♣"]), Ranking::FourOfKind);
    }

    #[test]
    fn full_house() {
        assert_eq!(rank(&["4♣", "4♦", "5♦", "5♠", "5♥"]), Ranking::FullHouse);
        assert_eq!(rank(&["9♣", "9♦", "9♥", "J♠", "J♥"]), Ranking::FullHouse);
    }

    #[test]
    fn flush() {
        assert_eq!(rank(&["4♣", "5♣", "6♣", "7♣", "Q♣"]), Ranking::Flush);
    }

    #[test]
    fn straight() {
        assert_eq!(rank(&["2♠", "3♥", "4♥", "5♥", "6♥"]), Ranking::Straight);
        assert_eq!(rank(&["10♠", "J♥", "Q♥", "K♥", "A♥"]), Ranking::Straight);
    }

    #[test]
    fn wheel_straight() {
        assert_eq!(rank(&["2♥", "4♦", "5♥", "A♦", "3♠"]), Ranking::Straight);
    }

    #[test]
    fn no_wraparound_straight() {
        assert_eq!(rank(&["Q♥", "K♦", "A♥", "2♦", "3♠"]), Ranking::HighCard);
    }

    #[test]
    fn three_oak() {
        assert_eq!(rank(&["2♥", "2♠", "2♦", "7♥", "A♥"]), Ranking::ThreeOfKind);
        assert_eq!(rank(&["2♥", "7♠", "7♦", "7♥", "A♥"]), Ranking::ThreeOfKind);
        assert_eq!(rank(&["2♥", "3♠", "A♦", "A♥", "A♠"]), Ranking::ThreeOfKind);
    }

    #[test]
    fn two_pairs() {
        assert_eq!(rank(&["2♥", "4♦", "4♥", "A♦", "A♠"]), Ranking::TwoPairs);
        assert_eq!(rank(&["2♥", "2♦", "4♥", "A♦", "A♠"]), Ranking::TwoPairs);
        assert_eq!(rank(&["2♥", "2♦", "4♥", "4♦", "A♠"]), Ranking::TwoPairs);
    }

    #[test]
    fn one_pair() {
        assert_eq!(rank(&["3♥", "4♥", "10♥", "3♦", "A♠"]), Ranking::OnePair);
    }

    #[test]
    fn high_card() {
        assert_eq!(rank(&["A♥", "K♥", "Q♥", "2♦", "3♠"]), Ranking::HighCard);
    }

    #[test]
    fn permutation_invariant() {
        let tokens = ["A♠", "4♠", "3♠", "5♠", "2♠"];
        let mut reversed = tokens;
        reversed.reverse();
        assert_eq!(rank(&tokens), rank(&reversed));
    }

    #[test]
    fn rejects_invalid_hand() {
        assert!(classify(&["A♠", "4♠", "3♠", "5♠"]).is_err());
        assert!(classify(&["A♠", "A♠", "3♠", "5♠", "2♠"]).is_err());
    }

    #[test]
    fn random_hands_classify() {
        for _ in 0..1000 {
            let hand = Hand::random();
            let ranking = Evaluator::from(hand).find_ranking();
            assert!(Ranking::all().contains(&ranking));
        }
    }
}
