#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    pub fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        assert!(rank.is_joker() == (suit == Suit::None));
        Self { rank, suit }
    }
}

/// str isomorphism
/// "3d" "Th" "2s" for the ordinary cards, "Bj" "Cj" for the jokers
impl From<&str> for Card {
    fn from(s: &str) -> Self {
        let (rank, suit) = s.split_at(s.len() - 1);
        Self::from((Rank::from(rank), Suit::from(suit)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// parse a whitespace-separated card list, e.g. "3d 4c 5h 6s 7d"
pub fn row(s: &str) -> Vec<Card> {
    s.split_whitespace().map(Card::from).collect()
}

use super::rank::Rank;
use super::suit::Suit;
use serde::Deserialize;
use serde::Serialize;
