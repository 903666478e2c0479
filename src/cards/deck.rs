use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// a full pack of cards in deal order. one pack holds 52 suited cards
/// plus the two jokers; tables above the single-deck threshold play
/// with two packs. consumption is strictly front-to-back via Iterator,
/// so whoever shuffles decides the deal.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub const SINGLE: usize = 54;
    pub const DOUBLE: usize = 108;

    pub fn single() -> Self {
        Self(Self::pack())
    }
    pub fn double() -> Self {
        let mut cards = Self::pack();
        cards.extend(Self::pack());
        Self(cards)
    }

    /// Fisher-Yates
    pub fn shuffle(&mut self) {
        let ref mut rng = rand::rng();
        for i in (1..self.0.len()).rev() {
            let j = rng.random_range(0..=i);
            self.0.swap(i, j);
        }
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    fn pack() -> Vec<Card> {
        let mut cards = Vec::with_capacity(Self::SINGLE);
        for r in u8::from(Rank::Three)..=u8::from(Rank::Two) {
            for s in u8::from(Suit::Diamond)..=u8::from(Suit::Spade) {
                cards.push(Card::from((Rank::from(r), Suit::from(s))));
            }
        }
        cards.push(Card::from((Rank::BlackJoker, Suit::None)));
        cards.push(Card::from((Rank::ColourJoker, Suit::None)));
        cards
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

use rand::Rng;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pack_size() {
        assert_eq!(Deck::single().size(), Deck::SINGLE);
    }

    #[test]
    fn double_pack_size() {
        assert_eq!(Deck::double().size(), Deck::DOUBLE);
    }

    #[test]
    fn jokers_per_pack() {
        let jokers = Deck::single()
            .into_iter()
            .filter(|c| c.is_joker())
            .count();
        assert_eq!(jokers, 2);
        let colours = Deck::double()
            .into_iter()
            .filter(|c| c.rank() == Rank::ColourJoker)
            .count();
        assert_eq!(colours, 2);
    }

    #[test]
    fn shuffle_preserves_multiset() {
        let mut deck = Deck::double();
        deck.shuffle();
        let mut shuffled = deck.into_iter().collect::<Vec<Card>>();
        let mut pristine = Deck::double().into_iter().collect::<Vec<Card>>();
        shuffled.sort();
        pristine.sort();
        assert_eq!(shuffled, pristine);
    }
}
