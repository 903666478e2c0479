use super::hand::Hand;
use super::shape::Shape;
use crate::Strength;
use crate::cards::card::Card;
use crate::cards::rank::Rank;

/// decides whether a card sequence is a valid instance of each shape
/// family and, if so, its comparable strength.
///
/// every method assumes the sequence is sorted ascending by rank;
/// the Game sorts once at its entry point and nothing here re-sorts.
/// pair and triplet detection lean on that adjacency.
pub struct Classifier<'a>(&'a [Card]);

impl<'a> From<&'a [Card]> for Classifier<'a> {
    fn from(cards: &'a [Card]) -> Self {
        Self(cards)
    }
}

impl Classifier<'_> {
    /// lead-of-round classification. classifiers are tried in a fixed
    /// priority order so that ambiguous lengths resolve deterministically;
    /// the families are mutually exclusive by construction in practice.
    pub fn resolve(&self) -> Option<Hand> {
        None.or_else(|| self.single().map(|s| self.bundle(Shape::Single, s)))
            .or_else(|| self.double().map(|s| self.bundle(Shape::Double, s)))
            .or_else(|| {
                (5..=12).find_map(|n| {
                    self.straight(n, 5)
                        .map(|s| self.bundle(Shape::Straight(n), s))
                })
            })
            .or_else(|| {
                (3..=12).find_map(|n| {
                    self.rolling_bucket(n)
                        .map(|s| self.bundle(Shape::RollingBucket(n), s))
                })
            })
            .or_else(|| {
                (1..=7).find_map(|n| {
                    self.airplane_single(n)
                        .map(|s| self.bundle(Shape::AirplaneSingle(n), s))
                })
            })
            .or_else(|| {
                (1..=7).find_map(|n| {
                    self.airplane_double(n)
                        .map(|s| self.bundle(Shape::AirplaneDouble(n), s))
                })
            })
            .or_else(|| self.bomb().map(|s| self.bundle(Shape::Bomb(self.0.len()), s)))
            .or_else(|| self.nuke().map(|s| self.bundle(Shape::Nuke, s)))
    }

    /// bombs and nukes may be attempted regardless of the binding shape
    pub fn escalation(&self) -> Option<Hand> {
        None.or_else(|| self.bomb().map(|s| self.bundle(Shape::Bomb(self.0.len()), s)))
            .or_else(|| self.nuke().map(|s| self.bundle(Shape::Nuke, s)))
    }

    /// re-validation against a binding shape: only that family's
    /// classifier is attempted, with its stored length parameter.
    pub fn classify(&self, shape: Shape) -> Option<Hand> {
        let strength = match shape {
            Shape::Single => self.single(),
            Shape::Double => self.double(),
            Shape::Straight(n) => self.straight(n, 5),
            Shape::RollingBucket(n) => self.rolling_bucket(n),
            Shape::AirplaneSingle(n) => self.airplane_single(n),
            Shape::AirplaneDouble(n) => self.airplane_double(n),
            Shape::Bomb(_) => self.bomb(),
            Shape::Nuke => self.nuke(),
        }?;
        let shape = match shape {
            Shape::Bomb(_) => Shape::Bomb(self.0.len()), // answer carries its own count
            other => other,
        };
        Some(self.bundle(shape, strength))
    }

    fn bundle(&self, shape: Shape, strength: Strength) -> Hand {
        Hand::from_parts(shape, strength, self.0.to_vec())
    }

    ///

    fn single(&self) -> Option<Strength> {
        match self.0 {
            [card] => Some(u8::from(card.rank())),
            _ => None,
        }
    }

    fn double(&self) -> Option<Strength> {
        match self.0 {
            [a, b] if a.rank() == b.rank() && !a.is_joker() => Some(u8::from(a.rank())),
            _ => None,
        }
    }

    fn straight(&self, n: usize, min: usize) -> Option<Strength> {
        let ranks = self.0.iter().map(|c| c.rank()).collect::<Vec<Rank>>();
        Self::run(&ranks, n, min)
    }

    fn rolling_bucket(&self, n: usize) -> Option<Strength> {
        if self.0.len() % 2 != 0 || !(3..=12).contains(&n) || self.0.len() / 2 != n {
            return None;
        }
        let mut anchors = Vec::with_capacity(n);
        for pair in self.0.chunks(2) {
            if pair[0].rank() != pair[1].rank() {
                return None;
            }
            anchors.push(pair[0].rank());
        }
        Self::run(&anchors, n, 3)
    }

    fn airplane_single(&self, n: usize) -> Option<Strength> {
        if self.0.len() % 4 != 0 || self.0.len() / 4 != n {
            return None;
        }
        Self::run(&self.triples(false)?, n, 1)
    }

    fn airplane_double(&self, n: usize) -> Option<Strength> {
        if self.0.len() % 5 != 0 || self.0.len() / 5 != n {
            return None;
        }
        Self::run(&self.triples(true)?, n, 1)
    }

    fn bomb(&self) -> Option<Strength> {
        match self.0 {
            [first, rest @ ..] if rest.len() >= 3 => (!first.is_joker()
                && rest.iter().all(|c| c.rank() == first.rank()))
            .then(|| u8::from(first.rank())),
            _ => None,
        }
    }

    fn nuke(&self) -> Option<Strength> {
        match self.0 {
            [a, b] if a.is_joker() && b.is_joker() => {
                let colours = [a, b]
                    .iter()
                    .filter(|c| c.rank() == Rank::ColourJoker)
                    .count();
                Some(1 + colours as Strength)
            }
            _ => None,
        }
    }

    ///

    /// sliding-window scan for exact rank-triples over the sorted
    /// sequence. bails on any fourth equal card left adjacent to a
    /// consumed window, which is what keeps bombs out of the airplane
    /// families. with `skip_pairs` (double-passenger mode) an exact
    /// pair that is not part of a triple is stepped over instead.
    ///
    /// leftover passenger cards are deliberately *not* rank-checked
    /// against the triplet anchors; only the caller's total-length
    /// modulus constrains them. tightening this would be a rule change.
    fn triples(&self, skip_pairs: bool) -> Option<Vec<Rank>> {
        let cards = self.0;
        let mut anchors = Vec::new();
        let mut i = 0;
        while i + 2 < cards.len() {
            if i != 0 && cards[i].rank() == cards[i - 1].rank() {
                return None;
            }
            if cards[i].rank() == cards[i + 2].rank()
                && (i + 3 >= cards.len() || cards[i].rank() != cards[i + 3].rank())
            {
                anchors.push(cards[i].rank());
                i += 2;
            } else if skip_pairs
                && cards[i].rank() == cards[i + 1].rank()
                && cards[i].rank() != cards[i + 2].rank()
            {
                i += 1;
            }
            i += 1;
        }
        Some(anchors)
    }

    /// a consecutive ascending run of `n` anchor ranks, no jokers,
    /// nothing above Ace past the first position. strength is the
    /// highest rank in the run.
    fn run(ranks: &[Rank], n: usize, min: usize) -> Option<Strength> {
        if n < min || n > 12 || ranks.len() != n {
            return None;
        }
        if ranks.iter().any(Rank::is_joker) {
            return None;
        }
        for pair in ranks.windows(2) {
            if u8::from(pair[1]) != u8::from(pair[0]) + 1 || pair[1] == Rank::Two {
                return None;
            }
        }
        ranks.last().map(|r| u8::from(*r))
    }
}
