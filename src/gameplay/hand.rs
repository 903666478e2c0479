use super::shape::Shape;
use crate::Strength;
use crate::cards::card::Card;
use serde::Deserialize;
use serde::Serialize;

/// a successful classification: the shape family, the integer
/// strength of its anchor, and the cards it was derived from.
///
/// only ever constructed by the Classifier, so strength is
/// guaranteed consistent with shape and cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    shape: Shape,
    strength: Strength,
    cards: Vec<Card>,
}

impl Hand {
    pub fn shape(&self) -> Shape {
        self.shape
    }
    pub fn strength(&self) -> Strength {
        self.strength
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// whether this hand may legally follow `prev` as the binding hand.
    ///
    /// nukes beat everything below a stronger nuke. bombs beat any
    /// non-bomb and any smaller bomb of lower rank (an answering bomb
    /// may not shrink). everything else competes only within its own
    /// shape and length, strictly greater strength required.
    pub fn beats(&self, prev: &Hand) -> bool {
        match (self.shape, prev.shape) {
            (Shape::Nuke, Shape::Nuke) => self.strength > prev.strength,
            (Shape::Nuke, _) => true,
            (_, Shape::Nuke) => false,
            (Shape::Bomb(n), Shape::Bomb(m)) => n >= m && self.strength > prev.strength,
            (Shape::Bomb(_), _) => true,
            (_, Shape::Bomb(_)) => false,
            (mine, theirs) => mine == theirs && self.strength > prev.strength,
        }
    }

    pub(crate) fn from_parts(shape: Shape, strength: Strength, cards: Vec<Card>) -> Self {
        Self {
            shape,
            strength,
            cards,
        }
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.shape)?;
        for card in self.cards.iter() {
            write!(f, " {}", card)?;
        }
        Ok(())
    }
}
