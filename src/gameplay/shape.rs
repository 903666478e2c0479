use serde::Deserialize;
use serde::Serialize;

/// the nine recognized shape families, each carrying its own
/// length parameter where the family is open-ended.
///
/// two binding hands constrain each other only when their Shape
/// values are equal, which folds the same-kind same-length rule
/// into plain enum equality. Bomb is the exception: its payload
/// is its own card count and bombs of different counts still
/// compete, so comparison special-cases it.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Single,
    Double,
    Straight(usize),       // run length, 5..=12
    RollingBucket(usize),  // pair count, 3..=12
    AirplaneSingle(usize), // triplet count, 1..=7
    AirplaneDouble(usize), // triplet count, 1..=7
    Bomb(usize),           // card count, >= 4
    Nuke,
}

impl Shape {
    pub fn is_bomb(&self) -> bool {
        matches!(self, Shape::Bomb(_))
    }
    pub fn is_nuke(&self) -> bool {
        matches!(self, Shape::Nuke)
    }

    /// the family's size parameter; meaning varies per kind
    pub fn length(&self) -> usize {
        match self {
            Shape::Single => 1,
            Shape::Double => 2,
            Shape::Nuke => 2,
            Shape::Straight(n) => *n,
            Shape::RollingBucket(n) => *n,
            Shape::AirplaneSingle(n) => *n,
            Shape::AirplaneDouble(n) => *n,
            Shape::Bomb(n) => *n,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Shape::Single => write!(f, "Single"),
            Shape::Double => write!(f, "Double"),
            Shape::Straight(n) => write!(f, "Straight x{}", n),
            Shape::RollingBucket(n) => write!(f, "RollingBucket x{}", n),
            Shape::AirplaneSingle(n) => write!(f, "AirplaneSingle x{}", n),
            Shape::AirplaneDouble(n) => write!(f, "AirplaneDouble x{}", n),
            Shape::Bomb(n) => write!(f, "Bomb x{}", n),
            Shape::Nuke => write!(f, "Nuke"),
        }
    }
}
