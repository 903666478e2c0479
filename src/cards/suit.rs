use serde::Deserialize;
use serde::Serialize;

/// suit never affects legality or strength. it exists to keep
/// cards distinguishable, with None reserved for the two jokers.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Diamond = 1,
    Club = 2,
    Heart = 3,
    Spade = 4,
    None = 5,
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            1 => Suit::Diamond,
            2 => Suit::Club,
            3 => Suit::Heart,
            4 => Suit::Spade,
            5 => Suit::None,
            _ => panic!("Invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl From<&str> for Suit {
    fn from(s: &str) -> Self {
        match s {
            "d" => Suit::Diamond,
            "c" => Suit::Club,
            "h" => Suit::Heart,
            "s" => Suit::Spade,
            "j" => Suit::None,
            _ => panic!("Invalid suit str: {}", s),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Diamond => "d",
                Suit::Club => "c",
                Suit::Heart => "h",
                Suit::Spade => "s",
                Suit::None => "j",
            }
        )
    }
}
